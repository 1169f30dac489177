//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Implementation answering from a prepared script
//! - `choice`: Typed helpers mapping closed enumerations onto prompts

pub mod choice;
pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use choice::{ask_choice, ask_choices, ask_confirm, ask_text, Choice};
pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;
pub use scripted::{ScriptedAnswers, ScriptedPrompter};

/// Convenience function to create the default terminal prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
