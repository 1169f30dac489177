//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, SingleChoiceConfig, TextPromptConfig,
};
use crate::error::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};

const REQUIRED_MESSAGE: &str = "This field is required.";

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(!config.required);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        if config.required {
            input = input.validate_with(|value: &String| -> Result<(), &'static str> {
                if value.trim().is_empty() {
                    Err(REQUIRED_MESSAGE)
                } else {
                    Ok(())
                }
            });
        }

        Ok(input.interact_text()?.trim().to_string())
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        Ok(select.interact()?)
    }
}

impl super::interface::MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let indices = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact()?;

        Ok(indices)
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}
