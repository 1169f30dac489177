use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, PromptProvider, SingleChoiceConfig,
    TextPromptConfig,
};
use crate::error::{Error, Result};

/// A closed set of options presented to the user as a selection list.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Variant taken for an unrecognized non-interactive answer.
    const FALLBACK: Option<Self> = None;

    /// Text shown for this variant in a selection list.
    fn label(&self) -> &'static str;

    fn labels() -> Vec<String> {
        Self::ALL.iter().map(|choice| choice.label().to_string()).collect()
    }
}

fn choice_at<T: Choice>(index: usize) -> Result<T> {
    T::ALL.get(index).copied().ok_or_else(|| {
        Error::ValidationError(format!(
            "selection {index} is out of range for {} options",
            T::ALL.len()
        ))
    })
}

/// Asks for a required, non-empty line of text.
pub fn ask_text(prompter: &dyn PromptProvider, prompt: &str) -> Result<String> {
    let config =
        TextPromptConfig { prompt: prompt.to_string(), default: None, required: true };
    prompter.prompt_text(&config)
}

/// Asks the user to pick one variant of `T`.
pub fn ask_choice<T: Choice>(
    prompter: &dyn PromptProvider,
    prompt: &str,
    default: T,
) -> Result<T> {
    let config = SingleChoiceConfig {
        prompt: prompt.to_string(),
        choices: T::labels(),
        default_index: T::ALL.iter().position(|choice| *choice == default),
        fallback_index: T::FALLBACK
            .and_then(|fallback| T::ALL.iter().position(|choice| *choice == fallback)),
    };
    choice_at(prompter.prompt_single_choice(&config)?)
}

/// Asks the user to pick any number of variants of `T`, none preselected.
pub fn ask_choices<T: Choice>(prompter: &dyn PromptProvider, prompt: &str) -> Result<Vec<T>> {
    let config = MultipleChoiceConfig {
        prompt: prompt.to_string(),
        choices: T::labels(),
        defaults: vec![false; T::ALL.len()],
    };
    prompter.prompt_multiple_choice(&config)?.into_iter().map(choice_at::<T>).collect()
}

pub fn ask_confirm(prompter: &dyn PromptProvider, prompt: &str, default: bool) -> Result<bool> {
    let config = ConfirmationConfig { prompt: prompt.to_string(), default };
    prompter.prompt_confirmation(&config)
}
