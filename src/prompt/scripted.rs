//! Prompt provider that answers from a prepared script
//!
//! Answers are consumed in order, one queue per prompt type. When a queue is
//! exhausted the prompt's own default is used. Useful for non-interactive
//! runs (`--answers`) and for tests.

use super::interface::*;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Answers in the shape accepted by `--answers`.
///
/// ```json
/// {"text": ["shop", "api"], "select": ["backend"], "multi_select": [["express"]], "confirm": [false, true]}
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptedAnswers {
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub multi_select: Vec<Vec<String>>,
    #[serde(default)]
    pub confirm: Vec<bool>,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text: RefCell<VecDeque<String>>,
    select: RefCell<VecDeque<String>>,
    multi_select: RefCell<VecDeque<Vec<String>>>,
    confirm: RefCell<VecDeque<bool>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON answer script.
    pub fn from_json(buf: &str) -> Result<Self> {
        let answers: ScriptedAnswers = serde_json::from_str(buf)?;
        Ok(Self::from(answers))
    }

    pub fn with_text(self, answer: &str) -> Self {
        self.text.borrow_mut().push_back(answer.to_string());
        self
    }

    /// Queues a selection by its displayed label.
    pub fn with_select(self, label: &str) -> Self {
        self.select.borrow_mut().push_back(label.to_string());
        self
    }

    pub fn with_multi_select(self, labels: &[&str]) -> Self {
        self.multi_select
            .borrow_mut()
            .push_back(labels.iter().map(|l| l.to_string()).collect());
        self
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirm.borrow_mut().push_back(answer);
        self
    }

    /// Number of queued answers not consumed yet, across all prompt types.
    pub fn remaining(&self) -> usize {
        self.text.borrow().len()
            + self.select.borrow().len()
            + self.multi_select.borrow().len()
            + self.confirm.borrow().len()
    }

    fn index_of(label: &str, choices: &[String]) -> Result<usize> {
        choices
            .iter()
            .position(|choice| choice == label)
            .or_else(|| choices.iter().position(|choice| choice.eq_ignore_ascii_case(label)))
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "'{label}' is not one of: {}",
                    choices.join(", ")
                ))
            })
    }
}

impl From<ScriptedAnswers> for ScriptedPrompter {
    fn from(answers: ScriptedAnswers) -> Self {
        Self {
            text: RefCell::new(answers.text.into()),
            select: RefCell::new(answers.select.into()),
            multi_select: RefCell::new(answers.multi_select.into()),
            confirm: RefCell::new(answers.confirm.into()),
        }
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut queue = self.text.borrow_mut();
        while let Some(answer) = queue.pop_front() {
            let answer = answer.trim().to_string();
            if config.required && answer.is_empty() {
                log::warn!("Empty answer for '{}' rejected, asking again", config.prompt);
                continue;
            }
            log::debug!("Auto-answering '{}' with '{answer}'", config.prompt);
            return Ok(answer);
        }

        match &config.default {
            Some(default) if !(config.required && default.trim().is_empty()) => {
                Ok(default.clone())
            }
            _ if config.required => Err(Error::ValidationError(format!(
                "no answer left for required prompt '{}'",
                config.prompt
            ))),
            _ => Ok(String::new()),
        }
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        match self.select.borrow_mut().pop_front() {
            Some(label) => {
                log::debug!("Auto-answering '{}' with '{label}'", config.prompt);
                match (Self::index_of(&label, &config.choices), config.fallback_index) {
                    (Err(_), Some(fallback)) => {
                        log::warn!(
                            "Unrecognized answer '{label}' for '{}', treating it as '{}'",
                            config.prompt,
                            config.choices.get(fallback).map_or("", String::as_str)
                        );
                        Ok(fallback)
                    }
                    (index, _) => index,
                }
            }
            None => Ok(config.default_index.unwrap_or(0)),
        }
    }
}

impl MultipleChoicePrompter for ScriptedPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        match self.multi_select.borrow_mut().pop_front() {
            Some(labels) => {
                log::debug!("Auto-answering '{}' with {labels:?}", config.prompt);
                labels.iter().map(|label| Self::index_of(label, &config.choices)).collect()
            }
            None => Ok(config
                .defaults
                .iter()
                .enumerate()
                .filter_map(|(i, &selected)| selected.then_some(i))
                .collect()),
        }
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let answer = self.confirm.borrow_mut().pop_front().unwrap_or(config.default);
        log::debug!("Auto-answering '{}' with {answer}", config.prompt);
        Ok(answer)
    }
}
