//! Terminal prompting seam.
//!
//! The resolver only talks to a [`Prompter`]. [`DialoguerPrompter`] drives
//! a real terminal; [`ScriptedPrompter`] replays a fixed list of answers,
//! which is how non-interactive runs and tests feed the question flow.

use std::collections::VecDeque;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Asks the operator questions.
///
/// Dismissing a prompt must surface [`ConfigError::UserCancelled`].
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> ConfigResult<usize>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> ConfigResult<bool>;
}

/// Interactive prompter backed by dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> ConfigResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or(ConfigError::UserCancelled)
    }

    fn confirm(&self, prompt: &str, default: bool) -> ConfigResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(ConfigError::UserCancelled)
    }
}

/// One pre-recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Select the menu entry whose label matches (case-insensitive, exact
    /// match preferred over prefix match).
    Choose(String),
    /// Answer a yes/no question.
    Confirm(bool),
    /// Dismiss the prompt.
    Cancel,
}

/// Prompter that replays answers in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn answer_choose(self, label: impl Into<String>) -> Self {
        self.answers.lock().push_back(Answer::Choose(label.into()));
        self
    }

    pub fn answer_confirm(self, value: bool) -> Self {
        self.answers.lock().push_back(Answer::Confirm(value));
        self
    }

    pub fn answer_cancel(self) -> Self {
        self.answers.lock().push_back(Answer::Cancel);
        self
    }

    /// Prompts asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().len()
    }

    fn next(&self, prompt: &str) -> ConfigResult<Answer> {
        self.asked.lock().push(prompt.to_string());
        let answer = self
            .answers
            .lock()
            .pop_front()
            .ok_or_else(|| ConfigError::ScriptExhausted(prompt.to_string()))?;
        debug!("Scripted answer for '{}': {:?}", prompt, answer);
        Ok(answer)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> ConfigResult<usize> {
        match self.next(prompt)? {
            Answer::Choose(label) => {
                let wanted = label.to_lowercase();
                items
                    .iter()
                    .position(|item| item.to_lowercase() == wanted)
                    .or_else(|| {
                        items
                            .iter()
                            .position(|item| item.to_lowercase().starts_with(&wanted))
                    })
                    .ok_or_else(|| ConfigError::ScriptMismatch {
                        prompt: prompt.to_string(),
                        message: format!("no entry matches '{}' in {:?}", label, items),
                    })
            }
            Answer::Cancel => Err(ConfigError::UserCancelled),
            other => Err(ConfigError::ScriptMismatch {
                prompt: prompt.to_string(),
                message: format!("expected a menu choice, got {:?}", other),
            }),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> ConfigResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Cancel => Err(ConfigError::UserCancelled),
            other => Err(ConfigError::ScriptMismatch {
                prompt: prompt.to_string(),
                message: format!("expected yes/no, got {:?}", other),
            }),
        }
    }
}
