//! The user-interaction capability a setup step talks through.
//!
//! Steps only ever see `&dyn Prompter`, so an interactive terminal and a scripted,
//! non-interactive run share the same step logic.

mod scripted;
mod terminal;

use async_trait::async_trait;

use crate::error::PromptError;

pub use scripted::{PromptEvent, ScriptedAnswer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

/// Free-text question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPrompt {
    pub message: String,
    /// Returned when the user accepts the default.
    pub initial_value: Option<String>,
    /// Hint shown when there is no initial value.
    pub placeholder: Option<String>,
}

impl TextPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }
}

/// Yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
    pub initial_value: bool,
}

impl ConfirmPrompt {
    pub fn new(message: impl Into<String>, initial_value: bool) -> Self {
        Self {
            message: message.into(),
            initial_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub hint: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Pick one value out of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPrompt {
    pub message: String,
    pub options: Vec<SelectOption>,
    pub initial_value: Option<String>,
}

impl SelectPrompt {
    pub fn new(message: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            message: message.into(),
            options,
            initial_value: None,
        }
    }

    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// The value taken when the user answers nothing.
    pub fn default_value(&self) -> Option<&str> {
        self.initial_value
            .as_deref()
            .filter(|value| self.options.iter().any(|opt| opt.value == *value))
            .or_else(|| self.options.first().map(|opt| opt.value.as_str()))
    }
}

/// Capability object exposing the wizard's interactive operations.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Informational display; resolves once shown.
    async fn note(&self, message: &str, title: Option<&str>) -> Result<(), PromptError>;

    async fn text(&self, prompt: TextPrompt) -> Result<String, PromptError>;

    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool, PromptError>;

    /// Returns the `value` of the chosen option.
    async fn select(&self, prompt: SelectPrompt) -> Result<String, PromptError>;

    async fn intro(&self, title: &str) -> Result<(), PromptError> {
        self.note(title, None).await
    }

    async fn outro(&self, message: &str) -> Result<(), PromptError> {
        self.note(message, None).await
    }
}
