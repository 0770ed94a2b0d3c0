//! Auth-choice dispatch: each wizard choice maps to one independent setup handler.

mod dispatch;
mod ollama;


use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::config::WizardConfig;
use crate::error::PromptError;
use crate::prompter::Prompter;

pub use dispatch::AuthChoiceDispatcher;
pub use ollama::{
    apply_auth_choice_ollama, OllamaAuthChoice, DEFAULT_OLLAMA_BASE_URL, OLLAMA_PROVIDER_ID,
};

/// Discriminant selecting which provider setup routine runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthChoice {
    OllamaApi,
    AnthropicApi,
    OpenaiApiKey,
    Skip,
    /// Any tag this crate has no dedicated variant for.
    Other(String),
}

impl AuthChoice {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OllamaApi => "ollama-api",
            Self::AnthropicApi => "anthropic-api",
            Self::OpenaiApiKey => "openai-api-key",
            Self::Skip => "skip",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for AuthChoice {
    type Err = Infallible;

    /// Tags match exactly; surrounding whitespace makes an `Other` choice.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ollama-api" => Self::OllamaApi,
            "anthropic-api" => Self::AnthropicApi,
            "openai-api-key" => Self::OpenaiApiKey,
            "skip" => Self::Skip,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for AuthChoice {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(choice) => choice,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for AuthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs shared by every auth-choice handler.
///
/// The configuration is borrowed; handlers return an updated copy instead of mutating it.
#[derive(Clone, Copy)]
pub struct ApplyAuthChoiceParams<'a> {
    pub auth_choice: &'a AuthChoice,
    pub config: &'a WizardConfig,
    pub prompter: &'a dyn Prompter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyAuthChoiceResult {
    pub config: WizardConfig,
}

/// One independent setup step.
///
/// `Ok(None)` means the handler does not apply to the given choice; it must not have
/// prompted or touched the network in that case.
#[async_trait]
pub trait AuthChoiceHandler: Send + Sync {
    fn choice(&self) -> AuthChoice;

    /// Human readable name shown in choice pickers.
    fn label(&self) -> &str;

    async fn apply(
        &self,
        params: ApplyAuthChoiceParams<'_>,
    ) -> Result<Option<ApplyAuthChoiceResult>, PromptError>;
}
