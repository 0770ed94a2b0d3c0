//! llm-setup provides the building blocks of an interactive provider setup wizard.
//!
//! A wizard front end owns a [`WizardConfig`], picks an [`AuthChoice`] and hands both to an
//! [`AuthChoiceDispatcher`] together with a [`Prompter`]. The matching handler talks to the
//! user, optionally probes the endpoint and returns an updated copy of the configuration.
//!
//! ```no_run
//! use llm_setup::{
//!     ApplyAuthChoiceParams, AuthChoice, AuthChoiceDispatcher, ScriptedPrompter, WizardConfig,
//! };
//!
//! # async fn run() -> Result<(), llm_setup::PromptError> {
//! let dispatcher = AuthChoiceDispatcher::with_defaults();
//! let prompter = ScriptedPrompter::default();
//! let config = WizardConfig::default();
//! let choice = AuthChoice::OllamaApi;
//! let result = dispatcher
//!     .apply(ApplyAuthChoiceParams {
//!         auth_choice: &choice,
//!         config: &config,
//!         prompter: &prompter,
//!     })
//!     .await?;
//! if let Some(result) = result {
//!     println!("{:?}", result.config.provider("ollama"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth_choice;
pub mod config;
pub mod error;
pub mod health;
pub mod prompter;

pub use auth_choice::{
    apply_auth_choice_ollama, ApplyAuthChoiceParams, ApplyAuthChoiceResult, AuthChoice,
    AuthChoiceDispatcher, AuthChoiceHandler, OllamaAuthChoice,
};
pub use config::{ModelApi, ProviderDescriptor, WizardConfig};
pub use error::PromptError;
pub use health::{health_check_url, HttpProbe, ProbeOutcome, ReachabilityProbe};
pub use prompter::{
    ConfirmPrompt, PromptEvent, Prompter, ScriptedAnswer, ScriptedPrompter, SelectOption,
    SelectPrompt, TerminalPrompter, TextPrompt,
};
