//! Ollama provider activation.

use async_trait::async_trait;

use super::{ApplyAuthChoiceParams, ApplyAuthChoiceResult, AuthChoice, AuthChoiceHandler};
use crate::config::{ModelApi, ProviderDescriptor};
use crate::error::PromptError;
use crate::health::{health_check_url, HttpProbe, ReachabilityProbe};
use crate::prompter::{ConfirmPrompt, TextPrompt};

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434";
pub const OLLAMA_PROVIDER_ID: &str = "ollama";

/// Path of Ollama's OpenAI-compatible API under the server root.
const OPENAI_COMPAT_PATH: &str = "/v1";

/// Handler for [`AuthChoice::OllamaApi`].
#[derive(Debug, Clone, Default)]
pub struct OllamaAuthChoice<P = HttpProbe> {
    probe: P,
}

impl<P: ReachabilityProbe> OllamaAuthChoice<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl<P: ReachabilityProbe> AuthChoiceHandler for OllamaAuthChoice<P> {
    fn choice(&self) -> AuthChoice {
        AuthChoice::OllamaApi
    }

    fn label(&self) -> &str {
        "Ollama (local)"
    }

    async fn apply(
        &self,
        params: ApplyAuthChoiceParams<'_>,
    ) -> Result<Option<ApplyAuthChoiceResult>, PromptError> {
        apply_auth_choice_ollama(params, &self.probe).await
    }
}

/// Prompts for an Ollama base URL and writes `models.providers.ollama`.
///
/// Returns `Ok(None)` for any other choice. When the endpoint cannot be reached and
/// the user declines to continue, the input configuration comes back unchanged.
pub async fn apply_auth_choice_ollama(
    params: ApplyAuthChoiceParams<'_>,
    probe: &dyn ReachabilityProbe,
) -> Result<Option<ApplyAuthChoiceResult>, PromptError> {
    if *params.auth_choice != AuthChoice::OllamaApi {
        return Ok(None);
    }
    let ApplyAuthChoiceParams {
        config, prompter, ..
    } = params;

    prompter
        .note(
            "Ollama runs locally. Ensure `ollama serve` is running.",
            Some("Ollama Setup"),
        )
        .await?;

    let raw = prompter
        .text(
            TextPrompt::new("Ollama Base URL")
                .initial_value(DEFAULT_OLLAMA_BASE_URL)
                .placeholder(DEFAULT_OLLAMA_BASE_URL),
        )
        .await?;
    let base_url = match raw.trim() {
        "" => DEFAULT_OLLAMA_BASE_URL.to_string(),
        trimmed => trimmed.to_string(),
    };

    let outcome = probe.probe(&health_check_url(&base_url)).await;
    if !outcome.is_reachable() {
        log::warn!("ollama at {base_url} is not reachable: {outcome:?}");
        let proceed = prompter
            .confirm(ConfirmPrompt::new(
                format!("Could not connect to Ollama at {base_url}. Continue anyway?"),
                true,
            ))
            .await?;
        if !proceed {
            log::info!("ollama setup aborted, configuration left unchanged");
            return Ok(Some(ApplyAuthChoiceResult {
                config: config.clone(),
            }));
        }
    }

    // Models are discovered later; an empty list keeps auto-discovery in charge.
    let descriptor = ProviderDescriptor::new(
        format!("{base_url}{OPENAI_COMPAT_PATH}"),
        ModelApi::OpenaiCompletions,
    );
    log::info!(
        "configured provider {OLLAMA_PROVIDER_ID} at {}",
        descriptor.base_url
    );
    Ok(Some(ApplyAuthChoiceResult {
        config: config.with_provider(OLLAMA_PROVIDER_ID, descriptor),
    }))
}
