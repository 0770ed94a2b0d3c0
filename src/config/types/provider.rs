use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Wire protocol dialect spoken by a provider endpoint.
///
/// Unknown tags are kept verbatim so foreign entries survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelApi {
    OpenaiCompletions,
    OpenaiResponses,
    AnthropicMessages,
    GoogleGenerativeAi,
    BedrockConverseStream,
    #[serde(untagged)]
    Other(String),
}

impl ModelApi {
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenaiCompletions => "openai-completions",
            Self::OpenaiResponses => "openai-responses",
            Self::AnthropicMessages => "anthropic-messages",
            Self::GoogleGenerativeAi => "google-generative-ai",
            Self::BedrockConverseStream => "bedrock-converse-stream",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ModelApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `models.providers.<id>` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ModelApi>,
    #[serde(default)]
    pub models: Vec<String>,
    /// Keys this crate does not interpret (`apiKey`, `headers`, ...).
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ProviderDescriptor {
    pub fn new(base_url: impl Into<String>, api: ModelApi) -> Self {
        Self {
            base_url: base_url.into(),
            api: Some(api),
            models: Vec::new(),
            extra: toml::Table::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<BTreeMap<String, ProviderDescriptor>>,
    #[serde(flatten)]
    pub extra: toml::Table,
}
