use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ModelsConfig, ProviderDescriptor};

/// The configuration record threaded through the setup wizard.
///
/// Only the sections this crate touches are typed; everything else is carried in
/// `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WizardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<ModelsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl WizardConfig {
    pub fn provider(&self, id: &str) -> Option<&ProviderDescriptor> {
        self.models.as_ref()?.providers.as_ref()?.get(id)
    }

    pub fn providers(&self) -> impl Iterator<Item = (&String, &ProviderDescriptor)> {
        self.models
            .as_ref()
            .and_then(|models| models.providers.as_ref())
            .into_iter()
            .flatten()
    }

    /// Returns a copy with `models.providers.<id>` set to `descriptor`.
    ///
    /// Missing `models` / `models.providers` sections are created; sibling entries are
    /// left as they are.
    pub fn with_provider(&self, id: impl Into<String>, descriptor: ProviderDescriptor) -> Self {
        let mut next = self.clone();
        next.models
            .get_or_insert_with(ModelsConfig::default)
            .providers
            .get_or_insert_with(Default::default)
            .insert(id.into(), descriptor);
        next
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}
