use serde::{Deserialize, Serialize};

use super::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_ROTATE_KEEP, DEFAULT_LOG_ROTATE_SIZE};

/// The `[logging]` section.
///
/// Every field is optional and only what the user wrote is written back; the accessors
/// supply defaults. Keys the CLI does not read are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_keep: Option<usize>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn rotate_size(&self) -> u64 {
        self.rotate_size.unwrap_or(DEFAULT_LOG_ROTATE_SIZE)
    }

    pub fn rotate_keep(&self) -> usize {
        self.rotate_keep.unwrap_or(DEFAULT_LOG_ROTATE_KEEP)
    }
}
