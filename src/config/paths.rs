use std::path::PathBuf;

use super::error::ConfigError;

const APP_DIR: &str = "llm-setup";
const CONFIG_FILE: &str = "config.toml";

/// Where the wizard reads and writes.
///
/// Nothing here is created on resolve: the config file's directory appears on the first
/// save, the logs directory when file logging starts.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl ConfigPaths {
    /// `--config` only moves the config file; logs stay under the user's data dir.
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
        let config_file = config_override
            .unwrap_or_else(|| home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        Ok(Self {
            config_file,
            logs_dir: home.join(".local").join("share").join(APP_DIR).join("logs"),
        })
    }
}
