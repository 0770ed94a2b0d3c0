use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::WizardConfig;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: WizardConfig,
    pub paths: ConfigPaths,
    /// False when no file was found and `config` is the empty default.
    pub config_exists: bool,
}

/// Reads the config file. Read-only: a missing file is not created and nothing on
/// disk changes.
pub fn load_config(path_override: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let paths = ConfigPaths::resolve(path_override)?;
    let config = read_config(&paths.config_file)?;
    Ok(LoadedConfig {
        config_exists: config.is_some(),
        config: config.unwrap_or_default(),
        paths,
    })
}

fn read_config(path: &Path) -> Result<Option<WizardConfig>, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
