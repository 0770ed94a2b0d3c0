use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::WizardConfig;

/// Writes `config` as pretty TOML.
///
/// The file is staged next to the target and renamed over it, so an interrupted save
/// leaves the previous config intact. The result is readable by the owner only.
pub fn save_config(config: &WizardConfig, paths: &ConfigPaths) -> Result<(), ConfigError> {
    let target = &paths.config_file;
    let contents = toml::to_string_pretty(config)?;
    if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(ConfigError::write(dir))?;
    }
    let staging = staging_path(target);
    write_owner_only(&staging, contents.as_bytes()).map_err(ConfigError::write(&staging))?;
    fs::rename(&staging, target).map_err(ConfigError::write(target))?;
    log::debug!("wrote {}", target.display());
    Ok(())
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}

fn write_owner_only(path: &Path, bytes: &[u8]) -> io::Result<()> {
    // a stale staging file may carry wider permissions; mode only applies on create
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
