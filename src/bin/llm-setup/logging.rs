use std::path::{Path, PathBuf};

use flexi_logger::{
    detailed_format, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

use llm_setup::config::LoggingConfig;

const LOG_BASENAME: &str = "llm-setup";

/// Starts file logging. The returned handle must outlive the run.
///
/// Interactive runs keep the terminal for prompts; otherwise warnings (an unreachable
/// server, for one) are echoed to stderr as well.
pub fn init_logging(
    config: &LoggingConfig,
    logs_dir: &Path,
    echo_warnings: bool,
) -> anyhow::Result<LoggerHandle> {
    let file = FileSpec::try_from(log_file(config, logs_dir))?;
    let mut logger = Logger::try_with_env_or_str(config.level())?
        .log_to_file(file)
        .format_for_files(detailed_format)
        .append()
        .rotate(
            Criterion::Size(config.rotate_size()),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep()),
        );
    if echo_warnings {
        logger = logger.duplicate_to_stderr(Duplicate::Warn);
    }
    Ok(logger.start()?)
}

/// `logging.path` when set, else `<logs_dir>/llm-setup.log`.
fn log_file(config: &LoggingConfig, logs_dir: &Path) -> PathBuf {
    match config.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => logs_dir.join(format!("{LOG_BASENAME}.log")),
    }
}
