//! Logging setup
//!
//! The library only talks to the `log` facade. The binary calls [`init`] once
//! to install a `fern` dispatcher that writes to the log file and, when
//! requested, mirrors records to stderr.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Build the dispatcher for a configuration without installing it.
///
/// Returns `None` when neither file logging nor stderr output is wanted.
pub fn build_dispatch(config: &LoggingConfig, log_file: Option<&Path>, stderr: bool) -> Result<Option<fern::Dispatch>> {
    if !config.enabled && !stderr {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    if config.enabled {
        if let Some(path) = log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }
    }

    if stderr {
        dispatch = dispatch.chain(std::io::stderr());
    }

    Ok(Some(dispatch))
}

/// Install the global logger.
///
/// Calling this more than once keeps the first logger.
pub fn init(config: &LoggingConfig, stderr: bool) -> Result<()> {
    let log_file = if config.enabled { Some(get_log_file_path()?) } else { None };

    if let Some(dispatch) = build_dispatch(config, log_file.as_deref(), stderr)? {
        if dispatch.apply().is_err() {
            log::debug!("Logger already initialized, keeping the existing one");
        }
    }

    Ok(())
}

/// Path of the log file under the platform data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for logs"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
