//! Log sink setup.
//!
//! The terminal belongs to the driver, so logs only ever go to a file. Nothing is
//! installed unless `CODEAREA_LOG` names one.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::error::LoggingError;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init(config: &EnvConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| LoggingError::io(path, err))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(path, "logging initialized");
    Ok(true)
}

fn env_filter(config: &EnvConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(config)))
}

fn default_level(config: &EnvConfig) -> &'static str {
    if config.debug {
        "debug"
    } else {
        "info"
    }
}
