//! Logging setup
//!
//! Standard output carries the editing protocol, so nothing is logged there.
//! When enabled, events go to a file through a non-blocking appender. The
//! filter is read from `LEDIT_LOG` (e.g. `LEDIT_LOG=debug`), defaulting to `info`.

use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};
use anyhow::{anyhow, Context};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where and whether to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub file: PathBuf,
}

/// Install the global subscriber.
///
/// Returns the appender guard; keep it alive until exit so buffered events
/// are flushed. Returns `None` when logging is disabled.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let (directory, file_name) = split_log_path(&config.file)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %config.file.display(),
        "logging started"
    );
    Ok(Some(guard))
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Split a log path into the directory the appender writes in and the file name
fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, OsString)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?
        .to_os_string();
    let directory = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, file_name))
}
