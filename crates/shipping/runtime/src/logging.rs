//! Subscriber setup for hosts embedding the shipping runtime.
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::error::{Result, RuntimeError};

const LOG_FILE: &str = "shipping.log";

/// Keeps the file writer alive; drop it only when the host shuts down.
#[must_use = "dropping the guard stops the log file writer"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Platform-specific log directory.
///
/// - Linux: `~/.cache/shipping/logs` (or `$XDG_CACHE_HOME/shipping/logs`)
/// - macOS: `~/Library/Caches/shipping/logs`
/// - Windows: `%LOCALAPPDATA%\shipping\cache\logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "shipping")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("shipping"))
        .join("logs")
}

/// Installs the global subscriber: stderr always, plus a log file if enabled.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`].
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (file_layer, guard, log_dir) = if config.log_to_file {
        let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&log_dir).map_err(|source| RuntimeError::LogDir {
            path: log_dir.clone(),
            source,
        })?;

        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard), Some(log_dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(RuntimeError::Subscriber)?;

    if let Some(log_dir) = log_dir {
        tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    }

    Ok(LoggingGuard { _file: guard })
}
