//! tracing subscriber setup.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vitesse_core::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "vitesse.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. With `config.file`
/// set, events are also written to a daily rolling file in `logs_dir`; keep
/// the returned guard alive until shutdown so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig, logs_dir: &Path) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    if !config.file {
        registry.try_init().context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;
    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("[Logging] Writing logs to {}", logs_dir.display());
    Ok(Some(guard))
}
