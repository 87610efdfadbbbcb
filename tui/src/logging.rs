//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs only go to a daily rolling file
//! (`countdown.log.YYYY-MM-DD` under [`Config::log_dir`]).

use crate::config::Config;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Error type for logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not install subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Default filter when `RUST_LOG` is unset: our crates at `level`, others at warn.
pub fn default_directives(level: &str) -> String {
    format!("warn,countdown={level},countdown_core={level}")
}

/// Install the global subscriber. Returns the directory logs are written to.
pub fn init_tracing(config: &Config) -> Result<PathBuf, LoggingError> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "countdown.log");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config.log_level())));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Log directory: {}", log_dir.display());
    Ok(log_dir)
}
