//! Logging utilities
//!
//! Subscriber setup and request-id helpers. Library code only emits
//! `tracing` events; installing a subscriber is the embedding
//! application's choice, so `init_logger` is provided but never called
//! from within the crate.

use chrono::{DateTime, Utc};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Log verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Install a formatted global subscriber
///
/// `RUST_LOG` overrides the passed level when set. Fails if a global
/// subscriber is already installed, so callers embedding the crate into a
/// larger application can keep their own setup.
pub fn init_logger(level: Option<LogLevel>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = level.unwrap_or(LogLevel::Info);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()?;

    Ok(())
}

/// Fresh correlation id
pub fn logging_id() -> String {
    Uuid::new_v4().to_string()
}

/// Correlation id prefixed with a timestamp, for log lines that are
/// grepped by time range
pub fn logging_id_with_timestamp(start_time: DateTime<Utc>) -> String {
    format!("{}-{}", start_time.timestamp(), Uuid::new_v4())
}
