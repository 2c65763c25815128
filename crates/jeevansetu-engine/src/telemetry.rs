//! Structured logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level is used.

use jeevansetu_core::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber.
pub fn init(config: &LoggingConfig) -> Result<(), EngineError> {
    let filter = env_filter(&config.level);
    let result = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .try_init(),
    };
    result.map_err(|e| EngineError::Logging {
        message: e.to_string(),
    })
}
