//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or deserializing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
