//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DEALPREP` prefix
//! with `__` separating nested values, e.g.
//! `DEALPREP__DISPLAY__CURRENCY_SYMBOL=€`.
//!
//! Everything has a default: the binary runs with no environment at all.

mod error;

pub use error::ConfigError;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Presentation settings for rendered output.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol prefixed to formatted amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing env-filter directive, e.g. `info` or `dealprep=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then overlays `DEALPREP`-prefixed
    /// environment variables on top of the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DEALPREP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            log: LogConfig::default(),
        }
    }
}
