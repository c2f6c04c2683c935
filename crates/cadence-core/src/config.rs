use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub expansion: ExpansionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits applied by consumers when draining unbounded occurrence streams.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Default number of occurrences printed when no explicit limit is given.
    pub default_limit: u32,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Config::builder()
            .set_default("logging.level", "info")
            .map_err(|e| CoreError::ConfigError(e.to_string()))?
            .set_default("expansion.default_limit", 20)
            .map_err(|e| CoreError::ConfigError(e.to_string()))?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()
            .map_err(|e| CoreError::ConfigError(e.to_string()))?
            .try_deserialize::<Settings>()
            .map_err(|e| CoreError::ConfigError(e.to_string()))
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
