//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAPERWORK` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a runnable config.
//!
//! # Example
//!
//! ```no_run
//! use paperwork::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod broker;
mod error;
mod outbox;
mod server;
mod sync;

pub use broker::BrokerConfig;
pub use error::{ConfigError, ValidationError};
pub use outbox::OutboxConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use sync::SyncConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Message broker queues
    #[serde(default)]
    pub broker: BrokerConfig,

    /// Outbox relay polling
    #[serde(default)]
    pub outbox: OutboxConfig,

    /// Attachment sync fan-out
    #[serde(default)]
    pub sync: SyncConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAPERWORK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAPERWORK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAPERWORK__BROKER__CONTRACT_QUEUE=contracts` -> `broker.contract_queue = "contracts"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAPERWORK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.broker.validate()?;
        self.outbox.validate()?;
        self.sync.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
