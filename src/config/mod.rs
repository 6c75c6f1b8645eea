//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TITLE_DESK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use title_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod clickup;
mod document;
mod error;
mod server;

pub use clickup::ClickUpConfig;
pub use document::DocumentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

#[cfg(test)]
pub(crate) use clickup::test_config as test_clickup_config;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// ClickUp OAuth app and API
    pub clickup: ClickUpConfig,

    /// Template, compiler and staging for PDF generation
    #[serde(default)]
    pub document: DocumentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TITLE_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TITLE_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TITLE_DESK__CLICKUP__CLIENT_ID=...` -> `clickup.client_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TITLE_DESK")
                    .prefix_separator("__")
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
        self.clickup.validate(&self.server.environment)?;
        self.document.validate()?;

        if self.document.compile_timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::CompileTimeoutExceedsRequest);
        }

        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
