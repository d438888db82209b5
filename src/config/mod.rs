//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOOD_JOURNAL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mood_journal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod auth;
mod error;
mod redis;
mod server;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use self::redis::RedisConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, prefix)
    #[serde(default)]
    pub server: ServerConfig,

    /// Auth provider configuration
    pub auth: AuthConfig,

    /// Redis configuration. When absent the in-memory store is used.
    #[serde(default)]
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOOD_JOURNAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MOOD_JOURNAL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MOOD_JOURNAL__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    /// - `MOOD_JOURNAL__REDIS__URL=redis://...` -> `redis.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOOD_JOURNAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Production additionally requires HTTPS for the auth provider and a
    /// Redis store; the in-memory store loses everything on restart.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        match &self.redis {
            Some(redis) => redis.validate()?,
            None if self.is_production() => {
                return Err(ValidationError::RedisRequiredInProduction)
            }
            None => {}
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
