//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("API prefix must start with '/' and must not end with '/'")]
    InvalidApiPrefix,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Redis is required in production")]
    RedisRequiredInProduction,

    #[error("Auth provider URL must use HTTPS in production")]
    ProviderMustBeHttps,

    #[error("Invalid auth provider URL format")]
    InvalidProviderUrl,
}
