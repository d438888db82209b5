//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Auth provider configuration (GoTrue-compatible)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth provider, e.g. `https://xyz.supabase.co`
    pub provider_url: String,

    /// HS256 secret the provider signs access tokens with
    pub jwt_secret: SecretString,

    /// Privileged key for the provider's admin API (signup)
    pub service_role_key: SecretString,

    /// Public anon key; the shared credential for content and signup routes
    pub public_anon_key: SecretString,

    /// Expected `aud` claim on user access tokens
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Provider URL without trailing slash
    pub fn provider_base_url(&self) -> &str {
        self.provider_url.trim_end_matches('/')
    }

    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the provider URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.provider_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PROVIDER_URL"));
        }
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.service_role_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SERVICE_ROLE_KEY"));
        }
        if self.public_anon_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PUBLIC_ANON_KEY"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }

        let is_https = self.provider_url.starts_with("https://");
        if !is_https && !self.provider_url.starts_with("http://") {
            return Err(ValidationError::InvalidProviderUrl);
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::ProviderMustBeHttps);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_url: String::new(),
            jwt_secret: SecretString::new(String::new()),
            service_role_key: SecretString::new(String::new()),
            public_anon_key: SecretString::new(String::new()),
            audience: default_audience(),
        }
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config(url: &str) -> AuthConfig {
        AuthConfig {
            provider_url: url.to_string(),
            jwt_secret: SecretString::new("super-secret-jwt-token".to_string()),
            service_role_key: SecretString::new("service-role".to_string()),
            public_anon_key: SecretString::new("anon".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.audience, "authenticated");
    }

    #[test]
    fn test_validation_missing_provider_url() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__PROVIDER_URL"))
        );
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig {
            jwt_secret: SecretString::new(String::new()),
            ..valid_config("https://auth.example.com")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = valid_config("http://localhost:54321");
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::ProviderMustBeHttps)
        );
    }

    #[test]
    fn test_validation_rejects_unknown_scheme() {
        let config = valid_config("ftp://auth.example.com");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidProviderUrl)
        );
    }

    #[test]
    fn test_validation_valid_config() {
        let config = valid_config("https://auth.example.com");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_provider_base_url_trims_slash() {
        let config = valid_config("https://auth.example.com/");
        assert_eq!(config.provider_base_url(), "https://auth.example.com");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = valid_config("https://auth.example.com");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-jwt-token"));
    }
}
