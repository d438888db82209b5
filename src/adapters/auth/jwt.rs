//! HS256 access token validator.
//!
//! GoTrue-compatible providers sign user access tokens with a shared HS256
//! secret. This adapter implements the `SessionValidator` port by checking the
//! signature locally, so mood requests never wait on the provider.
//!
//! Validated claims:
//! - **Signature**: HS256 with the configured secret
//! - **Audience (aud)**: must contain the configured audience
//! - **Expiry (exp)**: must be in the future
//! - **Subject (sub)**: must be a usable user id

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by a user access token.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,

    #[serde(default)]
    aud: Audience,

    exp: i64,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    full_name: Option<String>,
}

/// Audience can be a single string or array of strings in JWTs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    #[default]
    None,
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    fn contains(&self, expected: &str) -> bool {
        match self {
            Audience::None => false,
            Audience::Single(s) => s == expected,
            Audience::Multiple(v) => v.iter().any(|s| s == expected),
        }
    }
}

/// Session validator for HS256-signed access tokens.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    audience: String,
}

impl JwtSessionValidator {
    pub fn new(secret: &SecretString, audience: impl Into<String>) -> Self {
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            audience,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<AccessClaims, AuthError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token signature mismatch");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        if !claims.aud.contains(&self.audience) {
            tracing::warn!(
                "Audience mismatch after validation: expected '{}', got '{:?}'",
                self.audience,
                claims.aud
            );
            return Err(AuthError::InvalidToken);
        }

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        let display_name = claims
            .user_metadata
            .and_then(|m| m.name.or(m.full_name))
            .filter(|n| !n.trim().is_empty());

        Ok(AuthenticatedUser::new(user_id, claims.email, display_name))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
