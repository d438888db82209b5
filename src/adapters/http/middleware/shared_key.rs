//! Shared credential check for public endpoints.
//!
//! Content and signup routes are not tied to a user but still require the
//! project's public anon key, sent either as `apikey: <key>` or as
//! `Authorization: Bearer <key>`. The comparison is constant-time.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::auth::bearer_token;
use crate::adapters::http::error::error_response;
use crate::domain::foundation::ErrorCode;

const API_KEY_HEADER: &str = "apikey";

/// The expected shared credential.
pub struct SharedKey(SecretString);

impl SharedKey {
    pub fn new(key: SecretString) -> Self {
        Self(key)
    }

    /// Constant-time comparison against the expected key.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.expose_secret().as_bytes();
        !expected.is_empty() && bool::from(expected.ct_eq(candidate.as_bytes()))
    }

    /// True if either accepted header carries the key.
    pub fn authorizes(&self, headers: &HeaderMap) -> bool {
        let api_key = headers
            .get(API_KEY_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim);

        api_key.map(|k| self.matches(k)).unwrap_or(false)
            || bearer_token(headers).map(|k| self.matches(k)).unwrap_or(false)
    }
}

impl std::fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

/// Shared key middleware state.
pub type SharedKeyState = Arc<SharedKey>;

/// Rejects requests that don't carry the shared credential.
pub async fn require_shared_key(
    State(key): State<SharedKeyState>,
    request: Request,
    next: Next,
) -> Response {
    if key.authorizes(request.headers()) {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "Rejected request without valid API key");
    error_response(
        StatusCode::UNAUTHORIZED,
        ErrorCode::Unauthorized,
        "Invalid or missing API key",
    )
}
