//! Signup error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while registering a new account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The request was incomplete or malformed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The auth provider refused the account (e.g. email already registered).
    #[error("{0}")]
    Rejected(String),

    /// The auth provider could not be reached.
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),
}

impl SignupError {
    pub fn rejected(message: impl Into<String>) -> Self {
        SignupError::Rejected(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        SignupError::Unavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SignupError::Validation(_) => ErrorCode::ValidationFailed,
            SignupError::Rejected(_) => ErrorCode::SignupRejected,
            SignupError::Unavailable(_) => ErrorCode::AuthUnavailable,
        }
    }
}
