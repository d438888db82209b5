//! Content-specific error types.

use thiserror::Error;

use super::ContentList;
use crate::domain::foundation::ErrorCode;

/// Errors raised while serving motivational content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The list was never seeded or is empty.
    #[error("No {0} available")]
    EmptyList(ContentList),

    /// The key-value store failed or returned undecodable data.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContentError {
    pub fn storage(message: impl Into<String>) -> Self {
        ContentError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::EmptyList(_) => ErrorCode::ContentUnavailable,
            ContentError::Storage(_) => ErrorCode::StorageError,
        }
    }
}
