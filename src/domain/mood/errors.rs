//! Mood-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, MoodId, ValidationError};

/// Errors raised by mood operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    /// A required field was missing or malformed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// No entry with this id exists for the acting user.
    #[error("Mood not found: {0}")]
    NotFound(MoodId),

    /// The key-value store failed or returned undecodable data.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoodError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MoodError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: MoodId) -> Self {
        MoodError::NotFound(id)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        MoodError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MoodError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MoodError::NotFound(_) => ErrorCode::MoodNotFound,
            MoodError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for MoodError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        MoodError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_with_field() {
        let err: MoodError = ValidationError::empty_field("reason").into();
        match err {
            MoodError::ValidationFailed { field, message } => {
                assert_eq!(field, "reason");
                assert!(message.contains("cannot be empty"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn codes_map_by_variant() {
        assert_eq!(
            MoodError::validation("emoji", "x").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            MoodError::not_found(MoodId::new()).code(),
            ErrorCode::MoodNotFound
        );
        assert_eq!(MoodError::storage("down").code(), ErrorCode::StorageError);
    }

    #[test]
    fn not_found_displays_id() {
        let id = MoodId::new();
        assert!(MoodError::not_found(id).to_string().contains(&id.to_string()));
    }
}
