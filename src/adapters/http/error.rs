//! JSON error body shared by every endpoint.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response: `{"error": "...", "code": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
        }
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Shorthand for a JSON error response.
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    ErrorResponse::new(code, message).into_response_with(status)
}

/// A body that is not JSON, has the wrong content type, or has fields of
/// the wrong type is a 400 like any other invalid input.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed,
        rejection.body_text(),
    )
}

/// Unparseable query string, e.g. `?count=abc`.
pub fn query_rejection(rejection: QueryRejection) -> Response {
    tracing::debug!("Rejected query string: {}", rejection.body_text());
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed,
        rejection.body_text(),
    )
}

/// Gives the empty 408 produced by the request timeout layer a JSON body.
///
/// Must sit outside the timeout layer. No handler returns 408 itself.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    tracing::warn!("Request timed out");
    error_response(
        StatusCode::REQUEST_TIMEOUT,
        ErrorCode::RequestTimeout,
        "Request timed out",
    )
}
