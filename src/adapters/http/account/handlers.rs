//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;

use crate::adapters::http::error::{error_response, json_rejection};
use crate::application::handlers::account::{SignupCommand, SignupHandler};
use crate::domain::account::SignupError;

use super::dto::{SignupRequest, SignupResponse};

#[derive(Clone)]
pub struct AccountHandlers {
    signup_handler: Arc<SignupHandler>,
}

impl AccountHandlers {
    pub fn new(signup_handler: Arc<SignupHandler>) -> Self {
        Self { signup_handler }
    }
}

/// POST /signup - Create an auto-confirmed account
pub async fn signup(
    State(handlers): State<AccountHandlers>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = SignupCommand {
        email: req.email,
        password: req
            .password
            .unwrap_or_else(|| SecretString::new(String::new())),
        name: req.name,
    };

    match handlers.signup_handler.handle(cmd).await {
        Ok(account) => {
            let response = SignupResponse {
                user: account.into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_signup_error(e),
    }
}

fn handle_signup_error(error: SignupError) -> Response {
    let code = error.code();
    match error {
        SignupError::Validation(e) => error_response(StatusCode::BAD_REQUEST, code, e.to_string()),
        SignupError::Rejected(message) => error_response(StatusCode::BAD_REQUEST, code, message),
        SignupError::Unavailable(msg) => {
            tracing::error!("Signup failed, auth provider unavailable: {}", msg);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                "Failed to create account",
            )
        }
    }
}
