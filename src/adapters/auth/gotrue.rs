//! GoTrue admin API adapter for account provisioning.
//!
//! Creates users through `POST /auth/v1/admin/users` with the service role
//! key, marking the email as already confirmed so the account can sign in
//! immediately.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::account::{NewAccount, RegisteredAccount, SignupError};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::AccountProvisioner;

const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    email: &'a str,
    password: &'a str,
    email_confirm: bool,
    user_metadata: UserMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct UserMetadata<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

/// Error body shapes GoTrue has used across versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Account provisioner backed by the GoTrue admin API.
pub struct GoTrueAccountProvisioner {
    http_client: reqwest::Client,
    users_url: String,
    service_role_key: SecretString,
}

impl GoTrueAccountProvisioner {
    pub fn new(
        provider_url: &str,
        service_role_key: SecretString,
    ) -> Result<Self, SignupError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SignupError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            users_url: format!("{}{}", provider_url.trim_end_matches('/'), ADMIN_USERS_PATH),
            service_role_key,
        })
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self, SignupError> {
        Self::new(config.provider_base_url(), config.service_role_key.clone())
    }
}

fn parse_user(body: &str, account: &NewAccount) -> Result<RegisteredAccount, SignupError> {
    let user: UserResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Unexpected signup response from auth provider: {}", e);
        SignupError::unavailable("Unexpected response from auth provider")
    })?;

    let id = UserId::new(user.id).map_err(|e| {
        tracing::error!("Auth provider returned unusable user id: {}", e);
        SignupError::unavailable("Unexpected response from auth provider")
    })?;

    let name = user
        .user_metadata
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or(account.name())
        .to_string();

    Ok(RegisteredAccount {
        id,
        email: user.email.unwrap_or_else(|| account.email().to_string()),
        name,
        email_confirmed: user.email_confirmed_at.is_some(),
        created_at: user
            .created_at
            .map(Timestamp::from_datetime)
            .unwrap_or_else(Timestamp::now),
    })
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| format!("Signup rejected ({})", status))
}

#[async_trait]
impl AccountProvisioner for GoTrueAccountProvisioner {
    async fn create_account(&self, account: &NewAccount) -> Result<RegisteredAccount, SignupError> {
        let request = CreateUserRequest {
            email: account.email(),
            password: account.password().expose_secret(),
            email_confirm: true,
            user_metadata: UserMetadata {
                name: account.name(),
            },
        };

        let key = self.service_role_key.expose_secret();
        let response = self
            .http_client
            .post(&self.users_url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth provider: {}", e);
                SignupError::unavailable(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read auth provider response: {}", e);
            SignupError::unavailable(e.to_string())
        })?;

        if status.is_success() {
            let registered = parse_user(&body, account)?;
            tracing::info!(user_id = %registered.id, "Account created");
            return Ok(registered);
        }

        if status.is_client_error() {
            let message = rejection_message(status, &body);
            tracing::info!(%status, "Signup rejected by auth provider: {}", message);
            return Err(SignupError::rejected(message));
        }

        tracing::error!(%status, "Auth provider failed during signup");
        Err(SignupError::unavailable(format!(
            "Auth provider returned {}",
            status
        )))
    }
}

impl std::fmt::Debug for GoTrueAccountProvisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoTrueAccountProvisioner")
            .field("users_url", &self.users_url)
            .finish_non_exhaustive()
    }
}
