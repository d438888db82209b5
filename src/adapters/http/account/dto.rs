//! HTTP DTOs for account endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::account::RegisteredAccount;

/// Signup request. The password is kept secret from the moment it is parsed.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub email_confirmed: bool,
    pub created_at: String,
}

impl From<RegisteredAccount> for UserResponse {
    fn from(account: RegisteredAccount) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            name: account.name,
            email_confirmed: account.email_confirmed,
            created_at: account.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// `{ "user": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub user: UserResponse,
}
