//! Mock authentication adapters for testing.
//!
//! These adapters implement the `SessionValidator` and `AccountProvisioner`
//! ports for use in tests, avoiding the need for a real auth provider.
//!
//! # Example
//!
//! ```ignore
//! use mood_journal::adapters::auth::MockSessionValidator;
//!
//! // Create a validator that accepts specific tokens
//! let validator = MockSessionValidator::new().with_test_user("valid-token", "user-123");
//!
//! // Use in tests
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::account::{NewAccount, RegisteredAccount, SignupError};
use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp, UserId};
use crate::ports::{AccountProvisioner, SessionValidator};

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token with a simple test user.
    ///
    /// # Panics
    ///
    /// If `user_id` is not a valid `UserId`.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).expect("test user id must be valid"),
            Some(format!("{}@test.example.com", user_id)),
            Some(format!("Test User {}", user_id)),
        );
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token.into(), user);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock account provisioner for testing.
///
/// Accepts every account once per email; a second signup with the same email
/// is rejected the way the real provider rejects duplicates.
#[derive(Debug, Default)]
pub struct MockAccountProvisioner {
    accounts: RwLock<HashMap<String, RegisteredAccount>>,
    force_error: RwLock<Option<SignupError>>,
}

impl MockAccountProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces every signup to fail with the given error.
    pub fn with_error(self, error: SignupError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Number of accounts created so far.
    pub fn account_count(&self) -> usize {
        self.accounts.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Looks up a created account by email.
    pub fn account(&self, email: &str) -> Option<RegisteredAccount> {
        self.accounts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(email)
            .cloned()
    }
}

#[async_trait]
impl AccountProvisioner for MockAccountProvisioner {
    async fn create_account(&self, account: &NewAccount) -> Result<RegisteredAccount, SignupError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
        if accounts.contains_key(account.email()) {
            return Err(SignupError::rejected(
                "A user with this email address has already been registered",
            ));
        }

        let id = UserId::new(format!("mock-user-{}", accounts.len() + 1))
            .map_err(|e| SignupError::unavailable(e.to_string()))?;
        let registered = RegisteredAccount {
            id,
            email: account.email().to_string(),
            name: account.name().to_string(),
            email_confirmed: true,
            created_at: Timestamp::now(),
        };
        accounts.insert(account.email().to_string(), registered.clone());
        Ok(registered)
    }
}
