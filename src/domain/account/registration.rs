//! Account registration types.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Minimum password length accepted by the auth provider.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validated signup request.
///
/// The password is held as a secret so it never shows up in logs or
/// `Debug` output.
#[derive(Debug, Clone)]
pub struct NewAccount {
    email: String,
    password: SecretString,
    name: String,
}

impl NewAccount {
    /// Validate and build a signup request.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if email or password is blank
    /// - `InvalidFormat` if the email has no `@` or the password is too short
    pub fn new(
        email: impl Into<String>,
        password: SecretString,
        name: Option<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }

        let password_len = password.expose_secret().chars().count();
        if password_len == 0 {
            return Err(ValidationError::empty_field("password"));
        }
        if password_len < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }

        Ok(Self {
            email,
            password,
            name: name.unwrap_or_default(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Display name, empty when not given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Account as created by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredAccount {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub email_confirmed: bool,
    pub created_at: Timestamp,
}
