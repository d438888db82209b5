//! SignupHandler - Command handler for registering a new account.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::account::{NewAccount, RegisteredAccount, SignupError};
use crate::ports::AccountProvisioner;

/// Command to register an account.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub password: SecretString,
    pub name: Option<String>,
}

/// Handler for account signup.
///
/// Validation happens here so malformed requests never reach the provider.
pub struct SignupHandler {
    provisioner: Arc<dyn AccountProvisioner>,
}

impl SignupHandler {
    pub fn new(provisioner: Arc<dyn AccountProvisioner>) -> Self {
        Self { provisioner }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<RegisteredAccount, SignupError> {
        let account = NewAccount::new(cmd.email, cmd.password, cmd.name)?;
        self.provisioner.create_account(&account).await
    }
}
