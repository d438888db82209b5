//! Account provisioning port.
//!
//! Signup is delegated to the auth provider. The provider owns credentials;
//! this service never stores passwords.

use async_trait::async_trait;

use crate::domain::account::{NewAccount, RegisteredAccount, SignupError};

/// Creates accounts in the auth provider.
///
/// # Contract
///
/// Implementations must:
/// - Create the account with its email already confirmed
/// - Store the display name in the provider's user metadata
/// - Return `SignupError::Rejected` with the provider's message when it
///   refuses the account (duplicate email, weak password, ...)
/// - Return `SignupError::Unavailable` for transport failures
#[async_trait]
pub trait AccountProvisioner: Send + Sync {
    async fn create_account(&self, account: &NewAccount) -> Result<RegisteredAccount, SignupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_provisioner_is_object_safe_and_send_sync() {
        fn _accepts_dyn(_provisioner: &dyn AccountProvisioner) {}
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<std::sync::Arc<dyn AccountProvisioner>>();
    }
}
