//! Account domain module.
//!
//! Accounts live in the external auth provider; this module only describes
//! what a signup request must contain and what comes back.

mod errors;
mod registration;

pub use errors::SignupError;
pub use registration::{NewAccount, RegisteredAccount, MIN_PASSWORD_LENGTH};
