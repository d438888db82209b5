//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `AccountProvisioner` ports:
//!
//! - `jwt` - HS256 access token validation against the provider's secret
//! - `gotrue` - Account creation through the GoTrue admin API
//! - `mock` - Test implementations that don't require external services

mod gotrue;
mod jwt;
mod mock;

pub use gotrue::GoTrueAccountProvisioner;
pub use jwt::JwtSessionValidator;
pub use mock::{MockAccountProvisioner, MockSessionValidator};
