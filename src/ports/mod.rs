//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Opaque string values with prefix scan
//! - `MoodRepository` - Per-user mood entry persistence
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Bearer token to authenticated user
//! - `AccountProvisioner` - Account creation in the auth provider

mod account_provisioner;
mod key_value_store;
mod mood_repository;
mod session_validator;

pub use account_provisioner::AccountProvisioner;
pub use key_value_store::{KeyValueStore, KvError};
pub use mood_repository::MoodRepository;
pub use session_validator::SessionValidator;
