//! Key-value store port.
//!
//! The only persistence primitive the service relies on: opaque string values
//! under string keys, plus a prefix scan. Per-user isolation is built on top
//! of it by embedding the user id in the key.
//!
//! # Contract
//!
//! - `get` returns `None` for absent keys
//! - `set` overwrites unconditionally (last write wins)
//! - `delete` on an absent key is not an error
//! - `get_by_prefix` returns the values of every key starting with `prefix`,
//!   in no particular order; the prefix is matched literally

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by key-value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KvError {
    #[error("Key-value store unavailable: {0}")]
    Unavailable(String),

    #[error("Key-value operation failed: {0}")]
    OperationFailed(String),
}

/// Port for the external key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a single value.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Write a single value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove a key.
    async fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Read the values of all keys that start with `prefix`.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, KvError>;
}
