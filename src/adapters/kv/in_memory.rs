//! In-Memory Key-Value Store Adapter
//!
//! Keeps all values in a process-local ordered map. Used in development when
//! no Redis is configured, and throughout the test suite.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, KvError};

/// In-memory key-value store.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryKeyValueStore {
    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// All stored keys in order.
    pub async fn keys(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }

    /// Remove everything.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), KvError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some("1".to_string()));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("a", "1").await.unwrap();
        store.set("a", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some("2".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_and_tolerates_missing() {
        let store = InMemoryKeyValueStore::new();
        store.set("a", "1").await.unwrap();
        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn prefix_scan_matches_only_prefix() {
        let store = InMemoryKeyValueStore::new();
        store.set("mood:u1:a", "1").await.unwrap();
        store.set("mood:u1:b", "2").await.unwrap();
        store.set("mood:u10:c", "3").await.unwrap();
        store.set("mood:u2:d", "4").await.unwrap();
        store.set("quotes", "[]").await.unwrap();

        let mut values = store.get_by_prefix("mood:u1:").await.unwrap();
        values.sort();
        assert_eq!(values, vec!["1".to_string(), "2".to_string()]);
    }

    #[tokio::test]
    async fn prefix_scan_with_no_match_is_empty() {
        let store = InMemoryKeyValueStore::new();
        store.set("quotes", "[]").await.unwrap();
        assert!(store.get_by_prefix("mood:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(other.keys().await, vec!["k".to_string()]);

        other.clear().await;
        assert!(store.is_empty().await);
    }
}
