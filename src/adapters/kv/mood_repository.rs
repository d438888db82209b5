//! Key-value implementation of MoodRepository.
//!
//! Entries are stored as JSON under `mood:<user_id>:<mood_id>`. The user id in
//! the key is the only partitioning; a lookup with the wrong user simply finds
//! nothing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{MoodId, UserId};
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::{KeyValueStore, KvError, MoodRepository};

const MOOD_KEY_PREFIX: &str = "mood";

/// Key under which one mood entry is stored.
pub fn mood_key(user_id: &UserId, id: &MoodId) -> String {
    format!("{}:{}:{}", MOOD_KEY_PREFIX, user_id, id)
}

/// Prefix shared by every key of one user. `UserId` never contains ':', so
/// one user's prefix is never a prefix of another's.
pub fn user_prefix(user_id: &UserId) -> String {
    format!("{}:{}:", MOOD_KEY_PREFIX, user_id)
}

/// Mood repository backed by any `KeyValueStore`.
#[derive(Clone)]
pub struct KvMoodRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvMoodRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

fn storage_error(err: KvError) -> MoodError {
    tracing::error!(error = %err, "Mood store operation failed");
    MoodError::storage(err.to_string())
}

#[async_trait]
impl MoodRepository for KvMoodRepository {
    async fn save(&self, entry: &MoodEntry) -> Result<(), MoodError> {
        let json = serde_json::to_string(entry)
            .map_err(|e| MoodError::storage(format!("Failed to encode mood: {}", e)))?;

        self.store
            .set(&mood_key(entry.user_id(), entry.id()), &json)
            .await
            .map_err(storage_error)
    }

    async fn find(&self, user_id: &UserId, id: &MoodId) -> Result<Option<MoodEntry>, MoodError> {
        let raw = self
            .store
            .get(&mood_key(user_id, id))
            .await
            .map_err(storage_error)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let entry: MoodEntry = serde_json::from_str(&raw)
            .map_err(|e| MoodError::storage(format!("Corrupt mood record {}: {}", id, e)))?;

        // Guards against a record written under the wrong key.
        if !entry.is_owner(user_id) {
            return Ok(None);
        }
        Ok(Some(entry))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MoodEntry>, MoodError> {
        let raws = self
            .store
            .get_by_prefix(&user_prefix(user_id))
            .await
            .map_err(storage_error)?;

        let mut entries = Vec::with_capacity(raws.len());
        for raw in raws {
            match serde_json::from_str::<MoodEntry>(&raw) {
                Ok(entry) if entry.is_owner(user_id) => entries.push(entry),
                Ok(entry) => {
                    tracing::warn!(
                        user_id = %user_id,
                        mood_id = %entry.id(),
                        "Skipping mood record stored under another user's prefix"
                    );
                }
                Err(e) => {
                    tracing::warn!(user_id = %user_id, error = %e, "Skipping undecodable mood record");
                }
            }
        }
        Ok(entries)
    }

    async fn delete(&self, user_id: &UserId, id: &MoodId) -> Result<(), MoodError> {
        self.store
            .delete(&mood_key(user_id, id))
            .await
            .map_err(storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::kv::InMemoryKeyValueStore;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn entry_for(user_id: &UserId, reason: &str) -> MoodEntry {
        MoodEntry::new(
            MoodId::new(),
            user_id.clone(),
            "😄".to_string(),
            reason.to_string(),
            None,
        )
        .unwrap()
    }

    fn setup() -> (InMemoryKeyValueStore, KvMoodRepository) {
        let store = InMemoryKeyValueStore::new();
        let repo = KvMoodRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[test]
    fn keys_are_namespaced_by_user() {
        let user_id = user("abc");
        let id = MoodId::new();
        assert_eq!(mood_key(&user_id, &id), format!("mood:abc:{}", id));
        assert_eq!(user_prefix(&user_id), "mood:abc:");
    }

    #[tokio::test]
    async fn save_then_find_returns_entry() {
        let (store, repo) = setup();
        let user_id = user("u1");
        let entry = entry_for(&user_id, "Great day");

        repo.save(&entry).await.unwrap();

        assert_eq!(repo.find(&user_id, entry.id()).await.unwrap(), Some(entry.clone()));
        assert_eq!(store.keys().await, vec![mood_key(&user_id, entry.id())]);
    }

    #[tokio::test]
    async fn find_with_other_user_returns_none() {
        let (_, repo) = setup();
        let owner = user("owner");
        let entry = entry_for(&owner, "Mine");
        repo.save(&entry).await.unwrap();

        assert_eq!(repo.find(&user("intruder"), entry.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_returns_only_users_entries() {
        let (_, repo) = setup();
        let alice = user("alice");
        let alicia = user("alicia");
        repo.save(&entry_for(&alice, "one")).await.unwrap();
        repo.save(&entry_for(&alice, "two")).await.unwrap();
        repo.save(&entry_for(&alicia, "three")).await.unwrap();

        let listed = repo.list_by_user(&alice).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|e| e.is_owner(&alice)));
    }

    #[tokio::test]
    async fn list_skips_undecodable_records() {
        let (store, repo) = setup();
        let user_id = user("u1");
        repo.save(&entry_for(&user_id, "fine")).await.unwrap();
        store.set("mood:u1:garbage", "not json").await.unwrap();

        let listed = repo.list_by_user(&user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].reason(), "fine");
    }

    #[tokio::test]
    async fn find_surfaces_undecodable_record_as_storage_error() {
        let (store, repo) = setup();
        let user_id = user("u1");
        let id = MoodId::new();
        store.set(&mood_key(&user_id, &id), "{").await.unwrap();

        let result = repo.find(&user_id, &id).await;
        assert!(matches!(result, Err(MoodError::Storage(_))));
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let (store, repo) = setup();
        let user_id = user("u1");
        let entry = entry_for(&user_id, "bye");
        repo.save(&entry).await.unwrap();

        repo.delete(&user_id, entry.id()).await.unwrap();

        assert_eq!(repo.find(&user_id, entry.id()).await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn legacy_record_without_tag_decodes() {
        let (store, repo) = setup();
        let user_id = user("u1");
        let id = MoodId::new();
        let raw = format!(
            r#"{{"id":"{}","user_id":"u1","emoji":"😐","reason":"meh","created_at":"2024-01-01T00:00:00Z"}}"#,
            id
        );
        store.set(&mood_key(&user_id, &id), &raw).await.unwrap();

        let found = repo.find(&user_id, &id).await.unwrap().unwrap();
        assert_eq!(found.tag(), "");
    }
}
