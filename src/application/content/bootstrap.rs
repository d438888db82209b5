//! One-time content seeding, run at startup before the server accepts
//! requests.

use crate::domain::content::{ContentError, ContentList};
use crate::ports::KeyValueStore;

const SENTINEL_VALUE: &str = "true";

/// Which lists a `seed_content` run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub written: Vec<ContentList>,
}

impl SeedReport {
    /// True if the store was already fully seeded.
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }

    pub fn wrote(&self, list: ContentList) -> bool {
        self.written.contains(&list)
    }
}

/// Writes each seed list whose sentinel is absent, then its sentinel.
///
/// Idempotent: once a list's sentinel exists the list is never rewritten,
/// even if it was later removed or edited in the store.
pub async fn seed_content(store: &dyn KeyValueStore) -> Result<SeedReport, ContentError> {
    let mut report = SeedReport::default();

    for list in ContentList::ALL {
        let seeded = store
            .get(list.sentinel_key())
            .await
            .map_err(|e| ContentError::storage(e.to_string()))?
            .is_some();
        if seeded {
            tracing::debug!(%list, "Content list already seeded");
            continue;
        }

        let json = list
            .seed_json()
            .map_err(|e| ContentError::storage(format!("Failed to encode {}: {}", list, e)))?;
        store
            .set(list.storage_key(), &json)
            .await
            .map_err(|e| ContentError::storage(e.to_string()))?;
        store
            .set(list.sentinel_key(), SENTINEL_VALUE)
            .await
            .map_err(|e| ContentError::storage(e.to_string()))?;

        tracing::info!(%list, "Seeded content list");
        report.written.push(list);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::kv::InMemoryKeyValueStore;
    use crate::ports::KvError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts writes per key on top of the in-memory store.
    struct CountingStore {
        inner: InMemoryKeyValueStore,
        writes: AtomicUsize,
        fail_writes: bool,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: InMemoryKeyValueStore::new(),
                writes: AtomicUsize::new(0),
                fail_writes: false,
            }
        }
    }

    #[async_trait]
    impl KeyValueStore for CountingStore {
        async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
            if self.fail_writes {
                return Err(KvError::Unavailable("down".to_string()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &str) -> Result<(), KvError> {
            self.inner.delete(key).await
        }

        async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, KvError> {
            self.inner.get_by_prefix(prefix).await
        }
    }

    #[tokio::test]
    async fn first_run_writes_every_list_and_sentinel() {
        let store = CountingStore::new();

        let report = seed_content(&store).await.unwrap();

        assert_eq!(report.written, ContentList::ALL.to_vec());
        assert_eq!(store.writes.load(Ordering::SeqCst), 6);
        for list in ContentList::ALL {
            assert_eq!(
                store.get(list.sentinel_key()).await.unwrap().as_deref(),
                Some("true")
            );
            assert_eq!(
                store.get(list.storage_key()).await.unwrap(),
                Some(list.seed_json().unwrap())
            );
        }
    }

    #[tokio::test]
    async fn seeding_twice_writes_each_list_once() {
        let store = CountingStore::new();

        seed_content(&store).await.unwrap();
        let second = seed_content(&store).await.unwrap();

        assert!(second.is_noop());
        assert_eq!(store.writes.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn only_missing_lists_are_written() {
        let store = InMemoryKeyValueStore::new();
        store.set("tips_initialized", "true").await.unwrap();
        store.set("tips", "[]").await.unwrap();

        let report = seed_content(&store).await.unwrap();

        assert!(report.wrote(ContentList::Quotes));
        assert!(!report.wrote(ContentList::Tips));
        assert!(report.wrote(ContentList::Facts));
        assert_eq!(store.get("tips").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let store = CountingStore {
            fail_writes: true,
            ..CountingStore::new()
        };
        assert!(matches!(
            seed_content(&store).await,
            Err(ContentError::Storage(_))
        ));
    }
}
