//! ContentService - read side of the motivational content lists.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::content::{pick_one, sample, ContentError, ContentList, Tip};
use crate::ports::KeyValueStore;

/// Serves random quotes and facts and the tip list from the store.
///
/// Holds no state besides the store handle; every call reads the list fresh.
pub struct ContentService {
    store: Arc<dyn KeyValueStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A uniformly chosen quote.
    ///
    /// # Errors
    ///
    /// - `EmptyList` if the quotes were never seeded or are empty
    pub async fn random_quote(&self) -> Result<String, ContentError> {
        self.random_string(ContentList::Quotes).await
    }

    /// A uniformly chosen fact.
    pub async fn random_fact(&self) -> Result<String, ContentError> {
        self.random_string(ContentList::Facts).await
    }

    /// The full tip list in stored order; empty when never seeded.
    pub async fn tips(&self) -> Result<Vec<Tip>, ContentError> {
        self.load(ContentList::Tips).await
    }

    /// Up to `count` distinct tips in random order.
    pub async fn sample_tips(&self, count: usize) -> Result<Vec<Tip>, ContentError> {
        let tips = self.tips().await?;
        Ok(sample(&tips, count, &mut rand::thread_rng()))
    }

    async fn random_string(&self, list: ContentList) -> Result<String, ContentError> {
        let items: Vec<String> = self.load(list).await?;
        pick_one(&items, &mut rand::thread_rng())
            .cloned()
            .ok_or(ContentError::EmptyList(list))
    }

    async fn load<T: DeserializeOwned>(&self, list: ContentList) -> Result<Vec<T>, ContentError> {
        let raw = self
            .store
            .get(list.storage_key())
            .await
            .map_err(|e| {
                tracing::error!(%list, error = %e, "Failed to read content list");
                ContentError::storage(e.to_string())
            })?;

        match raw {
            None => {
                tracing::debug!(%list, "Content list not seeded");
                Ok(Vec::new())
            }
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(%list, error = %e, "Content list is not valid JSON");
                ContentError::storage(format!("Corrupt {} list: {}", list, e))
            }),
        }
    }
}
