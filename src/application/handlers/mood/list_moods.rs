//! ListMoodsHandler - Query handler for a user's mood history.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

/// Query for a user's moods, newest first.
#[derive(Debug, Clone)]
pub struct ListMoodsQuery {
    pub user_id: UserId,
    /// Case-insensitive substring filter on the tag. Blank means no filter.
    pub tag: Option<String>,
}

/// Newest first; equal timestamps fall back to id so the order is stable
/// across calls.
pub(crate) fn newest_first(a: &MoodEntry, b: &MoodEntry) -> Ordering {
    b.created_at()
        .cmp(a.created_at())
        .then_with(|| b.id().cmp(a.id()))
}

/// Handler for listing mood entries.
pub struct ListMoodsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl ListMoodsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListMoodsQuery) -> Result<Vec<MoodEntry>, MoodError> {
        let mut entries = self.repository.list_by_user(&query.user_id).await?;
        entries.sort_by(newest_first);

        if let Some(filter) = query.tag.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
            entries.retain(|entry| entry.tag_matches(filter));
        }

        tracing::debug!(user_id = %query.user_id, count = entries.len(), "Listed moods");
        Ok(entries)
    }
}
