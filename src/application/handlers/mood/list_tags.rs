//! ListTagsHandler - Query handler for the tags a user has used.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::mood::MoodError;
use crate::ports::MoodRepository;

use super::list_moods::newest_first;

/// Query for a user's distinct tags.
#[derive(Debug, Clone)]
pub struct ListTagsQuery {
    pub user_id: UserId,
}

/// Handler returning distinct non-empty tags, most recently used first.
pub struct ListTagsHandler {
    repository: Arc<dyn MoodRepository>,
}

impl ListTagsHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListTagsQuery) -> Result<Vec<String>, MoodError> {
        let mut entries = self.repository.list_by_user(&query.user_id).await?;
        entries.sort_by(newest_first);

        let mut seen = HashSet::new();
        Ok(entries
            .iter()
            .map(|entry| entry.tag())
            .filter(|tag| !tag.is_empty() && seen.insert(*tag))
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mood::test_support::{entry_aged, user, MockMoodRepository};

    #[tokio::test]
    async fn distinct_tags_in_first_seen_order() {
        let u1 = user("u1");
        let repo = MockMoodRepository::with_entries(vec![
            entry_aged(&u1, "a", "Work", 50),
            entry_aged(&u1, "b", "", 40),
            entry_aged(&u1, "c", "Family", 30),
            entry_aged(&u1, "d", "Work", 20),
            entry_aged(&u1, "e", "Sleep", 10),
        ]);
        let handler = ListTagsHandler::new(Arc::new(repo));

        let tags = handler.handle(ListTagsQuery { user_id: u1 }).await.unwrap();
        assert_eq!(tags, vec!["Sleep", "Work", "Family"]);
    }

    #[tokio::test]
    async fn no_entries_no_tags() {
        let handler = ListTagsHandler::new(Arc::new(MockMoodRepository::new()));
        let tags = handler
            .handle(ListTagsQuery { user_id: user("u1") })
            .await
            .unwrap();
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn ignores_other_users_tags() {
        let repo = MockMoodRepository::with_entries(vec![
            entry_aged(&user("alice"), "a", "Secret", 10),
            entry_aged(&user("bob"), "b", "Public", 10),
        ]);
        let handler = ListTagsHandler::new(Arc::new(repo));

        let tags = handler
            .handle(ListTagsQuery { user_id: user("bob") })
            .await
            .unwrap();
        assert_eq!(tags, vec!["Public"]);
    }
}
