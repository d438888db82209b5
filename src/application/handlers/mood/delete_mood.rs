//! DeleteMoodHandler - Command handler for removing a mood entry.

use std::sync::Arc;

use crate::domain::foundation::{MoodId, UserId};
use crate::domain::mood::MoodError;
use crate::ports::MoodRepository;

/// Command to permanently delete one of the user's entries.
#[derive(Debug, Clone)]
pub struct DeleteMoodCommand {
    pub user_id: UserId,
    pub mood_id: MoodId,
}

/// Handler for deleting mood entries.
pub struct DeleteMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl DeleteMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMoodCommand) -> Result<(), MoodError> {
        if self
            .repository
            .find(&cmd.user_id, &cmd.mood_id)
            .await?
            .is_none()
        {
            return Err(MoodError::not_found(cmd.mood_id));
        }

        self.repository.delete(&cmd.user_id, &cmd.mood_id).await?;

        tracing::info!(mood_id = %cmd.mood_id, user_id = %cmd.user_id, "Mood deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mood::test_support::{entry_aged, user, MockMoodRepository};

    #[tokio::test]
    async fn deletes_existing_entry() {
        let u1 = user("u1");
        let keep = entry_aged(&u1, "keep", "", 120);
        let gone = entry_aged(&u1, "gone", "", 60);
        let repo = Arc::new(MockMoodRepository::with_entries(vec![keep.clone(), gone.clone()]));
        let handler = DeleteMoodHandler::new(repo.clone());

        handler
            .handle(DeleteMoodCommand {
                user_id: u1,
                mood_id: *gone.id(),
            })
            .await
            .unwrap();

        assert_eq!(repo.entries(), vec![keep]);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let u1 = user("u1");
        let entry = entry_aged(&u1, "once", "", 60);
        let repo = Arc::new(MockMoodRepository::with_entries(vec![entry.clone()]));
        let handler = DeleteMoodHandler::new(repo);
        let cmd = DeleteMoodCommand {
            user_id: u1,
            mood_id: *entry.id(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        assert_eq!(
            handler.handle(cmd).await,
            Err(MoodError::NotFound(*entry.id()))
        );
    }

    #[tokio::test]
    async fn cannot_delete_other_users_entry() {
        let entry = entry_aged(&user("alice"), "private", "", 60);
        let repo = Arc::new(MockMoodRepository::with_entries(vec![entry.clone()]));
        let handler = DeleteMoodHandler::new(repo.clone());

        let result = handler
            .handle(DeleteMoodCommand {
                user_id: user("bob"),
                mood_id: *entry.id(),
            })
            .await;

        assert!(matches!(result, Err(MoodError::NotFound(_))));
        assert_eq!(repo.entries(), vec![entry]);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = DeleteMoodHandler::new(Arc::new(MockMoodRepository::failing()));
        let result = handler
            .handle(DeleteMoodCommand {
                user_id: user("u1"),
                mood_id: MoodId::new(),
            })
            .await;
        assert!(matches!(result, Err(MoodError::Storage(_))));
    }
}
