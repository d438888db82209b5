//! CreateMoodHandler - Command handler for recording a new mood.

use std::sync::Arc;

use crate::domain::foundation::{MoodId, UserId};
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

/// Command to record a new mood entry.
#[derive(Debug, Clone)]
pub struct CreateMoodCommand {
    pub user_id: UserId,
    pub emoji: String,
    pub reason: String,
    pub tag: Option<String>,
}

/// Handler for creating mood entries.
pub struct CreateMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl CreateMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    /// Validates, stamps and persists the entry. Nothing is written when
    /// validation fails.
    pub async fn handle(&self, cmd: CreateMoodCommand) -> Result<MoodEntry, MoodError> {
        let entry = MoodEntry::new(MoodId::new(), cmd.user_id, cmd.emoji, cmd.reason, cmd.tag)?;

        self.repository.save(&entry).await?;

        tracing::info!(
            mood_id = %entry.id(),
            user_id = %entry.user_id(),
            "Mood created"
        );
        Ok(entry)
    }
}
