//! UpdateMoodHandler - Command handler for editing a mood entry.

use std::sync::Arc;

use crate::domain::foundation::{MoodId, UserId};
use crate::domain::mood::{MoodEntry, MoodError, MoodPatch};
use crate::ports::MoodRepository;

/// Command to partially update one of the user's entries.
#[derive(Debug, Clone)]
pub struct UpdateMoodCommand {
    pub user_id: UserId,
    pub mood_id: MoodId,
    pub patch: MoodPatch,
}

/// Handler for updating mood entries.
pub struct UpdateMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl UpdateMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    /// Applies the patch and returns the stored entry. Owner and creation
    /// time are never touched.
    pub async fn handle(&self, cmd: UpdateMoodCommand) -> Result<MoodEntry, MoodError> {
        let mut entry = self
            .repository
            .find(&cmd.user_id, &cmd.mood_id)
            .await?
            .ok_or(MoodError::not_found(cmd.mood_id))?;

        if cmd.patch.is_empty() {
            return Ok(entry);
        }

        entry.apply(cmd.patch)?;
        self.repository.save(&entry).await?;

        tracing::info!(mood_id = %entry.id(), user_id = %cmd.user_id, "Mood updated");
        Ok(entry)
    }
}
