//! Shared mock repository for the mood handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{MoodId, Timestamp, UserId};
use crate::domain::mood::{MoodEntry, MoodError};
use crate::ports::MoodRepository;

pub struct MockMoodRepository {
    entries: Mutex<Vec<MoodEntry>>,
    fail: bool,
}

impl MockMoodRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            fail: false,
        }
    }

    pub fn entries(&self) -> Vec<MoodEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), MoodError> {
        if self.fail {
            return Err(MoodError::storage("Simulated store failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl MoodRepository for MockMoodRepository {
    async fn save(&self, entry: &MoodEntry) -> Result<(), MoodError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| !(e.id() == entry.id() && e.user_id() == entry.user_id()));
        entries.push(entry.clone());
        Ok(())
    }

    async fn find(&self, user_id: &UserId, id: &MoodId) -> Result<Option<MoodEntry>, MoodError> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id && e.is_owner(user_id))
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MoodEntry>, MoodError> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.is_owner(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: &MoodId) -> Result<(), MoodError> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .retain(|e| !(e.id() == id && e.is_owner(user_id)));
        Ok(())
    }
}

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

/// Entry created `age_secs` seconds ago.
pub fn entry_aged(user_id: &UserId, reason: &str, tag: &str, age_secs: i64) -> MoodEntry {
    MoodEntry::reconstitute(
        MoodId::new(),
        user_id.clone(),
        "🙂".to_string(),
        reason.to_string(),
        tag.to_string(),
        Timestamp::now().plus_secs(-age_secs),
    )
}
