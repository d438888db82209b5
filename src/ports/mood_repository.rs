//! Mood repository port.
//!
//! Defines the contract for persisting and retrieving mood entries.
//!
//! # Design
//!
//! - **User-scoped**: every method takes the acting user's id, and
//!   implementations must only touch that user's entries
//! - **Unordered reads**: `list_by_user` returns entries in storage order;
//!   callers sort

use async_trait::async_trait;

use crate::domain::foundation::{MoodId, UserId};
use crate::domain::mood::{MoodEntry, MoodError};

/// Repository port for mood entry persistence.
#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// Insert or replace an entry under its owner.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn save(&self, entry: &MoodEntry) -> Result<(), MoodError>;

    /// Find one of the user's entries.
    ///
    /// Returns `None` if the user has no entry with this id, including when
    /// the id belongs to another user.
    async fn find(&self, user_id: &UserId, id: &MoodId) -> Result<Option<MoodEntry>, MoodError>;

    /// All entries owned by the user, unordered.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MoodEntry>, MoodError>;

    /// Permanently remove one of the user's entries.
    ///
    /// Removing an absent entry is not an error at this level; existence is
    /// checked by the caller.
    async fn delete(&self, user_id: &UserId, id: &MoodId) -> Result<(), MoodError>;
}
