//! Mood entry aggregate.
//!
//! A mood entry is a single timestamped journal record owned by one user.
//! The owner and creation time are fixed at creation; only the emoji, reason
//! and tag can change afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MoodId, Timestamp, UserId, ValidationError};

/// Mood entry aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `user_id` never changes after creation
/// - `emoji` and `reason` are never blank
/// - `created_at` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    id: MoodId,
    user_id: UserId,
    emoji: String,
    reason: String,
    #[serde(default)]
    tag: String,
    created_at: Timestamp,
}

/// Partial update of a mood entry. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodPatch {
    pub emoji: Option<String>,
    pub reason: Option<String>,
    pub tag: Option<String>,
}

impl MoodPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.emoji.is_none() && self.reason.is_none() && self.tag.is_none()
    }
}

impl MoodEntry {
    /// Create a new mood entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `emoji` or `reason` is blank
    pub fn new(
        id: MoodId,
        user_id: UserId,
        emoji: String,
        reason: String,
        tag: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::validate_required("emoji", &emoji)?;
        Self::validate_required("reason", &reason)?;

        Ok(Self {
            id,
            user_id,
            emoji,
            reason,
            tag: tag.unwrap_or_default(),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute an entry from persistence (no validation).
    pub fn reconstitute(
        id: MoodId,
        user_id: UserId,
        emoji: String,
        reason: String,
        tag: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            emoji,
            reason,
            tag,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MoodId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the tag, empty when the entry is untagged.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user owns this entry.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Case-insensitive substring match against the tag.
    pub fn tag_matches(&self, filter: &str) -> bool {
        self.tag.to_lowercase().contains(&filter.to_lowercase())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a partial update.
    ///
    /// The patch is validated as a whole before anything changes, so a
    /// rejected patch leaves the entry untouched.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the patch supplies a blank `emoji` or `reason`
    pub fn apply(&mut self, patch: MoodPatch) -> Result<(), ValidationError> {
        if let Some(emoji) = &patch.emoji {
            Self::validate_required("emoji", emoji)?;
        }
        if let Some(reason) = &patch.reason {
            Self::validate_required("reason", reason)?;
        }

        if let Some(emoji) = patch.emoji {
            self.emoji = emoji;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
        Ok(())
    }

    fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        Ok(())
    }
}
