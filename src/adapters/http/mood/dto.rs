//! HTTP DTOs for mood endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::mood::{MoodEntry, MoodPatch};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a mood.
///
/// Missing `emoji` or `reason` deserialize as empty and fail validation with
/// a 400 instead of a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMoodRequest {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Partial update. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMoodRequest {
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl From<UpdateMoodRequest> for MoodPatch {
    fn from(req: UpdateMoodRequest) -> Self {
        Self {
            emoji: req.emoji,
            reason: req.reason,
            tag: req.tag,
        }
    }
}

/// Query parameters for listing moods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoodsParams {
    #[serde(default)]
    pub tag: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A mood entry as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MoodResponse {
    pub id: String,
    pub user_id: String,
    pub emoji: String,
    pub reason: String,
    pub tag: String,
    pub created_at: String,
}

impl From<&MoodEntry> for MoodResponse {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            user_id: entry.user_id().to_string(),
            emoji: entry.emoji().to_string(),
            reason: entry.reason().to_string(),
            tag: entry.tag().to_string(),
            created_at: entry.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// `{ "mood": {...} }`
#[derive(Debug, Clone, Serialize)]
pub struct MoodEnvelope {
    pub mood: MoodResponse,
}

/// `{ "moods": [...] }`, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct MoodListResponse {
    pub moods: Vec<MoodResponse>,
}

impl From<Vec<MoodEntry>> for MoodListResponse {
    fn from(entries: Vec<MoodEntry>) -> Self {
        Self {
            moods: entries.iter().map(MoodResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMoodResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MoodId, UserId};

    #[test]
    fn create_request_deserializes() {
        let json = r#"{"emoji": "😄", "reason": "Great day", "tag": "Work"}"#;
        let req: CreateMoodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.emoji, "😄");
        assert_eq!(req.reason, "Great day");
        assert_eq!(req.tag.as_deref(), Some("Work"));
    }

    #[test]
    fn create_request_missing_fields_default_to_empty() {
        let req: CreateMoodRequest = serde_json::from_str(r#"{"emoji": "😄"}"#).unwrap();
        assert_eq!(req.reason, "");
        assert!(req.tag.is_none());
    }

    #[test]
    fn update_request_converts_to_patch() {
        let req: UpdateMoodRequest = serde_json::from_str(r#"{"tag": "Family"}"#).unwrap();
        let patch: MoodPatch = req.into();
        assert_eq!(patch.tag.as_deref(), Some("Family"));
        assert!(patch.emoji.is_none());
        assert!(patch.reason.is_none());
    }

    #[test]
    fn mood_response_conversion() {
        let entry = MoodEntry::new(
            MoodId::new(),
            UserId::new("user-1").unwrap(),
            "😄".to_string(),
            "Great day".to_string(),
            None,
        )
        .unwrap();

        let response = MoodResponse::from(&entry);
        assert_eq!(response.id, entry.id().to_string());
        assert_eq!(response.user_id, "user-1");
        assert_eq!(response.tag, "");
        assert!(chrono::DateTime::parse_from_rfc3339(&response.created_at).is_ok());
    }
}
