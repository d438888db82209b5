//! HTTP handlers for mood endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, json_rejection, query_rejection};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::mood::{
    CreateMoodCommand, CreateMoodHandler, DeleteMoodCommand, DeleteMoodHandler, ListMoodsHandler,
    ListMoodsQuery, ListTagsHandler, ListTagsQuery, UpdateMoodCommand, UpdateMoodHandler,
};
use crate::domain::foundation::{ErrorCode, MoodId};
use crate::domain::mood::MoodError;

use super::dto::{
    CreateMoodRequest, DeleteMoodResponse, ListMoodsParams, MoodEnvelope, MoodListResponse,
    MoodResponse, TagListResponse, UpdateMoodRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MoodHandlers {
    create_handler: Arc<CreateMoodHandler>,
    list_handler: Arc<ListMoodsHandler>,
    tags_handler: Arc<ListTagsHandler>,
    update_handler: Arc<UpdateMoodHandler>,
    delete_handler: Arc<DeleteMoodHandler>,
}

impl MoodHandlers {
    pub fn new(
        create_handler: Arc<CreateMoodHandler>,
        list_handler: Arc<ListMoodsHandler>,
        tags_handler: Arc<ListTagsHandler>,
        update_handler: Arc<UpdateMoodHandler>,
        delete_handler: Arc<DeleteMoodHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            tags_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /moods - Record a mood
pub async fn create_mood(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<CreateMoodRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = CreateMoodCommand {
        user_id: user.id,
        emoji: req.emoji,
        reason: req.reason,
        tag: req.tag,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(entry) => {
            let response = MoodEnvelope {
                mood: MoodResponse::from(&entry),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_mood_error(e),
    }
}

/// GET /moods - List the caller's moods, newest first
pub async fn list_moods(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListMoodsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListMoodsQuery {
        user_id: user.id,
        tag: params.tag,
    };

    match handlers.list_handler.handle(query).await {
        Ok(entries) => (StatusCode::OK, Json(MoodListResponse::from(entries))).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

/// GET /moods/tags - Distinct tags the caller has used
pub async fn list_tags(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .tags_handler
        .handle(ListTagsQuery { user_id: user.id })
        .await
    {
        Ok(tags) => (StatusCode::OK, Json(TagListResponse { tags })).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

/// PUT /moods/:id - Partially update a mood
pub async fn update_mood(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
    Path(mood_id): Path<String>,
    body: Result<Json<UpdateMoodRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let Some(mood_id) = parse_mood_id(&mood_id) else {
        return mood_not_found();
    };

    let cmd = UpdateMoodCommand {
        user_id: user.id,
        mood_id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(entry) => {
            let response = MoodEnvelope {
                mood: MoodResponse::from(&entry),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_mood_error(e),
    }
}

/// DELETE /moods/:id - Permanently delete a mood
pub async fn delete_mood(
    State(handlers): State<MoodHandlers>,
    RequireAuth(user): RequireAuth,
    Path(mood_id): Path<String>,
) -> Response {
    let Some(mood_id) = parse_mood_id(&mood_id) else {
        return mood_not_found();
    };

    let cmd = DeleteMoodCommand {
        user_id: user.id,
        mood_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(DeleteMoodResponse { success: true })).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

// A malformed id can never name an existing entry.
fn parse_mood_id(raw: &str) -> Option<MoodId> {
    raw.parse::<MoodId>().ok()
}

fn mood_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ErrorCode::MoodNotFound, "Mood not found")
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_mood_error(error: MoodError) -> Response {
    let code = error.code();
    match error {
        MoodError::ValidationFailed { field, message } => {
            tracing::debug!(field = %field, "Mood validation failed: {}", message);
            error_response(StatusCode::BAD_REQUEST, code, message)
        }
        MoodError::NotFound(_) => mood_not_found(),
        MoodError::Storage(msg) => {
            tracing::error!("Mood storage failure: {}", msg);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                "Failed to access mood storage",
            )
        }
    }
}
