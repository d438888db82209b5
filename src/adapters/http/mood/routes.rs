//! HTTP routes for mood endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_mood, delete_mood, list_moods, list_tags, update_mood, MoodHandlers,
};

/// Creates the mood router. Every route expects `RequireAuth`, so the caller
/// must layer `auth_middleware` on top.
pub fn mood_routes(handlers: MoodHandlers) -> Router {
    Router::new()
        .route("/", get(list_moods).post(create_mood))
        .route("/tags", get(list_tags))
        .route("/:id", put(update_mood).delete(delete_mood))
        .with_state(handlers)
}
