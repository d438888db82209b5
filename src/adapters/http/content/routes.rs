//! HTTP routes for content endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_fact, get_quote, get_tips, ContentHandlers};

/// Creates the content router. The caller layers the shared key check.
pub fn content_routes(handlers: ContentHandlers) -> Router {
    Router::new()
        .route("/quote", get(get_quote))
        .route("/tips", get(get_tips))
        .route("/fact", get(get_fact))
        .with_state(handlers)
}
