//! HTTP routes for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{signup, AccountHandlers};

/// Creates the account router. The caller layers the shared key check.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .with_state(handlers)
}
