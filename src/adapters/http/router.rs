//! Assembles the full API router from its parts.

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use secrecy::SecretString;
use serde::Serialize;

use crate::adapters::kv::KvMoodRepository;
use crate::application::content::ContentService;
use crate::application::handlers::account::SignupHandler;
use crate::application::handlers::mood::{
    CreateMoodHandler, DeleteMoodHandler, ListMoodsHandler, ListTagsHandler, UpdateMoodHandler,
};
use crate::ports::{AccountProvisioner, KeyValueStore, MoodRepository, SessionValidator};

use super::account::{account_routes, AccountHandlers};
use super::content::{content_routes, ContentHandlers};
use super::middleware::{auth_middleware, require_shared_key, SharedKey};
use super::mood::{mood_routes, MoodHandlers};

/// Everything the API needs from the outside world.
pub struct ApiDependencies {
    pub store: Arc<dyn KeyValueStore>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub provisioner: Arc<dyn AccountProvisioner>,
    pub public_anon_key: SecretString,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Builds the API router, nested under `api_prefix` when it is non-empty.
///
/// Mood routes sit behind the bearer token middleware, content and signup
/// behind the shared key check. `/health` is open.
pub fn api_router(deps: ApiDependencies, api_prefix: &str) -> Router {
    let repository: Arc<dyn MoodRepository> = Arc::new(KvMoodRepository::new(deps.store.clone()));

    let mood_handlers = MoodHandlers::new(
        Arc::new(CreateMoodHandler::new(repository.clone())),
        Arc::new(ListMoodsHandler::new(repository.clone())),
        Arc::new(ListTagsHandler::new(repository.clone())),
        Arc::new(UpdateMoodHandler::new(repository.clone())),
        Arc::new(DeleteMoodHandler::new(repository)),
    );
    let moods = mood_routes(mood_handlers).route_layer(middleware::from_fn_with_state(
        deps.session_validator,
        auth_middleware,
    ));

    let content_handlers = ContentHandlers::new(Arc::new(ContentService::new(deps.store)));
    let account_handlers =
        AccountHandlers::new(Arc::new(SignupHandler::new(deps.provisioner)));
    let shared = content_routes(content_handlers)
        .merge(account_routes(account_handlers))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(SharedKey::new(deps.public_anon_key)),
            require_shared_key,
        ));

    let api = Router::new()
        .route("/health", get(health))
        .nest("/moods", moods)
        .merge(shared);

    if api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(api_prefix, api)
    }
}
