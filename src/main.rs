//! Mood Journal server binary.

use std::sync::Arc;

use axum::middleware;
use http::{header, HeaderName, HeaderValue, Method};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mood_journal::adapters::auth::{GoTrueAccountProvisioner, JwtSessionValidator};
use mood_journal::adapters::http::{api_router, timeout_as_json, ApiDependencies};
use mood_journal::adapters::kv::{InMemoryKeyValueStore, RedisKeyValueStore};
use mood_journal::application::seed_content;
use mood_journal::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use mood_journal::domain::account::SignupError;
use mood_journal::domain::content::ContentError;
use mood_journal::ports::{KeyValueStore, KvError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Key-value store unavailable: {0}")]
    Store(#[from] KvError),

    #[error("Content seeding failed: {0}")]
    Seed(#[from] ContentError),

    #[error("Auth provider client: {0}")]
    AuthProvider(#[from] SignupError),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed yet.
        eprintln!("mood-journal: {}", e);
        tracing::error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server)?;
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        api_prefix = %config.server.api_prefix,
        "Starting mood journal"
    );

    let store: Arc<dyn KeyValueStore> = match &config.redis {
        Some(redis) => Arc::new(RedisKeyValueStore::connect(redis).await?),
        None => {
            tracing::warn!("No redis configured; using in-memory store, data is lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let report = seed_content(store.as_ref()).await?;
    if report.is_noop() {
        tracing::info!("Content already seeded");
    }

    let deps = ApiDependencies {
        store,
        session_validator: Arc::new(JwtSessionValidator::new(
            &config.auth.jwt_secret,
            config.auth.audience.clone(),
        )),
        provisioner: Arc::new(GoTrueAccountProvisioner::from_config(&config.auth)?),
        public_anon_key: config.auth.public_anon_key.clone(),
    };

    let request_id = HeaderName::from_static("x-request-id");
    let app = api_router(deps, &config.server.api_prefix).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::map_response(timeout_as_json))
            .layer(TimeoutLayer::new(config.server.request_timeout()))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, pretty text otherwise. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(server: &ServerConfig) -> Result<(), StartupError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&server.log_level)
            .map_err(|e| StartupError::LogFilter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("apikey"),
        ]);

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        base
    } else {
        base.allow_origin(AllowOrigin::any())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
