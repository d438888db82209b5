//! HTTP handlers for content endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, query_rejection};
use crate::application::content::ContentService;
use crate::domain::content::ContentError;

use super::dto::{FactResponse, QuoteResponse, TipsParams, TipsResponse};

#[derive(Clone)]
pub struct ContentHandlers {
    service: Arc<ContentService>,
}

impl ContentHandlers {
    pub fn new(service: Arc<ContentService>) -> Self {
        Self { service }
    }
}

/// GET /quote - One random quote
pub async fn get_quote(State(handlers): State<ContentHandlers>) -> Response {
    match handlers.service.random_quote().await {
        Ok(quote) => (StatusCode::OK, Json(QuoteResponse { quote })).into_response(),
        Err(e) => handle_content_error(e),
    }
}

/// GET /fact - One random fact
pub async fn get_fact(State(handlers): State<ContentHandlers>) -> Response {
    match handlers.service.random_fact().await {
        Ok(fact) => (StatusCode::OK, Json(FactResponse { fact })).into_response(),
        Err(e) => handle_content_error(e),
    }
}

/// GET /tips - All tips, or `count` random ones
pub async fn get_tips(
    State(handlers): State<ContentHandlers>,
    params: Result<Query<TipsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let result = match params.count {
        Some(count) => handlers.service.sample_tips(count).await,
        None => handlers.service.tips().await,
    };

    match result {
        Ok(tips) => (StatusCode::OK, Json(TipsResponse { tips })).into_response(),
        Err(e) => handle_content_error(e),
    }
}

fn handle_content_error(error: ContentError) -> Response {
    match &error {
        ContentError::EmptyList(list) => {
            tracing::error!(%list, "Content list is empty; was the store seeded?");
        }
        ContentError::Storage(msg) => {
            tracing::error!("Content storage failure: {}", msg);
        }
    }
    error_response(StatusCode::INTERNAL_SERVER_ERROR, error.code(), error.to_string())
}
