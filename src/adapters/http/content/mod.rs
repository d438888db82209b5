//! HTTP adapter for quote, tip and fact endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FactResponse, QuoteResponse, TipsParams, TipsResponse};
pub use handlers::ContentHandlers;
pub use routes::content_routes;
