//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; `router` wires them
//! together with their auth layers.

pub mod account;
pub mod content;
pub mod error;
pub mod middleware;
pub mod mood;
pub mod router;

pub use error::{error_response, timeout_as_json, ErrorResponse};
pub use router::{api_router, ApiDependencies};
