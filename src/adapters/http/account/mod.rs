//! HTTP adapter for account signup.

mod dto;
mod handlers;
mod routes;

pub use dto::{SignupRequest, SignupResponse, UserResponse};
pub use handlers::AccountHandlers;
pub use routes::account_routes;
