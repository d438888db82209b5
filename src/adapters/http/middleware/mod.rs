//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - User bearer token middleware and extractor
//! - `shared_key` - Public anon key check for content and signup

pub mod auth;
pub mod shared_key;

pub use auth::{auth_middleware, bearer_token, AuthRejection, AuthState, RequireAuth};
pub use shared_key::{require_shared_key, SharedKey, SharedKeyState};
