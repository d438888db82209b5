//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT session validation and account provisioning
//! - `http` - axum REST API
//! - `kv` - Redis and in-memory key-value stores, mood repository

pub mod auth;
pub mod http;
pub mod kv;
