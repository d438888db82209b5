//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `account` - Signup request validation and registered account shape
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth types, errors)
//! - `mood` - Mood entry aggregate and its errors
//! - `content` - Seeded quotes, tips and facts plus random selection

pub mod account;
pub mod content;
pub mod foundation;
pub mod mood;
