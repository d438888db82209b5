//! Content use cases: the read service and the startup seed.

mod bootstrap;
mod service;

pub use bootstrap::{seed_content, SeedReport};
pub use service::ContentService;
