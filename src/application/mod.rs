//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod content;
pub mod handlers;

pub use content::{seed_content, ContentService, SeedReport};
pub use handlers::account::{SignupCommand, SignupHandler};
pub use handlers::mood::{
    CreateMoodCommand, CreateMoodHandler, DeleteMoodCommand, DeleteMoodHandler,
    ListMoodsHandler, ListMoodsQuery, ListTagsHandler, ListTagsQuery, UpdateMoodCommand,
    UpdateMoodHandler,
};
