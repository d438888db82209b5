//! Mood command and query handlers.
//!
//! Every handler takes the acting user's id and only touches that user's
//! entries.

mod create_mood;
mod delete_mood;
mod list_moods;
mod list_tags;
mod update_mood;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_mood::{CreateMoodCommand, CreateMoodHandler};
pub use delete_mood::{DeleteMoodCommand, DeleteMoodHandler};
pub use list_moods::{ListMoodsHandler, ListMoodsQuery};
pub use list_tags::{ListTagsHandler, ListTagsQuery};
pub use update_mood::{UpdateMoodCommand, UpdateMoodHandler};
