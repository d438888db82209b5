//! Mood domain module.
//!
//! Mood entries are per-user journal records: an emoji, a free-text reason
//! and an optional tag, stamped with their creation time.

mod entry;
mod errors;

pub use entry::{MoodEntry, MoodPatch};
pub use errors::MoodError;
