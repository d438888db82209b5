//! Content domain module.
//!
//! Quotes, facts and tips are immutable lists seeded once into the store.
//! This module owns the seed data and the random selection rules.

mod errors;
mod sampling;
mod seed;
mod tip;

pub use errors::ContentError;
pub use sampling::{pick_one, sample, DEFAULT_TIP_SAMPLE};
pub use seed::{seed_facts, seed_quotes, seed_tips, ContentList};
pub use tip::Tip;
