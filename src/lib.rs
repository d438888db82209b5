//! Mood Journal - Personal mood tracking service
//!
//! Users record how they feel (an emoji, a reason and an optional tag) and
//! read back their own history. The service also hands out motivational
//! quotes, wellness tips and mood facts from seeded content lists.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
