//! Key-value store adapters and the repository built on top of them.
//!
//! - `InMemoryKeyValueStore` - process-local map for development and tests
//! - `RedisKeyValueStore` - Redis for production
//! - `KvMoodRepository` - `MoodRepository` over any `KeyValueStore`

mod in_memory;
mod mood_repository;
mod redis;

pub use in_memory::InMemoryKeyValueStore;
pub use mood_repository::{mood_key, user_prefix, KvMoodRepository};
pub use self::redis::RedisKeyValueStore;
