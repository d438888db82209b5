//! Redis-backed key-value store for production deployments.
//!
//! Values are plain Redis strings. Prefix scans use `SCAN MATCH` followed by
//! a single `MGET`, so they never block the server the way `KEYS` would.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::config::RedisConfig;
use crate::ports::{KeyValueStore, KvError};

/// Keys fetched per `SCAN` round trip.
const SCAN_BATCH: usize = 200;

/// Redis key-value store.
///
/// The multiplexed connection is cheap to clone; each operation works on its
/// own clone.
#[derive(Clone)]
pub struct RedisKeyValueStore {
    conn: MultiplexedConnection,
}

impl RedisKeyValueStore {
    /// Wrap an existing connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Open a connection using the configured URL and timeout.
    pub async fn connect(config: &RedisConfig) -> Result<Self, KvError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| KvError::Unavailable(format!("Invalid Redis URL: {}", e)))?;

        let conn = tokio::time::timeout(config.timeout(), client.get_multiplexed_tokio_connection())
            .await
            .map_err(|_| KvError::Unavailable("Timed out connecting to Redis".to_string()))?
            .map_err(unavailable)?;

        tracing::info!("Connected to Redis");
        Ok(Self::new(conn))
    }
}

fn unavailable(e: redis::RedisError) -> KvError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_timeout() {
        KvError::Unavailable(e.to_string())
    } else {
        KvError::OperationFailed(e.to_string())
    }
}

/// Builds a `SCAN MATCH` pattern that matches `prefix` literally.
fn match_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('*');
    pattern
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(unavailable)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await.map_err(unavailable)
    }

    async fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(unavailable)
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, KvError> {
        let mut conn = self.conn.clone();
        let pattern = match_pattern(prefix);

        let mut keys: Vec<String> = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(unavailable)?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        // SCAN may report a key more than once.
        keys.sort();
        keys.dedup();

        tracing::debug!(prefix, count = keys.len(), "Prefix scan matched keys");

        // Keys deleted between SCAN and MGET come back as nil.
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .map_err(unavailable)?;

        Ok(values.into_iter().flatten().collect())
    }
}

impl std::fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_pattern_appends_wildcard() {
        assert_eq!(match_pattern("mood:user-1:"), "mood:user-1:*");
    }

    #[test]
    fn match_pattern_escapes_glob_characters() {
        assert_eq!(match_pattern("a*b?[c]\\"), "a\\*b\\?\\[c\\]\\\\*");
    }

    #[test]
    fn redis_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisKeyValueStore>();
    }

    #[tokio::test]
    #[ignore = "Requires a running Redis instance"]
    async fn integration_prefix_scan_round_trip() {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
        let config = RedisConfig {
            url,
            ..Default::default()
        };
        let store = RedisKeyValueStore::connect(&config).await.unwrap();

        store.set("test:prefix:a", "1").await.unwrap();
        store.set("test:prefix:b", "2").await.unwrap();
        store.set("test:other", "3").await.unwrap();

        let mut values = store.get_by_prefix("test:prefix:").await.unwrap();
        values.sort();
        assert_eq!(values, vec!["1".to_string(), "2".to_string()]);

        for key in ["test:prefix:a", "test:prefix:b", "test:other"] {
            store.delete(key).await.unwrap();
        }
    }
}
