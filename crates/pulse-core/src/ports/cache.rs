use async_trait::async_trait;
use std::time::Duration;

/// Cache trait - abstraction over caching backends (Redis, in-memory).
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache. Expired or unreadable entries are
    /// reported as absent.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value in the cache with a per-entry TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
