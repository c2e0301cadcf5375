//! In-memory cache implementation - used as fallback when Redis is unavailable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use pulse_core::ports::{Cache, CacheError};

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache using a simple HashMap with async RwLock.
///
/// This is the fallback implementation when Redis is not available, and
/// the cache double in tests. Note: Data is lost on process restart.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        let entry = store.get(key)?;

        if Instant::now() > entry.expires_at {
            drop(store);
            // Clean up the expired entry with a write lock
            let mut store = self.store.write().await;
            store.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut store = self.store.write().await;

        store.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Duration::from_secs(30))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
        assert_eq!(cache.get("other").await, None);
    }

    #[tokio::test]
    async fn test_entry_expires() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Duration::from_millis(50))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(cache.get("key1").await, None);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Duration::from_secs(30))
            .await
            .unwrap();
        cache
            .set("key1", "value2", Duration::from_secs(30))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await, Some("value2".to_string()));
    }
}
