//! Cache implementations - Redis and in-memory fallback.

mod memory;
mod redis;

pub use self::redis::{RedisCache, RedisConfig};
pub use memory::InMemoryCache;
