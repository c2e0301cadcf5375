//! # Pulse Infrastructure
//!
//! Concrete implementations of the ports defined in `pulse-core`:
//! cache backends, the analyzer HTTP client, and credential verification.

pub mod auth;
pub mod cache;
pub mod upstream;

pub use auth::StaticCredentialVerifier;
pub use cache::{InMemoryCache, RedisCache, RedisConfig};
pub use upstream::{HttpAnalyzerClient, UpstreamConfig};
