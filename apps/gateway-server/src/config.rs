//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base address of the analyzer service.
    pub analyzer_url: String,
    /// Shared secret identifying the gateway to the analyzer.
    pub internal_api_key: String,
    /// Per-request timeout for analyzer calls.
    pub upstream_timeout: Duration,
    /// Redis address; the in-memory cache is used when unset.
    pub redis_url: Option<String>,
    pub api_username: String,
    pub api_password: String,
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            analyzer_url: env::var("ANALYZER_URL")
                .map_err(|_| ConfigError::MissingVar("ANALYZER_URL"))?,
            internal_api_key: env::var("INTERNAL_API_KEY")
                .map_err(|_| ConfigError::MissingVar("INTERNAL_API_KEY"))?,
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            redis_url: env::var("REDIS_URL").ok(),
            api_username: env::var("API_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            api_password: env::var("API_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
        })
    }
}
