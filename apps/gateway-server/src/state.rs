//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use pulse_core::ports::{Cache, CredentialVerifier, UpstreamError};
use pulse_core::service::AnalyzerService;
use pulse_infra::auth::StaticCredentialVerifier;
use pulse_infra::cache::{InMemoryCache, RedisCache, RedisConfig};
use pulse_infra::upstream::{HttpAnalyzerClient, UpstreamConfig};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<AnalyzerService>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// An unreachable Redis degrades to the in-memory cache; an invalid
    /// analyzer configuration is fatal.
    pub async fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let cache: Arc<dyn Cache> = match &config.redis_url {
            Some(url) => {
                let redis_config = RedisConfig {
                    url: url.clone(),
                    connect_timeout: Duration::from_secs(5),
                };
                match RedisCache::new(redis_config).await {
                    Ok(redis) => Arc::new(redis),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "Redis unavailable, falling back to in-memory cache"
                        );
                        Arc::new(InMemoryCache::new())
                    }
                }
            }
            None => {
                tracing::warn!("REDIS_URL not set, using in-memory cache");
                Arc::new(InMemoryCache::new())
            }
        };

        let upstream = HttpAnalyzerClient::new(UpstreamConfig {
            base_url: config.analyzer_url.clone(),
            api_key: config.internal_api_key.clone(),
            timeout: config.upstream_timeout,
        })?;

        let analyzer = Arc::new(AnalyzerService::new(cache, Arc::new(upstream)));
        let credentials: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentialVerifier::new(
            config.api_username.clone(),
            config.api_password.clone(),
        ));

        tracing::info!("Application state initialized");

        Ok(Self {
            analyzer,
            credentials,
        })
    }
}
