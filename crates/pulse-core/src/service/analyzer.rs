//! Read-through caching facade over the analyzer service.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{DashboardBundle, TrajectoryPoint, TrendingPage, TrendingQuery};
use crate::error::GatewayError;
use crate::ports::{AnalyzerApi, Cache};

use super::keys;

/// Expiry for views assembled from live counters (dashboard, trending).
pub const LIVE_TTL: Duration = Duration::from_secs(30);

/// Expiry for historical series, which accrete far more slowly.
pub const HISTORY_TTL: Duration = Duration::from_secs(300);

/// The facade every inbound read goes through.
///
/// Each operation consults the cache first and only talks to the analyzer
/// on a miss. A cached entry always deserializes into the exact shape a
/// miss would return, so the cache changes latency only, never semantics.
/// Concurrent misses on one key each fetch and each write; there is no
/// single-flight deduplication and the TTL bounds the staleness window.
pub struct AnalyzerService {
    cache: Arc<dyn Cache>,
    upstream: Arc<dyn AnalyzerApi>,
}

impl AnalyzerService {
    pub fn new(cache: Arc<dyn Cache>, upstream: Arc<dyn AnalyzerApi>) -> Self {
        Self { cache, upstream }
    }

    /// Aggregate statistics plus leaderboard, fetched in parallel.
    ///
    /// Both halves must succeed. A dashboard missing half its content is
    /// worse than an explicit error, so there is no partial-result path
    /// and nothing is cached unless both fetches land.
    pub async fn dashboard(&self) -> Result<DashboardBundle, GatewayError> {
        if let Some(bundle) = self.cached(keys::DASHBOARD_KEY).await {
            return Ok(bundle);
        }

        let (stats, leaderboard) = tokio::try_join!(
            self.upstream.fetch_stats(),
            self.upstream.fetch_leaderboard()
        )?;

        let bundle = DashboardBundle { stats, leaderboard };
        self.store(keys::DASHBOARD_KEY, &bundle, LIVE_TTL).await;
        Ok(bundle)
    }

    /// One page of the trending listing.
    ///
    /// Query values are forwarded verbatim; the analyzer rejects or
    /// normalizes out-of-range pages, not the gateway.
    pub async fn trending(&self, query: &TrendingQuery) -> Result<TrendingPage, GatewayError> {
        let key = keys::trending(query);
        if let Some(page) = self.cached(&key).await {
            return Ok(page);
        }

        let page = self.upstream.fetch_trending(query).await?;
        self.store(&key, &page, LIVE_TTL).await;
        Ok(page)
    }

    /// All snapshots recorded for one video, oldest first.
    ///
    /// Unknown ids are not rejected here; whatever the analyzer returns,
    /// including an empty series, is cached and passed through.
    pub async fn trajectory(&self, video_id: &str) -> Result<Vec<TrajectoryPoint>, GatewayError> {
        let key = keys::trajectory(video_id);
        if let Some(points) = self.cached(&key).await {
            return Ok(points);
        }

        let points = self.upstream.fetch_trajectory(video_id).await?;
        self.store(&key, &points, HISTORY_TTL).await;
        Ok(points)
    }

    /// Look up and decode a cached entry. An entry that fails to decode
    /// is treated as a miss: the cache is advisory, not authoritative.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.cache.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed cache entry");
                None
            }
        }
    }

    /// Serialize and store a fetched result. A failed write is logged and
    /// dropped; the caller still gets the fresh result.
    async fn store<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize cache entry");
                return;
            }
        };
        if let Err(e) = self.cache.set(key, &raw, ttl).await {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }
}
