//! Analyzer backend port.

use async_trait::async_trait;

use crate::domain::{DashboardStats, TrajectoryPoint, TrendingPage, TrendingQuery, VideoSummary};

/// Client trait for the internal analyzer resources.
///
/// One method per upstream resource; responses are decoded into typed
/// records at this boundary, so a body missing required fields surfaces
/// as an error here rather than propagating a malformed structure.
#[async_trait]
pub trait AnalyzerApi: Send + Sync {
    /// Aggregate counters from `/internal/stats`.
    async fn fetch_stats(&self) -> Result<DashboardStats, UpstreamError>;

    /// Ranked leaderboard from `/internal/leaderboard`.
    async fn fetch_leaderboard(&self) -> Result<Vec<VideoSummary>, UpstreamError>;

    /// One page of `/internal/trending`, filtered and sorted upstream.
    async fn fetch_trending(&self, query: &TrendingQuery) -> Result<TrendingPage, UpstreamError>;

    /// All snapshots for one video from `/internal/video/{id}/trajectory`.
    async fn fetch_trajectory(&self, video_id: &str)
    -> Result<Vec<TrajectoryPoint>, UpstreamError>;
}

/// Upstream request failures. All variants collapse to a single
/// "service unavailable" category at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Decode(String),
}
