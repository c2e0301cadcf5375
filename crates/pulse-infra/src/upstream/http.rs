//! HTTP client for the analyzer's internal resources.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use pulse_core::domain::{
    DashboardStats, TrajectoryPoint, TrendingPage, TrendingQuery, VideoSummary,
};
use pulse_core::ports::{AnalyzerApi, UpstreamError};

/// Shared-secret header identifying the gateway to the analyzer.
const INTERNAL_API_KEY_HEADER: &str = "X-Internal-API-Key";

/// Analyzer connection configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base address of the analyzer service.
    pub base_url: String,
    /// Shared secret sent with every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Reqwest-backed analyzer client.
///
/// Built once at startup; the inner client carries the request timeout
/// and the secret header, so every call site stays a plain GET.
pub struct HttpAnalyzerClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalyzerClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut api_key = reqwest::header::HeaderValue::from_str(&config.api_key)
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(INTERNAL_API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Connection(e.to_string())
    }
}

#[async_trait]
impl AnalyzerApi for HttpAnalyzerClient {
    async fn fetch_stats(&self) -> Result<DashboardStats, UpstreamError> {
        self.get_json("/internal/stats", &[]).await
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<VideoSummary>, UpstreamError> {
        self.get_json("/internal/leaderboard", &[]).await
    }

    async fn fetch_trending(&self, query: &TrendingQuery) -> Result<TrendingPage, UpstreamError> {
        let mut params = vec![
            ("sort_by", query.sort_by.clone()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        // absent filter is omitted outright, not sent as a sentinel
        if let Some(platform) = &query.platform {
            params.push(("platform", platform.clone()));
        }
        self.get_json("/internal/trending", &params).await
    }

    async fn fetch_trajectory(
        &self,
        video_id: &str,
    ) -> Result<Vec<TrajectoryPoint>, UpstreamError> {
        self.get_json(&format!("/internal/video/{video_id}/trajectory"), &[])
            .await
    }
}
