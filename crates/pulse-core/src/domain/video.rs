use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Engagement counters reported by the analyzer for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
}

/// Video author as known to the source platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    pub nickname: String,
    #[serde(rename = "follower_count")]
    pub followers: i64,
}

/// One video as reported by the analyzer.
///
/// Every fetch yields a fresh snapshot; summaries are never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Storage identity assigned by the analyzer, when it exposes one.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub video_platform_id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub author: Author,
    pub stats: EngagementStats,
    pub virality_score: f64,
    pub engagement_rate: f64,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Source platform the video was ingested from.
    pub source: String,
    pub url: String,
}

/// One timestamped statistics snapshot for a single video.
///
/// Sequences are chronological as returned by the analyzer and are never
/// re-sorted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub video_platform_id: String,
    pub snapshot_time: DateTime<Utc>,
    pub stats: EngagementStats,
}
