use serde::{Deserialize, Serialize};

use super::VideoSummary;

/// Aggregate counters from the analyzer's stats resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_assets: i64,
    pub status: String,
}

/// The merged dashboard view: aggregate stats plus the ranked leaderboard.
///
/// Exists only as the joined result of two parallel fetches; it has no
/// identity of its own beyond its cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBundle {
    pub stats: DashboardStats,
    pub leaderboard: Vec<VideoSummary>,
}
