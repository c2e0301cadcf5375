use serde::{Deserialize, Serialize};

use super::VideoSummary;

/// Paging echo: caller intent plus the analyzer-known total.
///
/// The gateway forwards totals verbatim and never computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// One page of the trending listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingPage {
    pub data: Vec<VideoSummary>,
    pub pagination: Pagination,
}

/// Parameters of a trending query, forwarded verbatim to the analyzer.
/// Range enforcement on page and limit is the analyzer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    pub sort_by: String,
    pub platform: Option<String>,
    pub page: i64,
    pub limit: i64,
}
