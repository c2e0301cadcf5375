//! Cache key composition.
//!
//! Keys are derived from the operation name plus its significant
//! parameters, so two distinct queries never share an entry and identical
//! queries always land on the same one. An absent platform filter folds to
//! the canonical token "all" to keep the key space stable.

use crate::domain::TrendingQuery;

/// Fixed key for the parameterless dashboard operation.
pub const DASHBOARD_KEY: &str = "dashboard_data";

/// `trending:{sort_by}:{platform-or-"all"}:{page}:{limit}`
pub fn trending(query: &TrendingQuery) -> String {
    let platform = query.platform.as_deref().unwrap_or("all");
    format!(
        "trending:{}:{}:{}:{}",
        query.sort_by, platform, query.page, query.limit
    )
}

/// `trajectory:{video_id}`
pub fn trajectory(video_id: &str) -> String {
    format!("trajectory:{video_id}")
}
