//! Domain records - the typed transport shapes exchanged with the analyzer.

mod dashboard;
mod trending;
mod video;

pub use dashboard::{DashboardBundle, DashboardStats};
pub use trending::{Pagination, TrendingPage, TrendingQuery};
pub use video::{Author, EngagementStats, TrajectoryPoint, VideoSummary};
