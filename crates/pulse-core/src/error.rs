//! Gateway-level error types.

use thiserror::Error;

use crate::ports::UpstreamError;

/// Errors surfaced by facade operations.
///
/// Cache failures never appear here: an unreadable entry is a miss and a
/// failed write is logged and dropped, so the only way an operation fails
/// is the analyzer being unreachable or unintelligible.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Analyzer service unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamError),
}
