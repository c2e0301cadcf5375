//! Analyzer service client.

mod http;

pub use http::{HttpAnalyzerClient, UpstreamConfig};
