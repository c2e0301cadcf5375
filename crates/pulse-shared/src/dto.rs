//! Query parameter types for the inbound API.

use serde::Deserialize;

/// Query string accepted by the trending listing.
///
/// Defaults mirror what the analyzer assumes when a parameter is absent;
/// values are forwarded without local range checks.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingParams {
    #[serde(default = "default_sort")]
    pub sort_by: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_sort() -> String {
    "newest".to_string()
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_an_empty_query() {
        let params: TrendingParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.sort_by, "newest");
        assert_eq!(params.platform, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let params: TrendingParams = serde_json::from_value(serde_json::json!({
            "sort_by": "virality",
            "platform": "tiktok",
            "page": 3,
            "limit": 50
        }))
        .unwrap();
        assert_eq!(params.sort_by, "virality");
        assert_eq!(params.platform.as_deref(), Some("tiktok"));
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 50);
    }
}
