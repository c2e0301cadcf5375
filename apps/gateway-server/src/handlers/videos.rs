//! Video analytics handlers - the authenticated gateway surface.

use actix_web::{HttpResponse, web};

use pulse_core::domain::TrendingQuery;
use pulse_shared::dto::TrendingParams;

use crate::middleware::auth::BasicIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/videos/dashboard
pub async fn dashboard(
    state: web::Data<AppState>,
    _identity: BasicIdentity,
) -> AppResult<HttpResponse> {
    let bundle = state.analyzer.dashboard().await?;
    Ok(HttpResponse::Ok().json(bundle))
}

/// GET /api/v1/videos/trending
pub async fn trending(
    state: web::Data<AppState>,
    _identity: BasicIdentity,
    params: web::Query<TrendingParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();
    let query = TrendingQuery {
        sort_by: params.sort_by,
        platform: params.platform,
        page: params.page,
        limit: params.limit,
    };

    let page = state.analyzer.trending(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/v1/videos/video/{video_id}/trajectory
pub async fn trajectory(
    state: web::Data<AppState>,
    _identity: BasicIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let video_id = path.into_inner();
    let points = state.analyzer.trajectory(&video_id).await?;
    Ok(HttpResponse::Ok().json(points))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;

    use pulse_core::domain::{
        DashboardStats, Pagination, TrajectoryPoint, TrendingPage, TrendingQuery, VideoSummary,
    };
    use pulse_core::ports::{AnalyzerApi, UpstreamError};
    use pulse_core::service::AnalyzerService;
    use pulse_infra::auth::StaticCredentialVerifier;
    use pulse_infra::cache::InMemoryCache;

    use crate::state::AppState;

    struct StubAnalyzer {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl AnalyzerApi for StubAnalyzer {
        async fn fetch_stats(&self) -> Result<DashboardStats, UpstreamError> {
            if self.fail {
                return Err(UpstreamError::Connection("connection refused".to_string()));
            }
            Ok(DashboardStats {
                total_assets: 7,
                status: "NOMINAL".to_string(),
            })
        }

        async fn fetch_leaderboard(&self) -> Result<Vec<VideoSummary>, UpstreamError> {
            if self.fail {
                return Err(UpstreamError::Connection("connection refused".to_string()));
            }
            Ok(vec![])
        }

        async fn fetch_trending(
            &self,
            query: &TrendingQuery,
        ) -> Result<TrendingPage, UpstreamError> {
            Ok(TrendingPage {
                data: vec![],
                pagination: Pagination {
                    total: 0,
                    page: query.page,
                    limit: query.limit,
                },
            })
        }

        async fn fetch_trajectory(
            &self,
            _video_id: &str,
        ) -> Result<Vec<TrajectoryPoint>, UpstreamError> {
            Ok(vec![])
        }
    }

    fn state(fail: bool) -> AppState {
        AppState {
            analyzer: Arc::new(AnalyzerService::new(
                Arc::new(InMemoryCache::new()),
                Arc::new(StubAnalyzer { fail }),
            )),
            credentials: Arc::new(StaticCredentialVerifier::new("admin", "secret")),
        }
    }

    fn basic_header(user: &str, pass: &str) -> (&'static str, String) {
        let encoded = BASE64.encode(format!("{user}:{pass}"));
        ("Authorization", format!("Basic {encoded}"))
    }

    #[actix_web::test]
    async fn missing_credentials_yield_a_challenge() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/videos/dashboard")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get("WWW-Authenticate").unwrap(),
            "Basic realm=\"gateway\""
        );
    }

    #[actix_web::test]
    async fn wrong_credentials_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/videos/trending")
                .insert_header(basic_header("admin", "wrong"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_authorization_header_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/videos/dashboard")
                .insert_header(("Authorization", "Bearer not-basic"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn authenticated_dashboard_returns_the_bundle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/videos/dashboard")
                .insert_header(basic_header("admin", "secret"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["stats"]["total_assets"], 7);
        assert!(body["leaderboard"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn upstream_failure_maps_to_service_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(true)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/videos/dashboard")
                .insert_header(basic_header("admin", "secret"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Analyzer service unavailable");
        // the transport-level cause is not leaked
        assert!(!body.to_string().contains("connection refused"));
    }

    #[actix_web::test]
    async fn health_needs_no_credentials() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}
