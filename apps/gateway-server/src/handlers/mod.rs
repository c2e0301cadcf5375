//! HTTP handlers and route configuration.

mod health;
mod videos;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public liveness probe
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/videos")
                    .route("/dashboard", web::get().to(videos::dashboard))
                    .route("/trending", web::get().to(videos::trending))
                    .route(
                        "/video/{video_id}/trajectory",
                        web::get().to(videos::trajectory),
                    ),
            ),
        );
}
