//! Error handling - RFC 7807 compliant responses.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use pulse_core::error::GatewayError;
use pulse_core::ports::AuthError;
use pulse_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
///
/// The underlying cause stays in the logs; response bodies carry one
/// human-readable line and nothing else.
#[derive(Debug)]
pub enum AppError {
    Unauthorized(AuthError),
    UpstreamUnavailable(GatewayError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized(cause) => write!(f, "Unauthorized: {}", cause),
            AppError::UpstreamUnavailable(cause) => write!(f, "{}", cause),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(cause) => {
                tracing::debug!(%cause, "rejected credentials");
                HttpResponse::Unauthorized()
                    .insert_header((header::WWW_AUTHENTICATE, r#"Basic realm="gateway""#))
                    .json(ErrorResponse::unauthorized().with_detail("Provide valid credentials"))
            }
            AppError::UpstreamUnavailable(cause) => {
                // root cause goes to the logs, never into the body
                tracing::error!(%cause, "analyzer request failed");
                HttpResponse::ServiceUnavailable().json(
                    ErrorResponse::service_unavailable()
                        .with_detail("Analyzer service unavailable"),
                )
            }
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::UpstreamUnavailable(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
