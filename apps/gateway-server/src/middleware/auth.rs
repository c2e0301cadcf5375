//! Basic authentication extractor for the gateway surface.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::future::{Ready, ready};

use pulse_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated caller identity.
///
/// Use this in handlers to require Basic authentication:
/// ```ignore
/// async fn protected_route(identity: BasicIdentity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BasicIdentity {
    pub username: String,
}

impl FromRequest for BasicIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<BasicIdentity, AppError> {
    let state = match req.app_data::<actix_web::web::Data<AppState>>() {
        Some(state) => state,
        None => {
            tracing::error!("AppState not found in app data");
            return Err(AuthError::InvalidHeader("server configuration error".to_string()).into());
        }
    };

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = header_value
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("not valid UTF-8".to_string()))?;

    // Parse "Basic <base64(username:password)>"
    let encoded = auth_str
        .strip_prefix("Basic ")
        .ok_or_else(|| AuthError::InvalidHeader("expected Basic scheme".to_string()))?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| AuthError::InvalidHeader("invalid base64".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthError::InvalidHeader("not valid UTF-8".to_string()))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AuthError::InvalidHeader("missing credential separator".to_string()))?;

    if !state.credentials.verify(username, password) {
        return Err(AuthError::InvalidCredentials.into());
    }

    let identity = BasicIdentity {
        username: username.to_string(),
    };
    tracing::debug!(username = %identity.username, "authenticated request");
    Ok(identity)
}
