//! Origin admission: only browsers on this machine (or non-browser clients
//! that send no `Origin`) may talk to the API.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::errors::AppError;

const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]", "::1"];

/// True when `origin` is a URL whose host is the local machine.
pub fn is_local_origin(origin: &str) -> bool {
    let Ok(uri) = origin.parse::<Uri>() else {
        return false;
    };
    if uri.scheme().is_none() {
        return false;
    }
    match uri.host() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            LOCAL_HOSTS.contains(&host.as_str()) || host.ends_with(".localhost")
        }
        None => false,
    }
}

/// Rejects requests carrying a non-local `Origin` before they reach a handler.
/// Runs outside the CORS layer so foreign preflights are refused too.
pub async fn admit_origin(req: Request, next: Next) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let admitted = origin.to_str().map(is_local_origin).unwrap_or(false);
        if !admitted {
            warn!("Rejected request from origin {:?} to {}", origin, req.uri());
            return Err(AppError::CorsRejected);
        }
    }
    Ok(next.run(req).await)
}

/// Response headers for admitted cross-origin requests.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().map(is_local_origin).unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
