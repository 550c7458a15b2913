//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Log one line per request.
///
/// Routes are logged by their pattern (`/api/templates/{id}`) so template ids
/// do not fan out into distinct log keys; unmatched requests fall back to the
/// raw path.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %route, status, duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        info!(%method, %route, status, duration_ms, "Request rejected");
    } else {
        info!(%method, %route, status, duration_ms, "Request completed");
    }

    response
}
