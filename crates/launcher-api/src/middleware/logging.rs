//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info};

/// Logs method, path, status and duration. Static asset hits go to `debug`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    if path.starts_with("/api") {
        info!(%method, %path, status, duration_ms, "HTTP request");
    } else {
        debug!(%method, %path, status, duration_ms, "Static request");
    }

    response
}
