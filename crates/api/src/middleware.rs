use std::time::Instant;

use axum::{middleware::Next, response::Response};

/// Log one line per request with its outcome and latency.
pub async fn trace_requests(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;

    let status = res.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if res.status().is_server_error() {
        tracing::warn!(%method, path = %path, status, elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, path = %path, status, elapsed_ms, "request");
    }

    res
}
