use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware that logs every HTTP request
///
/// Records:
/// - Method and path
/// - Status code
/// - Response size, when the body reports an exact length
/// - Duration (ms)
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    use axum::body::HttpBody;

    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, %size, elapsed_ms, "request failed");
    } else if response.status().is_success() {
        tracing::info!(%method, %path, status, %size, elapsed_ms, "request");
    } else {
        tracing::warn!(%method, %path, status, %size, elapsed_ms, "request rejected");
    }

    response
}
