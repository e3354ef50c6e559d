// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Reuses the caller's x-request-id or generates one for every HTTP request span

use http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation ID from the request, or a freshly generated one
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned)
}

/// Create a tracing span for an HTTP request; used as the `TraceLayer` span maker
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}
