//! Per-request spans.
//!
//! Every request handled by the HTTP server runs inside an `http_request`
//! span carrying the method, matched route and request ID, so log lines from
//! the handler and the upstream fetch can be correlated.

use axum::{body::Body, extract::MatchedPath, http::Request};
use tracing::Span;

use crate::http::request::X_REQUEST_ID;

/// Build the span for an incoming request. Used by `TraceLayer::make_span_with`.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_else(|| request.uri().path());

    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        route = %route,
        request_id = %request_id,
    )
}
