//! Server-level request timeout.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests running longer than `timeout` with `500`.
///
/// Resolve calls carry their own, usually shorter, deadline; this bounds
/// whatever else a request might wait on.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::INTERNAL_SERVER_ERROR, timeout)
}
