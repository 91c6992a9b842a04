//! Liveness and readiness probes.

use axum::http::StatusCode;

/// Always answers `200 OK`.
///
/// # Endpoints
///
/// `GET /health`, `GET /ready`
///
/// The backend is not consulted: a failing backend surfaces as `500` on
/// redirects, not as an unhealthy gateway.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
