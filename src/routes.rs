//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Liveness probe
//! - `GET  /ready`       - Readiness probe
//! - `GET  /`            - Empty alias, always `404`
//! - `GET  /{*alias}`    - Alias redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Server-level per-request timeout

use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on the time spent serving one request
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(health_handler))
        .route("/", get(root_handler))
        .route("/{*alias}", get(redirect_handler))
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer())
}
