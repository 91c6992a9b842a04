//! HTTP layer: handlers and middleware.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect and probe handlers
//! - [`middleware`] - Tracing and timeout layers

pub mod handlers;
pub mod middleware;
