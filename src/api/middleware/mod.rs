//! HTTP middleware for request processing.

pub mod timeout;
pub mod tracing;
