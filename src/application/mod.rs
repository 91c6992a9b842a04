//! Application layer services implementing the redirect flow.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Alias resolution, expiry policy
//!   and click scheduling

pub mod services;
