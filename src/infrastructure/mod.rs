//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`grpc`] - Backend client implementing [`crate::domain::backend::LinkBackend`]
//! - [`user_agent`] - Signature database implementing
//!   [`crate::domain::signatures::SignatureDatabase`]

pub mod grpc;
pub mod user_agent;
