//! # Redirect Gateway
//!
//! Resolves short aliases through a gRPC backend and redirects callers,
//! recording a classified click for every served redirect without making the
//! caller wait for it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, backend contract, device classification
//! - **Application Layer** ([`application`]) - Redirect orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - gRPC client and signature database
//! - **API Layer** ([`api`]) - HTTP handlers and middleware
//!
//! ## Request Flow
//!
//! 1. `GET /{alias}` resolves the alias through the backend
//! 2. Unknown or expired aliases answer `404`, backend failures `500`
//! 3. Found aliases answer `302 Found`
//! 4. After the response is done, a detached task classifies the user agent and
//!    records the click; its failures are only logged
//!
//! ## Quick Start
//!
//! ```bash
//! # Signature database from https://github.com/ua-parser/uap-core
//! curl -o assets/regexes.yaml \
//!     https://raw.githubusercontent.com/ua-parser/uap-core/master/regexes.yaml
//!
//! export GRPC_BACKEND_ADDRESS="localhost:50051"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::backend::{BackendError, LinkBackend};
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::device_classifier::DeviceClassifier;
    pub use crate::domain::entities::{AliasLookupResult, DeviceType};
    pub use crate::domain::signatures::{SignatureDatabase, UaSignals};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
