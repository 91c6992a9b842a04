//! Contract of the remote lookup/analytics backend.

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::AliasLookupResult;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by backend calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend does not know the alias.
    #[error("alias not found")]
    NotFound,

    /// Connection refused, timed out, or the connection was closed.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure.
    #[error("backend error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Collapses a failure into [`BackendError::Internal`].
    ///
    /// Click recording does not distinguish failure kinds.
    pub fn into_internal(self) -> Self {
        match self {
            BackendError::Internal(_) => self,
            BackendError::NotFound => BackendError::Internal("alias not found".to_string()),
            BackendError::Unavailable(reason) => BackendError::Internal(reason),
        }
    }
}

/// Remote service owning alias mappings and click storage.
///
/// Implementations are shared by every concurrent request and background
/// task, so they must be safe to call concurrently without external locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::grpc::BackendClient`] - gRPC client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// Resolves an alias to its destination.
    ///
    /// `alias` is never empty; callers reject empty aliases first.
    ///
    /// # Errors
    ///
    /// - [`BackendError::NotFound`] if the alias does not exist
    /// - [`BackendError::Unavailable`] on connection failures and timeouts
    /// - [`BackendError::Internal`] on anything else
    async fn resolve_alias(&self, alias: &str) -> Result<AliasLookupResult, BackendError>;

    /// Records a classified click.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`BackendError::Internal`].
    async fn record_click(&self, event: ClickEvent) -> Result<(), BackendError>;
}
