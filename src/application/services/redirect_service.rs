//! Redirect orchestration service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, warn};

use crate::domain::backend::{BackendError, LinkBackend};
use crate::domain::click_worker::run_click_task;
use crate::domain::device_classifier::DeviceClassifier;
use crate::error::AppError;
use crate::utils::response_sent::ResponseSent;

/// Resolves aliases, applies the expiry policy and schedules click recording.
///
/// Holds the shared backend client and classifier; cheap to share across all
/// request handlers through an [`Arc`].
pub struct RedirectService {
    backend: Arc<dyn LinkBackend>,
    classifier: DeviceClassifier,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(backend: Arc<dyn LinkBackend>, classifier: DeviceClassifier) -> Self {
        Self {
            backend,
            classifier,
        }
    }

    /// Resolves `alias` to the URL the caller should be redirected to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is empty or unknown.
    /// Returns [`AppError::Expired`] if the link expired.
    /// Returns [`AppError::Internal`] if the backend is unavailable or fails.
    pub async fn resolve_target(&self, alias: &str) -> Result<String, AppError> {
        self.resolve_target_at(alias, Utc::now()).await
    }

    /// Same as [`Self::resolve_target`] with an explicit evaluation time.
    pub async fn resolve_target_at(
        &self,
        alias: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::not_found("Not Found"));
        }

        let lookup = match self.backend.resolve_alias(alias).await {
            Ok(lookup) => lookup,
            Err(BackendError::NotFound) => return Err(AppError::not_found("Not Found")),
            Err(e) => {
                error!(alias, error = %e, "Failed to resolve alias");
                return Err(e.into());
            }
        };

        if lookup.is_expired_at(now) {
            warn!(alias, "Attempted to access expired link");
            return Err(AppError::expired());
        }

        Ok(lookup.original_url)
    }

    /// Schedules recording of a click for `alias` on its own task.
    ///
    /// The task starts its work once `response_sent` resolves and is not tied
    /// to the lifetime of the request that scheduled it.
    pub fn schedule_click(&self, alias: String, user_agent: String, response_sent: ResponseSent) {
        tokio::spawn(run_click_task(
            self.backend.clone(),
            self.classifier.clone(),
            alias,
            user_agent,
            response_sent,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backend::MockLinkBackend;
    use crate::domain::entities::AliasLookupResult;
    use crate::domain::signatures::{SignatureDatabase, UaSignals};
    use chrono::Duration;

    struct UnknownDatabase;

    impl SignatureDatabase for UnknownDatabase {
        fn parse(&self, _user_agent: &str) -> UaSignals {
            UaSignals::unknown()
        }
    }

    fn service(backend: MockLinkBackend) -> RedirectService {
        RedirectService::new(
            Arc::new(backend),
            DeviceClassifier::new(Arc::new(UnknownDatabase)),
        )
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut backend = MockLinkBackend::new();
        backend
            .expect_resolve_alias()
            .withf(|alias| alias == "abc123")
            .times(1)
            .returning(|_| {
                Ok(AliasLookupResult::new(
                    "https://example.com/target".to_string(),
                    None,
                ))
            });

        let target = service(backend).resolve_target("abc123").await.unwrap();
        assert_eq!(target, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_empty_alias_skips_backend() {
        let mut backend = MockLinkBackend::new();
        backend.expect_resolve_alias().times(0);

        let result = service(backend).resolve_target("").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unknown_alias() {
        let mut backend = MockLinkBackend::new();
        backend
            .expect_resolve_alias()
            .times(1)
            .returning(|_| Err(BackendError::NotFound));

        let result = service(backend).resolve_target("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_backend_unavailable() {
        let mut backend = MockLinkBackend::new();
        backend
            .expect_resolve_alias()
            .times(1)
            .returning(|_| Err(BackendError::Unavailable("connection refused".to_string())));

        let result = service(backend).resolve_target("abc123").await;
        assert!(matches!(result, Err(AppError::Internal)));
    }

    #[tokio::test]
    async fn test_backend_internal_error() {
        let mut backend = MockLinkBackend::new();
        backend
            .expect_resolve_alias()
            .times(1)
            .returning(|_| Err(BackendError::Internal("boom".to_string())));

        let result = service(backend).resolve_target("abc123").await;
        assert!(matches!(result, Err(AppError::Internal)));
    }

    #[tokio::test]
    async fn test_expired_link() {
        let now = Utc::now();
        let mut backend = MockLinkBackend::new();
        backend.expect_resolve_alias().times(1).returning(move |_| {
            Ok(AliasLookupResult::new(
                "https://example.com".to_string(),
                Some(now - Duration::hours(1)),
            ))
        });

        let result = service(backend).resolve_target_at("old", now).await;
        assert!(matches!(result, Err(AppError::Expired)));
    }

    #[tokio::test]
    async fn test_expiry_at_now_counts_as_expired() {
        let now = Utc::now();
        let mut backend = MockLinkBackend::new();
        backend.expect_resolve_alias().times(1).returning(move |_| {
            Ok(AliasLookupResult::new(
                "https://example.com".to_string(),
                Some(now),
            ))
        });

        let result = service(backend).resolve_target_at("edge", now).await;
        assert!(matches!(result, Err(AppError::Expired)));
    }

    #[tokio::test]
    async fn test_future_expiry_redirects() {
        let now = Utc::now();
        let mut backend = MockLinkBackend::new();
        backend.expect_resolve_alias().times(1).returning(move |_| {
            Ok(AliasLookupResult::new(
                "https://example.com/later".to_string(),
                Some(now + Duration::days(1)),
            ))
        });

        let target = service(backend).resolve_target_at("later", now).await.unwrap();
        assert_eq!(target, "https://example.com/later");
    }
}
