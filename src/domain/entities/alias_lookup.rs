//! Result of resolving an alias through the backend.

use chrono::{DateTime, Utc};

/// Destination of a short alias as reported by the backend.
///
/// Built fresh for every request and dropped once the redirect decision is
/// made. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasLookupResult {
    /// Redirect target, forwarded verbatim.
    pub original_url: String,
    /// `None` means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AliasLookupResult {
    pub fn new(original_url: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            original_url,
            expires_at,
        }
    }

    /// Returns true if the link expired at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }
}
