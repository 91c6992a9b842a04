//! User-agent signature database capability.

/// Family name the signature database reports when it cannot identify a value.
pub const UNKNOWN_FAMILY: &str = "Other";

/// Signals extracted from a raw user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UaSignals {
    pub user_agent_family: String,
    pub device_family: String,
    pub os_family: String,
}

impl UaSignals {
    pub fn new(
        user_agent_family: impl Into<String>,
        device_family: impl Into<String>,
        os_family: impl Into<String>,
    ) -> Self {
        Self {
            user_agent_family: user_agent_family.into(),
            device_family: device_family.into(),
            os_family: os_family.into(),
        }
    }

    /// Signals for a user agent nothing could be learned from.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FAMILY, UNKNOWN_FAMILY, UNKNOWN_FAMILY)
    }
}

/// A loaded, immutable ruleset interpreting user-agent strings.
///
/// Loaded once at startup and only read afterwards.
///
/// # Implementations
///
/// - [`crate::infrastructure::user_agent::UapSignatureDatabase`] - uap-core `regexes.yaml`
pub trait SignatureDatabase: Send + Sync {
    fn parse(&self, user_agent: &str) -> UaSignals;
}
