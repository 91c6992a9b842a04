//! User-agent to device category classification.

use std::sync::Arc;

use crate::domain::entities::DeviceType;
use crate::domain::signatures::{SignatureDatabase, UNKNOWN_FAMILY, UaSignals};

/// User-agent family reported for crawlers and other automated clients.
const SPIDER_FAMILY: &str = "Spider";

/// Device families identifying mobile phones.
const MOBILE_FAMILIES: &[&str] = &["iPhone", "Generic Smartphone", "Pixel", "Android"];

/// Device families identifying tablets.
const TABLET_FAMILIES: &[&str] = &["iPad", "Generic Tablet"];

/// Maps raw user-agent strings to a [`DeviceType`].
///
/// Pure and deterministic for a given signature database; safe to share
/// between any number of tasks.
#[derive(Clone)]
pub struct DeviceClassifier {
    database: Arc<dyn SignatureDatabase>,
}

impl DeviceClassifier {
    pub fn new(database: Arc<dyn SignatureDatabase>) -> Self {
        Self { database }
    }

    /// Classifies a raw user-agent string.
    pub fn classify(&self, user_agent: &str) -> DeviceType {
        classify_signals(&self.database.parse(user_agent))
    }

    /// Raw signals for a user agent, as reported by the database.
    pub fn signals(&self, user_agent: &str) -> UaSignals {
        self.database.parse(user_agent)
    }
}

/// Applies the classification rules, first match wins:
///
/// 1. spider user agent → `Bot`
/// 2. phone device family → `Mobile`
/// 3. tablet device family → `Tablet`
/// 4. OS and device family both identified → `Desktop`
/// 5. otherwise → `Other`
pub fn classify_signals(signals: &UaSignals) -> DeviceType {
    if signals.user_agent_family == SPIDER_FAMILY {
        return DeviceType::Bot;
    }

    let device = signals.device_family.as_str();
    if MOBILE_FAMILIES.contains(&device) {
        DeviceType::Mobile
    } else if TABLET_FAMILIES.contains(&device) {
        DeviceType::Tablet
    } else if signals.os_family != UNKNOWN_FAMILY && device != UNKNOWN_FAMILY {
        DeviceType::Desktop
    } else {
        DeviceType::Other
    }
}
