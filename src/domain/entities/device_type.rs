//! Device categories recorded with every click.

use std::fmt;

/// Coarse device category derived from a request's user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Bot,
    Mobile,
    Tablet,
    Desktop,
    Other,
}

impl DeviceType {
    /// Wire name sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Bot => "Bot",
            DeviceType::Mobile => "Mobile",
            DeviceType::Tablet => "Tablet",
            DeviceType::Desktop => "Desktop",
            DeviceType::Other => "Other",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
