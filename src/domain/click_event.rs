//! Click event model for asynchronous click tracking.

use crate::domain::entities::DeviceType;

/// A classified click, ready to be sent to the backend.
///
/// Produced only after a redirect has been served for a found, non-expired
/// alias. Delivered at most once: there is no local queue or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub alias: String,
    pub device_type: DeviceType,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let event = ClickEvent::new("abc123".to_string(), DeviceType::Mobile);
    /// ```
    pub fn new(alias: String, device_type: DeviceType) -> Self {
        Self { alias, device_type }
    }
}
