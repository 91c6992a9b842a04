//! Detached click recording.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::backend::LinkBackend;
use crate::domain::click_event::ClickEvent;
use crate::domain::device_classifier::DeviceClassifier;
use crate::utils::response_sent::ResponseSent;

/// Records one click after its redirect response is done.
///
/// Runs as its own task, detached from the request that scheduled it: the
/// caller disconnecting does not cancel it. Failures are logged and dropped.
pub async fn run_click_task(
    backend: Arc<dyn LinkBackend>,
    classifier: DeviceClassifier,
    alias: String,
    user_agent: String,
    response_sent: ResponseSent,
) {
    response_sent.wait().await;

    let device_type = classifier.classify(&user_agent);
    let event = ClickEvent::new(alias, device_type);

    match backend.record_click(event.clone()).await {
        Ok(()) => debug!(alias = %event.alias, device_type = %event.device_type, "Click recorded"),
        Err(e) => error!(alias = %event.alias, error = %e, "Failed to record click"),
    }
}
