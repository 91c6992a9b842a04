#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redirect_gateway::application::services::RedirectService;
use redirect_gateway::domain::backend::{BackendError, LinkBackend};
use redirect_gateway::domain::click_event::ClickEvent;
use redirect_gateway::domain::device_classifier::DeviceClassifier;
use redirect_gateway::domain::entities::AliasLookupResult;
use redirect_gateway::domain::signatures::{SignatureDatabase, UaSignals};
use redirect_gateway::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

/// In-memory stand-in for the backend service.
#[derive(Default)]
pub struct FakeBackend {
    links: Mutex<HashMap<String, AliasLookupResult>>,
    resolve_error: Mutex<Option<BackendError>>,
    click_error: Mutex<Option<BackendError>>,
    click_delay: Mutex<Option<Duration>>,
    resolve_calls: AtomicUsize,
    clicks: Mutex<Option<mpsc::UnboundedSender<ClickEvent>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(self, alias: &str, url: &str, expires_at: Option<DateTime<Utc>>) -> Self {
        self.links.lock().unwrap().insert(
            alias.to_string(),
            AliasLookupResult::new(url.to_string(), expires_at),
        );
        self
    }

    pub fn failing_resolve(self, error: BackendError) -> Self {
        *self.resolve_error.lock().unwrap() = Some(error);
        self
    }

    pub fn failing_clicks(self, error: BackendError) -> Self {
        *self.click_error.lock().unwrap() = Some(error);
        self
    }

    pub fn slow_clicks(self, delay: Duration) -> Self {
        *self.click_delay.lock().unwrap() = Some(delay);
        self
    }

    /// Clicks accepted or attempted by the backend, in arrival order.
    pub fn click_feed(&self) -> mpsc::UnboundedReceiver<ClickEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.clicks.lock().unwrap() = Some(tx);
        rx
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkBackend for FakeBackend {
    async fn resolve_alias(&self, alias: &str) -> Result<AliasLookupResult, BackendError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.resolve_error.lock().unwrap().clone() {
            return Err(error);
        }

        self.links
            .lock()
            .unwrap()
            .get(alias)
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    async fn record_click(&self, event: ClickEvent) -> Result<(), BackendError> {
        let delay = *self.click_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(tx) = self.clicks.lock().unwrap().as_ref() {
            let _ = tx.send(event);
        }

        match self.click_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Signature database keyed by exact user-agent strings.
pub struct StubSignatures {
    known: HashMap<String, UaSignals>,
}

impl StubSignatures {
    pub fn new() -> Self {
        let mut known = HashMap::new();
        known.insert(
            "Googlebot/2.1".to_string(),
            UaSignals::new("Spider", "Spider", "Other"),
        );
        known.insert(
            "Googlebot-iPhone".to_string(),
            UaSignals::new("Spider", "iPhone", "iOS"),
        );
        known.insert(
            "iPhone Safari".to_string(),
            UaSignals::new("Mobile Safari", "iPhone", "iOS"),
        );
        known.insert(
            "iPad Safari".to_string(),
            UaSignals::new("Mobile Safari", "iPad", "iOS"),
        );
        known.insert(
            "Mac Safari".to_string(),
            UaSignals::new("Safari", "Mac", "Mac OS X"),
        );
        Self { known }
    }
}

impl SignatureDatabase for StubSignatures {
    fn parse(&self, user_agent: &str) -> UaSignals {
        self.known
            .get(user_agent)
            .cloned()
            .unwrap_or_else(UaSignals::unknown)
    }
}

pub fn create_test_state(backend: Arc<FakeBackend>) -> AppState {
    let classifier = DeviceClassifier::new(Arc::new(StubSignatures::new()));
    let redirect_service = Arc::new(RedirectService::new(backend, classifier));
    AppState::new(redirect_service)
}

/// Waits for the next recorded click, failing the test after two seconds.
pub async fn next_click(rx: &mut mpsc::UnboundedReceiver<ClickEvent>) -> ClickEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for click")
        .expect("click feed closed")
}

/// Asserts that no click arrives within a short window.
pub async fn assert_no_click(rx: &mut mpsc::UnboundedReceiver<ClickEvent>) {
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err(), "unexpected click recorded");
}
