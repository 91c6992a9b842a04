//! gRPC implementation of [`LinkBackend`].

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use super::proto::{GetLinkStatsRequest, RecordClickRequest, ShortenerClient};
use crate::domain::backend::{BackendError, LinkBackend};
use crate::domain::click_event::ClickEvent;
use crate::domain::entities::AliasLookupResult;

impl From<tonic::Status> for BackendError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::NotFound => BackendError::NotFound,
            tonic::Code::Unavailable | tonic::Code::DeadlineExceeded | tonic::Code::Cancelled => {
                BackendError::Unavailable(status.message().to_string())
            }
            _ => BackendError::Internal(status.message().to_string()),
        }
    }
}

impl From<tonic::transport::Error> for BackendError {
    fn from(e: tonic::transport::Error) -> Self {
        BackendError::Unavailable(e.to_string())
    }
}

/// Client for the backend `Shortener` service.
///
/// One connection is established at startup and multiplexed by every
/// request and background task. Calls clone the underlying channel, so no
/// coordination is needed between callers.
pub struct BackendClient {
    client: RwLock<Option<ShortenerClient<Channel>>>,
    timeout: Duration,
}

impl BackendClient {
    /// Connects to the backend, waiting at most `timeout` for the connection.
    ///
    /// `address` may omit the scheme, in which case `http://` is assumed.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Unavailable`] if the address is invalid or the
    /// backend cannot be reached in time.
    pub async fn connect(address: &str, timeout: Duration) -> Result<Self, BackendError> {
        let endpoint = Endpoint::from_shared(with_scheme(address))?.connect_timeout(timeout);

        info!("Connecting to backend at {}", address);
        let channel = tokio::time::timeout(timeout, endpoint.connect())
            .await
            .map_err(|_| {
                BackendError::Unavailable(format!("timed out connecting to {address}"))
            })??;
        info!("Connected to backend");

        Ok(Self::from_channel(channel, timeout))
    }

    /// Wraps an existing channel. `timeout` bounds every resolve call.
    pub fn from_channel(channel: Channel, timeout: Duration) -> Self {
        Self {
            client: RwLock::new(Some(ShortenerClient::new(channel))),
            timeout,
        }
    }

    /// Releases the backend connection.
    ///
    /// Calls made afterwards fail with [`BackendError::Unavailable`].
    pub fn close(&self) {
        let released = match self.client.write() {
            Ok(mut guard) => guard.take().is_some(),
            Err(poisoned) => poisoned.into_inner().take().is_some(),
        };
        if released {
            info!("Backend connection closed");
        }
    }

    fn client(&self) -> Result<ShortenerClient<Channel>, BackendError> {
        self.client
            .read()
            .map_err(|_| BackendError::Internal("backend client lock poisoned".to_string()))?
            .clone()
            .ok_or_else(|| BackendError::Unavailable("backend connection closed".to_string()))
    }
}

#[async_trait]
impl LinkBackend for BackendClient {
    async fn resolve_alias(&self, alias: &str) -> Result<AliasLookupResult, BackendError> {
        let mut client = self.client()?;
        let request = GetLinkStatsRequest {
            alias: alias.to_string(),
        };

        let response = tokio::time::timeout(self.timeout, client.get_link_stats(request))
            .await
            .map_err(|_| BackendError::Unavailable("resolve deadline exceeded".to_string()))??
            .into_inner();

        debug!(alias, "Resolved alias");

        Ok(AliasLookupResult::new(
            response.original_url,
            response.expires_at.and_then(timestamp_to_utc),
        ))
    }

    async fn record_click(&self, event: ClickEvent) -> Result<(), BackendError> {
        let mut client = self.client().map_err(BackendError::into_internal)?;
        let request = RecordClickRequest {
            alias: event.alias,
            device_type: event.device_type.as_str().to_string(),
        };

        client
            .record_click(request)
            .await
            .map_err(|status| BackendError::from(status).into_internal())?;

        Ok(())
    }
}

/// Prefixes `http://` when `address` has no scheme.
fn with_scheme(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

/// Converts a protobuf timestamp, dropping values outside chrono's range.
fn timestamp_to_utc(ts: prost_types::Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::from_timestamp(ts.seconds, nanos)
}
