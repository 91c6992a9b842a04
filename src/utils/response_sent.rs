//! Signal fired once the server is done with a response.
//!
//! The redirect handler wraps its response body with [`NotifyOnDone`]. The
//! paired [`ResponseSent`] resolves when the body has been fully written or
//! dropped, whichever comes first, so background work can start strictly after
//! the caller has its answer. A client hanging up also fires the signal.

use axum::body::{Body, Bytes};
use axum::response::Response;
use http_body::{Body as HttpBody, Frame, SizeHint};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Creates a linked guard/signal pair.
pub fn channel() -> (SentGuard, ResponseSent) {
    let (tx, rx) = oneshot::channel();
    (SentGuard(Some(tx)), ResponseSent(rx))
}

/// Fires the paired [`ResponseSent`] when dropped.
#[derive(Debug)]
pub struct SentGuard(Option<oneshot::Sender<()>>);

impl Drop for SentGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.0.take() {
            let _ = tx.send(());
        }
    }
}

/// Resolves once the paired [`SentGuard`] fired or was dropped.
#[derive(Debug)]
pub struct ResponseSent(oneshot::Receiver<()>);

impl ResponseSent {
    pub async fn wait(self) {
        // A dropped sender means the response is gone as well.
        let _ = self.0.await;
    }
}

/// Body wrapper releasing a [`SentGuard`] at end of stream or on drop.
pub struct NotifyOnDone {
    inner: Body,
    guard: Option<SentGuard>,
}

impl NotifyOnDone {
    pub fn new(inner: Body, guard: SentGuard) -> Self {
        Self {
            inner,
            guard: Some(guard),
        }
    }
}

impl HttpBody for NotifyOnDone {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_frame(cx);
        if let Poll::Ready(None) = poll {
            this.guard.take();
        }
        poll
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// Replaces the body of `response` with one that releases `guard` when done.
pub fn attach(response: Response, guard: SentGuard) -> Response {
    let (parts, body) = response.into_parts();
    Response::from_parts(parts, Body::new(NotifyOnDone::new(body, guard)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_drop_guard_fires_signal() {
        let (guard, sent) = channel();
        drop(guard);

        tokio::time::timeout(Duration::from_secs(1), sent.wait())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_signal_pending_while_body_alive() {
        let (guard, sent) = channel();
        let body = NotifyOnDone::new(Body::empty(), guard);

        let waited = tokio::time::timeout(Duration::from_millis(50), sent.wait()).await;
        assert!(waited.is_err());

        drop(body);
    }

    #[tokio::test]
    async fn test_consuming_body_fires_signal() {
        let (guard, sent) = channel();
        let response = attach(Response::new(Body::from("done")), guard);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"done");

        tokio::time::timeout(Duration::from_secs(1), sent.wait())
            .await
            .unwrap();
    }
}
