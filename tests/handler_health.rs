mod common;

use axum_test::TestServer;
use common::FakeBackend;
use redirect_gateway::domain::backend::BackendError;
use redirect_gateway::routes::app_router;
use std::sync::Arc;
use std::time::Duration;

fn server(backend: Arc<FakeBackend>) -> TestServer {
    let state = common::create_test_state(backend);
    TestServer::new(app_router(state, Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let backend = Arc::new(FakeBackend::new());
    let server = server(backend.clone());

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
    assert_eq!(backend.resolve_calls(), 0);
}

#[tokio::test]
async fn test_ready_endpoint() {
    let backend = Arc::new(FakeBackend::new());
    let server = server(backend.clone());

    let response = server.get("/ready").await;

    response.assert_status_ok();
    response.assert_text("OK");
    assert_eq!(backend.resolve_calls(), 0);
}

#[tokio::test]
async fn test_probes_ignore_backend_failure() {
    let backend = Arc::new(
        FakeBackend::new().failing_resolve(BackendError::Unavailable("down".to_string())),
    );
    let server = server(backend);

    server.get("/health").await.assert_status_ok();
    server.get("/ready").await.assert_status_ok();
}
