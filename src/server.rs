//! HTTP server initialization and runtime setup.
//!
//! Handles signature database loading, the backend connection, and the Axum
//! server lifecycle including graceful shutdown.

use crate::application::services::RedirectService;
use crate::config::Config;
use crate::domain::device_classifier::DeviceClassifier;
use crate::infrastructure::grpc::BackendClient;
use crate::infrastructure::user_agent::UapSignatureDatabase;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::oneshot;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - User-agent signature database
/// - Backend gRPC connection
/// - Axum HTTP server
///
/// The backend connection is closed on every exit path once the listener has
/// stopped.
///
/// # Errors
///
/// Returns an error if:
/// - The signature database is missing or invalid
/// - The backend cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let database = UapSignatureDatabase::load(&config.regexes_path)
        .context("Failed to load user-agent signature database")?;
    let classifier = DeviceClassifier::new(Arc::new(database));

    let backend = Arc::new(
        BackendClient::connect(&config.backend_url(), config.backend_timeout)
            .await
            .context("Failed to connect to backend")?,
    );

    let result = serve(&config, backend.clone(), classifier).await;

    backend.close();
    result
}

async fn serve(
    config: &Config,
    backend: Arc<BackendClient>,
    classifier: DeviceClassifier,
) -> Result<()> {
    let redirect_service = Arc::new(RedirectService::new(backend, classifier));
    let state = AppState::new(redirect_service);

    let app = app_router(state, config.http_timeout);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let (signal_tx, signal_rx) = oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(());
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server => return joined?.map_err(Into::into),
        _ = signal_rx => {}
    }

    drain(server, config.shutdown_grace).await
}

/// Waits up to `grace` for in-flight requests, then aborts the server task.
async fn drain(
    mut server: tokio::task::JoinHandle<std::io::Result<()>>,
    grace: Duration,
) -> Result<()> {
    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("HTTP server stopped");
        }
        Err(_) => {
            tracing::warn!(
                "In-flight requests still running after {} grace period, aborting",
                humantime::format_duration(grace)
            );
            server.abort();
        }
    }
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        },
    }
}
