//! Server startup and shutdown.
//!
//! `run_server` builds the router from the loaded configuration, binds the
//! listener and serves until Ctrl+C or SIGTERM arrives.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `addr` - The address to bind the server to (e.g., "127.0.0.1:8000")
///
/// # Errors
///
/// Returns an error if the CORS origins cannot be turned into header values,
/// if binding fails, or if the server stops with an I/O error.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting healthcors server...");

    let app = routes::create_router(&config.cors)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!(origins = ?config.cors.allowed_origins, "CORS allowed origins");

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails, since the process could then
/// never shut down gracefully.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
