//! Server module
//!
//! Axum router for the Twilio webhooks and the listener loop.

pub mod handlers;

use crate::config::Config;
use crate::notify::Notifier;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        Self { config, notifier }
    }
}

/// Build the webhook router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/call/", post(handlers::call_request))
        .route("/call/action/", post(handlers::dial_action))
        .route("/voicemail", post(handlers::voicemail))
        .route("/status", post(handlers::status))
        .route("/prompt/{file}", get(handlers::prompt))
        .with_state(state)
}

/// Serve the webhooks on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening for Twilio webhooks");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
