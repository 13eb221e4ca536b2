//! # edusmart
//!
//! Axum host for the EduSmart client: server-side renders the Leptos app,
//! serves its static bundle, and exposes a health probe.

#![recursion_limit = "256"]

pub mod config;
pub mod error;
pub mod routes;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Bind the configured port and serve until the process is stopped.
///
/// # Errors
///
/// Returns a [`StartupError`] if the Leptos configuration cannot be loaded,
/// the port cannot be bound, or the server stops with an I/O error.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let options = routes::leptos_options(&config)?;
    let app = routes::app(options);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "edusmart listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
