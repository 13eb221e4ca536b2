//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server holds no session state; it renders the Leptos app for every
//! client route, serves the compiled WASM/CSS bundle under `/pkg`, and
//! answers a health probe. Sign-in and route guarding happen in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Non-UI endpoints.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos options from the Cargo metadata, with the configured site root.
///
/// # Errors
///
/// Returns [`StartupError::Leptos`] if the Leptos configuration cannot be
/// loaded.
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        options.site_root = root.as_str().into();
    }
    Ok(options)
}

/// Health probe + Leptos SSR for every client route + `/pkg` assets.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options);

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
