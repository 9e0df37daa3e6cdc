//! Router assembly.
//!
//! Every site page is server-rendered by Leptos from the route list the
//! client declares. Compiled WASM/CSS lives under `/pkg`; anything the route
//! list does not know falls through to `file_and_error_handler`, which
//! renders the shell so the client router can show its Not Found page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::app::{App, shell};

use crate::error::ServerError;

/// Build the full application router.
///
/// # Errors
///
/// Returns [`ServerError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}
