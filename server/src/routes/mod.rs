//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is a static bundle: the page, the wasm-bindgen output for the
//! compass crate, and the three.js scene that drives it. Everything except
//! `/healthz` is served from the configured static directory, with
//! `index.html` answering for directory paths.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub fn app(config: &ServerConfig) -> Router {
    let assets = ServeDir::new(&config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
