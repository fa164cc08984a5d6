//! Error types for the fallible edges of the crate.
//!
//! Coordinate queries and the interaction handlers never fail. Errors only
//! come from configuration and from talking to the browser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompassError {
    #[error("invalid zoom range: near_z {near_z} must be positive and below far_z {far_z}")]
    InvalidZoomRange { near_z: f64, far_z: f64 },

    #[error("invalid zoom step: {0} (must be positive and finite)")]
    InvalidZoomStep(f64),

    #[error("zoom config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("no global window available")]
    NoWindow,

    #[error("failed to attach {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
