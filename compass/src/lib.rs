//! Viewport navigation for a perspective camera looking down the z axis.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! three.js scene. It owns the camera's pan and zoom: mouse-wheel zoom that
//! keeps the point under the cursor fixed, click-and-drag panning, and the
//! conversions between canvas pixels and scene coordinates the host needs to
//! place objects. The host JavaScript layer owns the scene and render loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bridge`] | `Compass` JS class and logging setup |
//! | [`controller`] | Testable [`controller::ViewportController`]: queries and handlers |
//! | [`listeners`] | DOM listener wiring and teardown |
//! | [`camera`] | Camera trait and a plain in-memory camera |
//! | [`three`] | Bindings to a host `THREE.PerspectiveCamera` |
//! | [`surface`] | Render surface size |
//! | [`space`] | Coordinate space types |
//! | [`input`] | Input event types and the drag state machine |
//! | [`config`] | Zoom clamp range and step |
//! | [`error`] | Error type |
//! | [`consts`] | Defaults (zoom limits, step, camera) |

pub mod bridge;
pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod input;
pub mod listeners;
pub mod space;
pub mod surface;
pub mod three;
