//! Shared numeric constants for the compass crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Closest the camera may get to the view plane (fully zoomed in).
pub const DEFAULT_NEAR_Z: f64 = 2.0;

/// Farthest the camera may get from the view plane (fully zoomed out).
pub const DEFAULT_FAR_Z: f64 = 10_000.0;

/// Change in camera z per unit of wheel `deltaY`.
pub const DEFAULT_ZOOM_STEP: f64 = 0.06;

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view, in degrees, used when no camera is supplied.
pub const DEFAULT_FOV_DEG: f64 = 30.0;

/// Starting distance from the view plane.
pub const DEFAULT_CAMERA_Z: f64 = 300.0;
