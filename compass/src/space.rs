//! Coordinate spaces.
//!
//! Every space the controller converts between has its own type so a pixel
//! position cannot be passed where a scene coordinate is expected:
//!
//! | Type | Space |
//! |------|-------|
//! | [`SurfacePixel`] | CSS pixels on the render surface, origin top-left, y down |
//! | [`SignedPercent`] | Surface normalized to `[-1, 1]`, origin at centre, y up |
//! | [`AbsPercent`] | Surface normalized to `[0, 1]`, x from the left, y from the bottom |
//! | [`ScenePoint`] | Absolute scene coordinates on the view plane |
//! | [`SceneOffset`] | Scene-unit displacement, independent of camera position |

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

/// A position on the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePixel {
    pub x: f64,
    pub y: f64,
}

impl SurfacePixel {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a viewport (client) position to surface pixels given the
    /// surface's top-left corner in the same viewport.
    #[must_use]
    pub fn from_client(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self { x: client_x - left, y: client_y - top }
    }
}

/// Surface position normalized to `[-1, 1]` on both axes, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignedPercent {
    pub x: f64,
    pub y: f64,
}

impl SignedPercent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Surface position normalized to `[0, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AbsPercent {
    pub x: f64,
    pub y: f64,
}

impl AbsPercent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An absolute point on the scene's view plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement that moves `other` onto `self`.
    #[must_use]
    pub fn offset_from(self, other: ScenePoint) -> SceneOffset {
        SceneOffset { x: self.x - other.x, y: self.y - other.y }
    }
}

/// A displacement in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneOffset {
    pub x: f64,
    pub y: f64,
}

impl SceneOffset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement that moves `other` onto `self`.
    #[must_use]
    pub fn offset_from(self, other: SceneOffset) -> SceneOffset {
        SceneOffset { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Half the visible width and height of the view plane at some distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HalfExtents {
    pub half_width: f64,
    pub half_height: f64,
}

impl HalfExtents {
    #[must_use]
    pub fn width(self) -> f64 {
        self.half_width * 2.0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.half_height * 2.0
    }
}

/// Scene-space rectangle currently visible through the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl WorldBounds {
    /// Whether `point` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: ScenePoint) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}
