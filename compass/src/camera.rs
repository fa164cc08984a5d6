#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{DEFAULT_CAMERA_Z, DEFAULT_FOV_DEG};

/// A position in scene space. `z` is the distance from the view plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The camera contract the viewport controller drives.
///
/// The camera looks down its local -Z axis at a planar scene. The controller
/// only reads the projection parameters and moves the camera; it never creates
/// or destroys one.
pub trait ViewCamera {
    /// Vertical field of view in degrees.
    fn fov_deg(&self) -> f64;

    /// Width / height of the projection.
    fn aspect(&self) -> f64;

    fn position(&self) -> Vec3;

    /// Move along the camera's local X axis.
    fn translate_x(&mut self, distance: f64);

    /// Move along the camera's local Y axis.
    fn translate_y(&mut self, distance: f64);

    /// Set the distance from the view plane.
    fn set_z(&mut self, z: f64);
}

/// Plain perspective camera with an unrotated orientation, so its local
/// axes coincide with the scene axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub position: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            aspect: 1.0,
            position: Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z),
        }
    }
}

impl PerspectiveCamera {
    #[must_use]
    pub fn new(fov_deg: f64, aspect: f64, position: Vec3) -> Self {
        Self { fov_deg, aspect, position }
    }
}

impl ViewCamera for PerspectiveCamera {
    fn fov_deg(&self) -> f64 {
        self.fov_deg
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate_x(&mut self, distance: f64) {
        self.position.x += distance;
    }

    fn translate_y(&mut self, distance: f64) {
        self.position.y += distance;
    }

    fn set_z(&mut self, z: f64) {
        self.position.z = z;
    }
}
