//! Viewport controller: coordinate queries plus the zoom and drag handlers.
//!
//! The controller is generic over the camera and the surface so the same
//! logic drives a JS `THREE.PerspectiveCamera` in the browser and a plain
//! [`PerspectiveCamera`](crate::camera::PerspectiveCamera) in tests.
//!
//! All queries derive from the perspective frustum: at distance `z` a camera
//! with vertical field of view `fov` sees a view plane `2 * tan(fov / 2) * z`
//! tall and `aspect` times as wide. Surface pixels are mapped into that plane
//! through the normalized percent spaces in [`crate::space`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::camera::ViewCamera;
use crate::config::ZoomConfig;
use crate::input::{Action, DragState, PointerInput, WheelInput};
use crate::space::{AbsPercent, HalfExtents, SceneOffset, ScenePoint, SignedPercent, SurfacePixel, WorldBounds};
use crate::surface::RenderSurface;

pub struct ViewportController<C, S> {
    camera: C,
    surface: S,
    zoom: ZoomConfig,
    drag: DragState,
}

impl<C: ViewCamera, S: RenderSurface> ViewportController<C, S> {
    #[must_use]
    pub fn new(camera: C, surface: S) -> Self {
        Self::with_zoom_config(camera, surface, ZoomConfig::default())
    }

    #[must_use]
    pub fn with_zoom_config(camera: C, surface: S, zoom: ZoomConfig) -> Self {
        Self { camera, surface, zoom, drag: DragState::Idle }
    }

    // --- Accessors ---

    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom
    }

    /// Replace the zoom clamp range and step. Takes effect on the next wheel event.
    pub fn set_zoom_config(&mut self, zoom: ZoomConfig) {
        self.zoom = zoom;
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    // --- Frustum ---

    /// Half-extents of the visible view plane at distance `z`.
    #[must_use]
    pub fn bounds_at_z(&self, z: f64) -> HalfExtents {
        let half_height = (self.camera.fov_deg().to_radians() / 2.0).tan() * z;
        HalfExtents { half_width: half_height * self.camera.aspect(), half_height }
    }

    /// Half-extents at the camera's current distance.
    #[must_use]
    pub fn bounds_at_current_z(&self) -> HalfExtents {
        self.bounds_at_z(self.camera.position().z)
    }

    /// Scene rectangle visible at the camera's current distance.
    #[must_use]
    pub fn world_bounds_at_current_z(&self) -> WorldBounds {
        let pos = self.camera.position();
        let half = self.bounds_at_z(pos.z);
        WorldBounds {
            min_x: pos.x - half.half_width,
            max_x: pos.x + half.half_width,
            min_y: pos.y - half.half_height,
            max_y: pos.y + half.half_height,
        }
    }

    // --- From percent ---

    /// Signed percent to surface pixels.
    #[must_use]
    pub fn surface_percent_to_world(&self, percent: SignedPercent) -> SurfacePixel {
        SurfacePixel {
            x: self.surface.pixel_width() * (percent.x + 1.0) / 2.0,
            y: -self.surface.pixel_height() * (percent.y - 1.0) / 2.0,
        }
    }

    /// Signed percent to a scene offset from the view centre at the current z.
    #[must_use]
    pub fn percent_to_surface_offset(&self, percent: SignedPercent) -> SceneOffset {
        let half = self.bounds_at_current_z();
        SceneOffset { x: half.half_width * percent.x, y: half.half_height * percent.y }
    }

    // --- From surface pixels ---

    /// Surface pixels to signed percent, y flipped to point up.
    #[must_use]
    pub fn world_to_surface_percent(&self, pixel: SurfacePixel) -> SignedPercent {
        SignedPercent {
            x: (pixel.x / self.surface.pixel_width()) * 2.0 - 1.0,
            y: -(pixel.y / self.surface.pixel_height()) * 2.0 + 1.0,
        }
    }

    /// Surface pixels to unsigned percent; y is measured up from the bottom edge.
    #[must_use]
    pub fn world_to_surface_abs_percent(&self, pixel: SurfacePixel) -> AbsPercent {
        AbsPercent {
            x: pixel.x / self.surface.pixel_width(),
            y: 1.0 - pixel.y / self.surface.pixel_height(),
        }
    }

    /// Scene point under a surface pixel at the current camera distance.
    #[must_use]
    pub fn world_to_surface(&self, pixel: SurfacePixel) -> ScenePoint {
        self.world_to_surface_at_z(pixel, self.camera.position().z)
    }

    /// Scene point under a surface pixel if the camera were at distance `z`.
    #[must_use]
    pub fn world_to_surface_at_z(&self, pixel: SurfacePixel, z: f64) -> ScenePoint {
        let percent = self.world_to_surface_percent(pixel);
        let pos = self.camera.position();
        let half = self.bounds_at_z(z);
        ScenePoint { x: pos.x + half.half_width * percent.x, y: pos.y + half.half_height * percent.y }
    }

    /// Scene offset of a surface pixel from the view's bottom-left corner at
    /// the current distance. Independent of camera x/y.
    #[must_use]
    pub fn world_to_surface_abs(&self, pixel: SurfacePixel) -> SceneOffset {
        self.world_to_surface_abs_at_z(pixel, self.camera.position().z)
    }

    #[must_use]
    pub fn world_to_surface_abs_at_z(&self, pixel: SurfacePixel, z: f64) -> SceneOffset {
        let percent = self.world_to_surface_abs_percent(pixel);
        let half = self.bounds_at_z(z);
        SceneOffset { x: half.width() * percent.x, y: half.height() * percent.y }
    }

    // --- Input events ---

    /// Zoom towards or away from the pointer, keeping the scene point under
    /// it fixed. Ignored while dragging.
    pub fn on_wheel(&mut self, wheel: WheelInput) -> Action {
        if self.drag.is_active() {
            log::trace!("wheel ignored while dragging");
            return Action::None;
        }
        if !wheel.delta_y.is_finite() {
            return Action::None;
        }
        let current_z = self.camera.position().z;
        let next_z = self.zoom.clamp_z(current_z + wheel.delta_y * self.zoom.step);
        if (next_z - current_z).abs() < f64::EPSILON {
            return Action::None;
        }

        let before = self.world_to_surface_at_z(wheel.position, current_z);
        let after = self.world_to_surface_at_z(wheel.position, next_z);
        let shift = before.offset_from(after);
        self.camera.translate_x(shift.x);
        self.camera.translate_y(shift.y);
        self.camera.set_z(next_z);
        log::trace!("zoom z {current_z} -> {next_z}");
        Action::CameraMoved
    }

    /// Start (or restart) a drag at the pointer.
    pub fn on_pointer_down(&mut self, pointer: PointerInput) -> Action {
        let anchor = self.world_to_surface_abs(pointer.position);
        self.drag = DragState::Dragging { anchor };
        Action::None
    }

    /// Follow the pointer while dragging.
    pub fn on_pointer_move(&mut self, pointer: PointerInput) -> Action {
        let DragState::Dragging { anchor } = self.drag else {
            return Action::None;
        };
        let next = self.world_to_surface_abs(pointer.position);
        let shift = anchor.offset_from(next);
        self.drag = DragState::Dragging { anchor: next };
        if shift == SceneOffset::default() {
            return Action::None;
        }
        self.camera.translate_x(shift.x);
        self.camera.translate_y(shift.y);
        Action::CameraMoved
    }

    /// End the drag.
    pub fn on_pointer_up(&mut self, _pointer: PointerInput) -> Action {
        self.drag = DragState::Idle;
        Action::None
    }
}
