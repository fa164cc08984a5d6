//! Render surface descriptor.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use web_sys::HtmlCanvasElement;

/// Anything that reports the CSS pixel size of the rendered canvas.
pub trait RenderSurface {
    fn pixel_width(&self) -> f64;
    fn pixel_height(&self) -> f64;
}

/// Fixed surface dimensions, for hosts that track the size themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width / height, the aspect a camera filling this surface should use.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

impl RenderSurface for SurfaceSize {
    fn pixel_width(&self) -> f64 {
        self.width
    }

    fn pixel_height(&self) -> f64 {
        self.height
    }
}

/// A live canvas. Reads `clientWidth` / `clientHeight` on every call so
/// layout changes are picked up without notifying the controller.
impl RenderSurface for HtmlCanvasElement {
    fn pixel_width(&self) -> f64 {
        f64::from(self.client_width())
    }

    fn pixel_height(&self) -> f64 {
        f64::from(self.client_height())
    }
}
