//! JavaScript API.
//!
//! Exposes the controller to the page as a `Compass` class that takes a
//! `THREE.PerspectiveCamera` and the canvas it renders to. JS names use the
//! page's canvas vocabulary (`getWorldToCanvas*`), Rust names the surface one.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::ZoomConfig;
use crate::controller::ViewportController;
use crate::error::{CompassError, describe_js};
use crate::input::{Action, WheelInput};
use crate::listeners::{EventBindings, MoveCallback, SharedController, attach_all_handlers, dispatch};
use crate::space::{AbsPercent, HalfExtents, SceneOffset, ScenePoint, SignedPercent, SurfacePixel, WorldBounds};
use crate::three::ThreeCamera;

/// Install console logging at `level` (`"trace"` .. `"error"`, default
/// `"info"`) and route panics to `console.error`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = parse_level(level.as_deref());
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
}

fn parse_level(raw: Option<&str>) -> log::Level {
    match raw.map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        Some(Err(_)) | None => log::Level::Info,
    }
}

// =============================================================================
// RETURN VALUES
// =============================================================================

/// An `{x, y}` pair handed back to JS.
#[wasm_bindgen(js_name = Point)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsPoint {
    pub x: f64,
    pub y: f64,
}

impl From<ScenePoint> for JsPoint {
    fn from(p: ScenePoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<SceneOffset> for JsPoint {
    fn from(p: SceneOffset) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<SurfacePixel> for JsPoint {
    fn from(p: SurfacePixel) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<SignedPercent> for JsPoint {
    fn from(p: SignedPercent) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<AbsPercent> for JsPoint {
    fn from(p: AbsPercent) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Visible scene rectangle as `{minWidth, maxWidth, minHeight, maxHeight}`.
#[wasm_bindgen(js_name = Bounds)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsBounds {
    #[wasm_bindgen(js_name = minWidth)]
    pub min_x: f64,
    #[wasm_bindgen(js_name = maxWidth)]
    pub max_x: f64,
    #[wasm_bindgen(js_name = minHeight)]
    pub min_y: f64,
    #[wasm_bindgen(js_name = maxHeight)]
    pub max_y: f64,
}

impl From<WorldBounds> for JsBounds {
    fn from(b: WorldBounds) -> Self {
        Self { min_x: b.min_x, max_x: b.max_x, min_y: b.min_y, max_y: b.max_y }
    }
}

/// Full visible width and height of the view plane.
#[wasm_bindgen(js_name = Size)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsSize {
    pub width: f64,
    pub height: f64,
}

impl From<HalfExtents> for JsSize {
    fn from(e: HalfExtents) -> Self {
        Self { width: e.width(), height: e.height() }
    }
}

// =============================================================================
// COMPASS
// =============================================================================

#[wasm_bindgen]
pub struct Compass {
    controller: SharedController<ThreeCamera, HtmlCanvasElement>,
    canvas: HtmlCanvasElement,
    bindings: Option<EventBindings>,
    on_camera_moved: Rc<RefCell<Option<Function>>>,
}

#[wasm_bindgen]
impl Compass {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(camera: ThreeCamera, canvas: HtmlCanvasElement) -> Compass {
        let controller = ViewportController::new(camera, canvas.clone());
        Compass {
            controller: Rc::new(RefCell::new(controller)),
            canvas,
            bindings: None,
            on_camera_moved: Rc::new(RefCell::new(None)),
        }
    }

    // --- Configuration ---

    /// Set the zoom clamp range (`near_z` closest, `far_z` farthest) and step.
    ///
    /// # Errors
    ///
    /// Fails if the range or step is invalid; the previous config is kept.
    #[wasm_bindgen(js_name = setZoomOptions)]
    pub fn set_zoom_options(&self, near_z: f64, far_z: f64, step: f64) -> Result<(), JsError> {
        let config = ZoomConfig::new(near_z, far_z, step)?;
        self.controller.borrow_mut().set_zoom_config(config);
        Ok(())
    }

    /// Same as `setZoomOptions` with a JSON object; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or invalid values.
    #[wasm_bindgen(js_name = setZoomOptionsJson)]
    pub fn set_zoom_options_json(&self, raw: &str) -> Result<(), JsError> {
        let config = ZoomConfig::from_json(raw)?;
        self.controller.borrow_mut().set_zoom_config(config);
        Ok(())
    }

    /// Register `callback` to run after every camera move, or clear it.
    #[wasm_bindgen(js_name = onCameraMoved)]
    pub fn on_camera_moved(&self, callback: Option<Function>) {
        *self.on_camera_moved.borrow_mut() = callback;
    }

    // --- Events ---

    /// Attach wheel, drag and context-menu handlers. Calling again replaces
    /// the previous set.
    ///
    /// # Errors
    ///
    /// Fails outside a browser window or if a listener cannot be attached.
    #[wasm_bindgen(js_name = setAllEvents)]
    pub fn attach_all_handlers(&mut self) -> Result<(), JsError> {
        self.bindings = None;
        let window = web_sys::window().ok_or(CompassError::NoWindow)?;
        let notify = move_notifier(&self.on_camera_moved);
        let bindings = attach_all_handlers(&self.controller, &self.canvas, &window, Some(notify))?;
        self.bindings = Some(bindings);
        Ok(())
    }

    /// Remove every handler added by `setAllEvents`.
    #[wasm_bindgen(js_name = detachAllEvents)]
    pub fn detach_all_handlers(&mut self) {
        self.bindings = None;
    }

    /// Zoom as if the wheel moved by `delta_y` at surface pixel `(x, y)`.
    /// Runs the `onCameraMoved` callback like a real wheel event and returns
    /// whether the camera moved.
    pub fn zoom(&self, x: f64, y: f64, delta_y: f64) -> bool {
        let notify = move_notifier(&self.on_camera_moved);
        let input = WheelInput::at(x, y, delta_y);
        dispatch(&self.controller, Some(&notify), |c| c.on_wheel(input)) == Action::CameraMoved
    }

    #[wasm_bindgen(js_name = isDragging)]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.borrow().is_dragging()
    }

    // --- Queries ---

    #[wasm_bindgen(js_name = getBounds)]
    #[must_use]
    pub fn bounds(&self) -> JsBounds {
        self.controller.borrow().world_bounds_at_current_z().into()
    }

    #[wasm_bindgen(js_name = getABSBounds)]
    #[must_use]
    pub fn abs_bounds(&self) -> JsSize {
        self.controller.borrow().bounds_at_current_z().into()
    }

    #[wasm_bindgen(js_name = getWorldToCanvasCoordinates)]
    #[must_use]
    pub fn world_to_surface(&self, x: f64, y: f64) -> JsPoint {
        self.controller.borrow().world_to_surface(SurfacePixel::new(x, y)).into()
    }

    #[wasm_bindgen(js_name = getWorldToCanvasABSCoordinates)]
    #[must_use]
    pub fn world_to_surface_abs(&self, x: f64, y: f64) -> JsPoint {
        self.controller.borrow().world_to_surface_abs(SurfacePixel::new(x, y)).into()
    }

    #[wasm_bindgen(js_name = getWorldToCanvasPercentCoordinates)]
    #[must_use]
    pub fn world_to_surface_percent(&self, x: f64, y: f64) -> JsPoint {
        self.controller.borrow().world_to_surface_percent(SurfacePixel::new(x, y)).into()
    }

    #[wasm_bindgen(js_name = getWorldToCanvasABSPercentCoordinates)]
    #[must_use]
    pub fn world_to_surface_abs_percent(&self, x: f64, y: f64) -> JsPoint {
        self.controller.borrow().world_to_surface_abs_percent(SurfacePixel::new(x, y)).into()
    }

    #[wasm_bindgen(js_name = fromCanvasPercentageToWorldCoordinates)]
    #[must_use]
    pub fn surface_percent_to_world(&self, percent_x: f64, percent_y: f64) -> JsPoint {
        self.controller.borrow().surface_percent_to_world(SignedPercent::new(percent_x, percent_y)).into()
    }

    #[wasm_bindgen(js_name = fromCanvasPercentageToCanvas)]
    #[must_use]
    pub fn percent_to_surface_offset(&self, percent_x: f64, percent_y: f64) -> JsPoint {
        self.controller.borrow().percent_to_surface_offset(SignedPercent::new(percent_x, percent_y)).into()
    }
}

/// Wrap the JS callback slot as a [`MoveCallback`]. Reads the slot on each
/// call so `onCameraMoved` can be changed after the handlers are attached.
fn move_notifier(slot: &Rc<RefCell<Option<Function>>>) -> MoveCallback {
    let slot = Rc::clone(slot);
    Rc::new(move || {
        let Ok(slot) = slot.try_borrow() else {
            return;
        };
        if let Some(callback) = slot.as_ref() {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                log::warn!("onCameraMoved callback threw: {}", describe_js(&err));
            }
        }
    })
}
