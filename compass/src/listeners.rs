//! DOM event wiring for a shared [`ViewportController`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `attach_all_handlers` registers five listeners and returns them as one
//! [`EventBindings`] subscription:
//!
//! | Event | Target | Handler |
//! |-------|--------|---------|
//! | `wheel` | canvas | `on_wheel` (default scroll suppressed) |
//! | `mousedown` | canvas | `on_pointer_down` |
//! | `mousemove` | window | `on_pointer_move` |
//! | `mouseup` | window | `on_pointer_up` |
//! | `contextmenu` | canvas | suppressed |
//!
//! Move and release are observed on the window so a drag keeps tracking the
//! pointer after it leaves the canvas. Dropping the subscription removes every
//! listener, so no handler outlives the controller's owner.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::camera::ViewCamera;
use crate::controller::ViewportController;
use crate::error::{CompassError, describe_js};
use crate::input::{Action, PointerInput, WheelInput};
use crate::space::SurfacePixel;
use crate::surface::RenderSurface;

/// A controller shared between the host and its listener closures.
pub type SharedController<C, S> = Rc<RefCell<ViewportController<C, S>>>;

/// Invoked after any event that moved the camera.
pub type MoveCallback = Rc<dyn Fn()>;

/// One registered DOM listener. Removed from its target on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: &EventTarget, event: &'static str, callback: Closure<dyn FnMut(Event)>) -> Result<Self, CompassError> {
        // Non-passive so `preventDefault` can cancel page scroll on wheel.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| CompassError::Listener { event, message: describe_js(&err) })?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {}", self.event, describe_js(&err));
        }
    }
}

/// Live listener subscription returned by [`attach_all_handlers`].
pub struct EventBindings {
    listeners: Vec<Listener>,
}

impl EventBindings {
    /// Names of the bound events, in registration order.
    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        self.listeners.iter().map(|l| l.event).collect()
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        log::debug!("detaching {} viewport listeners", self.listeners.len());
    }
}

/// Wire wheel, drag and context-menu handling for `controller`.
///
/// # Errors
///
/// Returns [`CompassError::Listener`] if the browser refuses a listener.
/// Listeners attached before the failure are removed again.
pub fn attach_all_handlers<C, S>(
    controller: &SharedController<C, S>,
    canvas: &HtmlCanvasElement,
    window: &Window,
    on_move: Option<MoveCallback>,
) -> Result<EventBindings, CompassError>
where
    C: ViewCamera + 'static,
    S: RenderSurface + 'static,
{
    let canvas_target: &EventTarget = canvas.as_ref();
    let window_target: &EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(5);

    let wheel_cb = {
        let controller = Rc::clone(controller);
        let canvas = canvas.clone();
        let on_move = on_move.clone();
        Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let Some(wheel) = e.dyn_ref::<WheelEvent>() else {
                return;
            };
            let input = wheel_input(pointer_at(&canvas, wheel), wheel.delta_y());
            dispatch(&controller, on_move.as_ref(), |c| c.on_wheel(input));
        }) as Box<dyn FnMut(Event)>)
    };
    listeners.push(Listener::attach(canvas_target, "wheel", wheel_cb)?);

    let mousedown_cb = {
        let controller = Rc::clone(controller);
        let canvas = canvas.clone();
        let on_move = on_move.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let input = pointer_at(&canvas, mouse);
            dispatch(&controller, on_move.as_ref(), |c| c.on_pointer_down(input));
        }) as Box<dyn FnMut(Event)>)
    };
    listeners.push(Listener::attach(canvas_target, "mousedown", mousedown_cb)?);

    let mousemove_cb = {
        let controller = Rc::clone(controller);
        let canvas = canvas.clone();
        let on_move = on_move.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let input = pointer_at(&canvas, mouse);
            dispatch(&controller, on_move.as_ref(), |c| c.on_pointer_move(input));
        }) as Box<dyn FnMut(Event)>)
    };
    listeners.push(Listener::attach(window_target, "mousemove", mousemove_cb)?);

    let mouseup_cb = {
        let controller = Rc::clone(controller);
        let canvas = canvas.clone();
        let on_move = on_move.clone();
        Closure::wrap(Box::new(move |e: Event| {
            let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let input = pointer_at(&canvas, mouse);
            dispatch(&controller, on_move.as_ref(), |c| c.on_pointer_up(input));
        }) as Box<dyn FnMut(Event)>)
    };
    listeners.push(Listener::attach(window_target, "mouseup", mouseup_cb)?);

    let contextmenu_cb = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
    }) as Box<dyn FnMut(Event)>);
    listeners.push(Listener::attach(canvas_target, "contextmenu", contextmenu_cb)?);

    log::debug!("attached {} viewport listeners", listeners.len());
    Ok(EventBindings { listeners })
}

/// Read a mouse event's position relative to the canvas.
fn pointer_at(canvas: &HtmlCanvasElement, event: &MouseEvent) -> PointerInput {
    let rect = canvas.get_bounding_client_rect();
    pointer_input(f64::from(event.client_x()), f64::from(event.client_y()), rect.left(), rect.top())
}

/// Pointer payload for a viewport position, given the surface's top-left
/// corner in the same viewport.
pub(crate) fn pointer_input(client_x: f64, client_y: f64, left: f64, top: f64) -> PointerInput {
    PointerInput { position: SurfacePixel::from_client(client_x, client_y, left, top) }
}

pub(crate) fn wheel_input(pointer: PointerInput, delta_y: f64) -> WheelInput {
    WheelInput { position: pointer.position, delta_y }
}

/// Run one handler against the shared controller and notify on camera moves.
///
/// The borrow is released before `on_move` runs so the callback may query
/// the controller. A controller that is already borrowed drops the event and
/// yields [`Action::None`].
pub fn dispatch<C, S>(
    controller: &SharedController<C, S>,
    on_move: Option<&MoveCallback>,
    handle: impl FnOnce(&mut ViewportController<C, S>) -> Action,
) -> Action
where
    C: ViewCamera,
    S: RenderSurface,
{
    let action = match controller.try_borrow_mut() {
        Ok(mut c) => handle(&mut c),
        Err(_) => {
            log::warn!("viewport controller busy; event dropped");
            return Action::None;
        }
    };
    if action == Action::CameraMoved {
        if let Some(notify) = on_move {
            notify();
        }
    }
    action
}
