#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// PointerInput / WheelInput
// =============================================================

#[test]
fn pointer_input_at() {
    let p = PointerInput::at(3.0, 4.0);
    assert_eq!(p.position, SurfacePixel::new(3.0, 4.0));
}

#[test]
fn wheel_input_at() {
    let w = WheelInput::at(10.0, 20.0, -120.0);
    assert_eq!(w.position, SurfacePixel::new(10.0, 20.0));
    assert_eq!(w.delta_y, -120.0);
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
}

#[test]
fn idle_is_not_active() {
    assert!(!DragState::Idle.is_active());
    assert_eq!(DragState::Idle.anchor(), None);
}

#[test]
fn dragging_is_active_and_exposes_anchor() {
    let state = DragState::Dragging { anchor: SceneOffset::new(1.5, -2.5) };
    assert!(state.is_active());
    assert_eq!(state.anchor(), Some(SceneOffset::new(1.5, -2.5)));
}

#[test]
fn drag_state_debug_format() {
    assert_eq!(format!("{:?}", DragState::Idle), "Idle");
    assert!(format!("{:?}", DragState::Dragging { anchor: SceneOffset::default() }).starts_with("Dragging"));
}

// =============================================================
// Action
// =============================================================

#[test]
fn action_equality() {
    assert_eq!(Action::None, Action::None);
    assert_ne!(Action::None, Action::CameraMoved);
}
