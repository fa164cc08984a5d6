//! Input model: typed pointer/wheel payloads and the drag state machine.
//!
//! Host events are reduced to these values before they reach the controller,
//! so the controller never depends on a particular browser event type.
//! `DragState` tracks the gesture between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::space::{SceneOffset, SurfacePixel};

/// A pointer press, move or release at a surface position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: SurfacePixel,
}

impl PointerInput {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { position: SurfacePixel::new(x, y) }
    }
}

/// A wheel / trackpad scroll at a surface position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub position: SurfacePixel,
    /// Vertical scroll amount (positive = down = zoom out).
    pub delta_y: f64,
}

impl WheelInput {
    #[must_use]
    pub fn at(x: f64, y: f64, delta_y: f64) -> Self {
        Self { position: SurfacePixel::new(x, y), delta_y }
    }
}

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// A button is held; the camera follows the pointer.
    Dragging {
        /// Surface-absolute scene position of the previous pointer event.
        anchor: SceneOffset,
    },
}

impl DragState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The current anchor, if dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<SceneOffset> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(*anchor),
        }
    }
}

/// Result of feeding an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing visible changed.
    None,
    /// The camera position changed; the host should redraw.
    CameraMoved,
}
