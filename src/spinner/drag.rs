// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the press/move/release interaction that spins the object.
//! Two input modes share one state machine:
//!
//! - **Pointer**: the host reports a per-event horizontal movement delta.
//! - **Touch**: the host reports absolute positions; the delta is computed
//!   against the last recorded touch position.

/// Platform-agnostic drag input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Primary button pressed over the surface.
    Press,
    /// Primary button released.
    Release,
    /// Pointer moved horizontally by `delta_x` since the previous event.
    PointerMoved {
        /// Signed horizontal movement in logical pixels.
        delta_x: f32,
    },
    /// A finger touched the surface at horizontal position `x`.
    TouchStart {
        /// Horizontal position in logical pixels.
        x: f32,
    },
    /// The finger moved to horizontal position `x`.
    TouchMove {
        /// Horizontal position in logical pixels.
        x: f32,
    },
    /// The finger was lifted or the touch was cancelled.
    TouchEnd,
}

/// Idle/Dragging state plus the last touch position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag is in progress (between press and release).
    pub is_dragging: bool,

    /// Last known touch position; only used in touch mode.
    pub last_touch_x: Option<f32>,
}

impl DragState {
    /// Idle → Dragging.
    pub fn press(&mut self) {
        self.is_dragging = true;
    }

    /// Dragging → Idle.
    pub fn release(&mut self) {
        self.is_dragging = false;
    }

    /// Idle → Dragging, remembering where the finger landed.
    pub fn start_touch(&mut self, x: f32) {
        self.is_dragging = true;
        self.last_touch_x = Some(x);
    }

    /// Dragging → Idle, forgetting the touch position.
    pub fn end_touch(&mut self) {
        self.is_dragging = false;
        self.last_touch_x = None;
    }

    /// Records the new touch position and returns `last - x`.
    ///
    /// Returns `None` when not dragging or when no previous touch position
    /// is known (the position is still recorded in the latter case).
    pub fn touch_delta(&mut self, x: f32) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        self.last_touch_x.replace(x).map(|last| last - x)
    }
}
