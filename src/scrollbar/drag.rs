//! Pointer-drag session for the thumb.

use super::host::ViewportRect;

/// Thumb drag interaction state.
///
/// Only one pointer may drag at a time; events from any other pointer are
/// ignored until the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Dragging with the pointer that pressed the thumb
    Dragging { pointer_id: i32 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Whether events from `pointer_id` belong to the current session.
    pub fn is_active_for(&self, pointer_id: i32) -> bool {
        matches!(self, DragState::Dragging { pointer_id: id } if *id == pointer_id)
    }

    /// Start a session. Returns false (and changes nothing) if one is
    /// already running.
    pub fn begin(&mut self, pointer_id: i32) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::Dragging { pointer_id };
        true
    }

    /// End the session owned by `pointer_id`. Returns false for any other
    /// pointer.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if !self.is_active_for(pointer_id) {
            return false;
        }
        *self = DragState::Idle;
        true
    }
}

/// Map a pointer's viewport Y onto the container height as a ratio in `[0, 1]`.
pub fn pointer_ratio(client_y: f64, rect: &ViewportRect) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    ((client_y - rect.top) / rect.height).clamp(0.0, 1.0)
}
