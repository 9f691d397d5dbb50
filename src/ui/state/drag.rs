// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position at the previous drag event
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation at `position`
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Returns the pointer movement since the previous event and records
    /// `current_position` as the new reference.
    ///
    /// Returns `None` when no drag is active.
    pub fn advance(&mut self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }
        let last = self.last_position.replace(current_position)?;
        Some(current_position - last)
    }
}
