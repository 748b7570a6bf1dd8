//! Horizontal glyph dragging
//!
//! One gesture at a time: a press over a row starts a drag, moves shift that
//! row's manual offset by the pointer's horizontal travel, and any release,
//! leave or cancel ends it. Only the vertical position decides which row is
//! grabbed, since a glyph may already sit well away from the column.

use crate::models::{SurfacePoint, UserOffsets};
use crate::renderers::display_list::{row_at, RowBand};

/// Drag gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Row being dragged
        index: usize,
        /// Pointer x at press time
        start_x: f64,
        /// Row offset at press time
        start_offset: f64,
    },
}

/// Turns pointer events into manual offsets it does not own
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the row being dragged
    pub fn target(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Pointer pressed. Returns the grabbed row, or `None` when the press
    /// missed every row or a drag is already in progress.
    pub fn press(&mut self, point: SurfacePoint, rows: &[RowBand], offsets: &UserOffsets) -> Option<usize> {
        if self.is_dragging() {
            return None;
        }

        let index = row_at(rows, point.y)?;
        let start_offset = offsets.get(index);
        self.state = DragState::Dragging {
            index,
            start_x: point.x,
            start_offset,
        };
        log::debug!("drag start: row {} at x={} offset={}", index, point.x, start_offset);
        Some(index)
    }

    /// Pointer moved to surface-local `x`. Returns true when an offset was
    /// written and the column needs repainting.
    pub fn drag_to(&mut self, x: f64, offsets: &mut UserOffsets) -> bool {
        match self.state {
            DragState::Dragging {
                index,
                start_x,
                start_offset,
            } => {
                offsets.set(index, start_offset + (x - start_x));
                true
            }
            DragState::Idle => false,
        }
    }

    /// Release, leave or cancel
    pub fn release(&mut self) {
        if let DragState::Dragging { index, .. } = self.state {
            log::debug!("drag end: row {}", index);
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RowBand> {
        (0..4)
            .map(|index| {
                let top = 100.0 + index as f64 * 50.0;
                RowBand {
                    index,
                    top,
                    baseline: top + 25.0,
                    bottom: top + 50.0,
                }
            })
            .collect()
    }

    fn offsets(len: usize) -> UserOffsets {
        let mut offsets = UserOffsets::default();
        offsets.reconcile(len);
        offsets
    }

    #[test]
    fn test_press_on_row_starts_drag() {
        let mut drag = DragController::new();
        let mut offsets = offsets(4);
        offsets.set(2, 12.0);

        assert_eq!(drag.press(SurfacePoint::new(5.0, 220.0), &rows(), &offsets), Some(2));
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                index: 2,
                start_x: 5.0,
                start_offset: 12.0
            }
        );
    }

    #[test]
    fn test_press_outside_rows_stays_idle() {
        let mut drag = DragController::new();
        assert_eq!(drag.press(SurfacePoint::new(50.0, 40.0), &rows(), &offsets(4)), None);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_move_clamps_to_limit() {
        let mut drag = DragController::new();
        let mut offsets = offsets(4);
        drag.press(SurfacePoint::new(10.0, 225.0), &rows(), &offsets);

        assert!(drag.drag_to(160.0, &mut offsets));
        assert_eq!(offsets.get(2), 100.0);

        assert!(drag.drag_to(-400.0, &mut offsets));
        assert_eq!(offsets.get(2), -100.0);

        assert!(drag.drag_to(40.0, &mut offsets));
        assert_eq!(offsets.get(2), 30.0);
    }

    #[test]
    fn test_delta_is_relative_to_press_offset() {
        let mut drag = DragController::new();
        let mut offsets = offsets(4);
        offsets.set(0, -20.0);

        drag.press(SurfacePoint::new(300.0, 110.0), &rows(), &offsets);
        drag.drag_to(310.0, &mut offsets);
        assert_eq!(offsets.get(0), -10.0);
    }

    #[test]
    fn test_move_while_idle_does_nothing() {
        let mut drag = DragController::new();
        let mut offsets = offsets(4);
        assert!(!drag.drag_to(90.0, &mut offsets));
        assert!(offsets.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut drag = DragController::new();
        let mut offsets = offsets(4);
        drag.press(SurfacePoint::new(0.0, 160.0), &rows(), &offsets);
        drag.release();

        assert!(!drag.is_dragging());
        assert!(!drag.drag_to(50.0, &mut offsets));
    }

    #[test]
    fn test_second_press_ignored_while_dragging() {
        let mut drag = DragController::new();
        let offsets = offsets(4);
        drag.press(SurfacePoint::new(0.0, 110.0), &rows(), &offsets);

        assert_eq!(drag.press(SurfacePoint::new(0.0, 260.0), &rows(), &offsets), None);
        assert_eq!(drag.target(), Some(0));
    }
}
