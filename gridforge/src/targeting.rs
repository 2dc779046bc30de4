//! Maps pointer-resolved grid cells to placement origins.
//!
//! The input collaborator only reports which cell the pointer is over; the
//! engine anchors the dragged shape by its center cell so a large item can
//! be dropped by hovering near its visual middle.

use crate::geometry::{Cell, ShapeMatrix};

/// Placement origin for `shape` when the pointer hovers over `hover`:
/// the hover cell minus the shape's center-cell offset.
pub fn anchor_origin(shape: &ShapeMatrix, hover: Cell) -> Cell {
    hover - shape.center_offset()
}
