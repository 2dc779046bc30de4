//! Containment and overlap checks for candidate placements.
//!
//! A placement is all-or-nothing: either every occupied cell of the shape
//! lands on a free footprint cell, or the placement is illegal. There is no
//! partial placement, stacking or z-ordering.

use std::collections::HashSet;

use slotmap::SlotMap;

use crate::entities::{PItemKey, PlacedItem};
use crate::geometry::{Cell, ShapeMatrix};

/// True if every occupied cell of `shape`, placed at `origin`, lands on a
/// usable cell of `footprint` (in bounds and not a hole).
pub fn fits_footprint(footprint: &ShapeMatrix, shape: &ShapeMatrix, origin: Cell) -> bool {
    shape
        .occupied_cells(origin)
        .all(|cell| footprint.contains(cell))
}

/// All-or-nothing placement test: containment in `footprint` plus no overlap
/// with any placed item other than `exclude`.
///
/// `exclude` supports mid-move checks of the kind "does this item fit back
/// where it almost was" without the item colliding with its own cells.
pub fn can_place(
    footprint: &ShapeMatrix,
    placed_items: &SlotMap<PItemKey, PlacedItem>,
    shape: &ShapeMatrix,
    origin: Cell,
    exclude: Option<PItemKey>,
) -> bool {
    if !fits_footprint(footprint, shape, origin) {
        return false;
    }

    let candidate_cells: HashSet<Cell> = shape.occupied_cells(origin).collect();

    placed_items
        .iter()
        .filter(|(pk, _)| Some(*pk) != exclude)
        .all(|(_, pi)| {
            pi.shape
                .occupied_cells(pi.origin)
                .all(|cell| !candidate_cells.contains(&cell))
        })
}
