//! Deterministic first-fit-decreasing auto-sort.
//!
//! Items are repacked from scratch: largest first, each at the first origin
//! (in corner scan order) where its footprint containment and a fresh
//! occupancy map both hold. Running the packer twice on the same input and
//! config produces identical output.

use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collision;
use crate::entities::{Catalog, PlacedItem};
use crate::geometry::{Cell, ShapeMatrix};

/// Configuration of the auto-sort heuristic. Part of the save payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Try all four quarter-turns per item
    pub allow_rotate: bool,
    /// Also try the horizontally mirrored shape
    pub allow_flip: bool,
    /// Corner the origin scan starts from
    pub start_corner: StartCorner,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            allow_rotate: true,
            allow_flip: true,
            start_corner: StartCorner::Tl,
        }
    }
}

/// Corner from which candidate origins are scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StartCorner {
    /// Top-left: ascending y, then ascending x (row-major, the default)
    Tl,
    /// Top-right: ascending y, then descending x
    Tr,
    /// Bottom-left: descending y, then ascending x
    Bl,
    /// Bottom-right: descending y, then descending x
    Br,
}

/// Result of a pack run: the new contents of the layout, plus the items
/// that fit nowhere in any allowed orientation.
#[derive(Clone, Debug, Default)]
pub struct PackResult {
    pub placed: Vec<PlacedItem>,
    pub overflow: Vec<PlacedItem>,
}

/// Occupancy tracking for a single pack run, seeded empty and independent
/// of live layout state. Same flat row-major storage as [`ShapeMatrix`].
#[derive(Clone, Debug)]
pub struct OccupancyMap {
    cells: Vec<bool>,
    n_rows: usize,
    n_cols: usize,
}

impl OccupancyMap {
    pub fn new(footprint: &ShapeMatrix) -> Self {
        Self {
            cells: vec![false; footprint.n_rows() * footprint.n_cols()],
            n_rows: footprint.n_rows(),
            n_cols: footprint.n_cols(),
        }
    }

    fn is_free(&self, cell: Cell) -> bool {
        let Cell(x, y) = cell;
        x >= 0
            && y >= 0
            && (x as usize) < self.n_cols
            && (y as usize) < self.n_rows
            && !self.cells[y as usize * self.n_cols + x as usize]
    }

    pub fn is_free_for(&self, shape: &ShapeMatrix, origin: Cell) -> bool {
        shape.occupied_cells(origin).all(|cell| self.is_free(cell))
    }

    pub fn mark(&mut self, shape: &ShapeMatrix, origin: Cell) {
        for Cell(x, y) in shape.occupied_cells(origin) {
            self.cells[y as usize * self.n_cols + x as usize] = true;
        }
    }
}

/// Candidate origins for `footprint`, ordered per `corner`.
pub fn scan_order(footprint: &ShapeMatrix, corner: StartCorner) -> Vec<Cell> {
    let (n_cols, n_rows) = (footprint.n_cols() as i32, footprint.n_rows() as i32);
    let ys: Vec<i32> = match corner {
        StartCorner::Tl | StartCorner::Tr => (0..n_rows).collect(),
        StartCorner::Bl | StartCorner::Br => (0..n_rows).rev().collect(),
    };
    let xs: Vec<i32> = match corner {
        StartCorner::Tl | StartCorner::Bl => (0..n_cols).collect(),
        StartCorner::Tr | StartCorner::Br => (0..n_cols).rev().collect(),
    };

    let mut cells = Vec::with_capacity((n_rows * n_cols) as usize);
    for &y in &ys {
        for &x in &xs {
            cells.push(Cell(x, y));
        }
    }
    cells
}

/// Pack order: indices into `items` sorted by descending occupied-cell
/// count. The sort is stable, so equally sized items keep their incoming
/// order and repacking is deterministic.
pub fn item_pack_order(items: &[PlacedItem]) -> Vec<usize> {
    (0..items.len())
        .sorted_by_key(|&i| Reverse(items[i].shape.cell_count()))
        .collect_vec()
}

/// Repacks `items` into `footprint` from scratch.
///
/// Orientation candidates are rebuilt from each item definition's base
/// shape: flip off then on (if allowed), each with rotations 0..=3 (only 0
/// if rotation is disabled). The first origin in scan order where the
/// orientation fits both the footprint and the occupancy map wins; its cells
/// are marked before the next item is tried. Items with no fit, and items
/// whose definition is missing from the catalog, land in the overflow.
pub fn pack(
    items: Vec<PlacedItem>,
    catalog: &Catalog,
    footprint: &ShapeMatrix,
    config: &SortConfig,
) -> PackResult {
    let order = item_pack_order(&items);
    let scan = scan_order(footprint, config.start_corner);
    let mut occupancy = OccupancyMap::new(footprint);
    let mut result = PackResult::default();

    let mut items = items.into_iter().map(Some).collect_vec();
    for i in order {
        let item = items[i].take().expect("pack order visits each item once");
        let Some(def) = catalog.item_def(item.def_id) else {
            // cascading deletion removes instances with their definition;
            // an orphan here means the caller bypassed it
            debug!(
                "[PACK] item references missing definition {}, overflowing it",
                item.def_id
            );
            result.overflow.push(item);
            continue;
        };

        match search(&def.base_shape, footprint, &occupancy, &scan, config) {
            Some((origin, shape, rotation)) => {
                debug!(
                    "[PACK] def {} ({}) placed at {} (rotation {rotation})",
                    def.id, def.name, origin
                );
                occupancy.mark(&shape, origin);
                result.placed.push(PlacedItem {
                    origin,
                    shape,
                    rotation,
                    ..item
                });
            }
            None => {
                debug!("[PACK] def {} ({}) fits nowhere", def.id, def.name);
                result.overflow.push(item);
            }
        }
    }
    result
}

/// First orientation/origin combination that fits, or `None`.
fn search(
    base_shape: &ShapeMatrix,
    footprint: &ShapeMatrix,
    occupancy: &OccupancyMap,
    scan: &[Cell],
    config: &SortConfig,
) -> Option<(Cell, ShapeMatrix, u8)> {
    let flips: &[bool] = match config.allow_flip {
        true => &[false, true],
        false => &[false],
    };
    let n_rotations: u8 = match config.allow_rotate {
        true => 4,
        false => 1,
    };

    for &flipped in flips {
        let mut shape = match flipped {
            true => base_shape.flip_horizontal(),
            false => base_shape.clone(),
        };
        for rotation in 0..n_rotations {
            if rotation > 0 {
                shape = shape.rotate_cw();
            }
            for &origin in scan {
                if collision::fits_footprint(footprint, &shape, origin)
                    && occupancy.is_free_for(&shape, origin)
                {
                    return Some((origin, shape, rotation));
                }
            }
        }
    }
    None
}
