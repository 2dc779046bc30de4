use std::fmt::Display;

use anyhow::{Result, ensure};

use crate::geometry::Cell;

/// Rectangular boolean occupancy mask: the silhouette of an item, or the
/// footprint of a container (`true` = usable cell, `false` = hole).
///
/// Immutable value type; every transform allocates a new matrix and the base
/// shape of a definition is never mutated. Stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: Vec<bool>,
    n_rows: usize,
    n_cols: usize,
}

impl ShapeMatrix {
    /// Builds a matrix from rows of cells.
    /// All rows must have the same nonzero length.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        ensure!(!rows.is_empty(), "shape has no rows");
        let n_cols = rows[0].len();
        ensure!(n_cols > 0, "shape has empty rows");
        ensure!(
            rows.iter().all(|row| row.len() == n_cols),
            "shape rows must have equal length"
        );

        let n_rows = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            cells,
            n_rows,
            n_cols,
        })
    }

    /// A fully occupied `n_rows` x `n_cols` matrix.
    pub fn solid(n_rows: usize, n_cols: usize) -> Self {
        assert!(n_rows > 0 && n_cols > 0);
        Self {
            cells: vec![true; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.n_cols)
    }

    fn at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.n_cols + col]
    }

    /// True if `cell` lies within the bounding box and on an occupied cell.
    /// For container footprints this is the membership test: out-of-bounds
    /// cells and holes are both outside the footprint.
    pub fn contains(&self, cell: Cell) -> bool {
        let Cell(x, y) = cell;
        x >= 0
            && y >= 0
            && (x as usize) < self.n_cols
            && (y as usize) < self.n_rows
            && self.at(y as usize, x as usize)
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All cells occupied by this shape when its bounding box sits with its
    /// top-left corner at `origin`. Iteration is row-major; callers treat
    /// the result as an unordered set.
    pub fn occupied_cells(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        let Cell(ox, oy) = origin;
        (0..self.n_rows).flat_map(move |row| {
            (0..self.n_cols).filter_map(move |col| match self.at(row, col) {
                true => Some(Cell(ox + col as i32, oy + row as i32)),
                false => None,
            })
        })
    }

    /// Quarter-turn clockwise: an RxC matrix becomes CxR with
    /// `new[x][R-1-y] = old[y][x]`. Four applications yield the original.
    pub fn rotate_cw(&self) -> ShapeMatrix {
        let (r, c) = (self.n_rows, self.n_cols);
        let mut cells = vec![false; r * c];
        for y in 0..r {
            for x in 0..c {
                cells[x * r + (r - 1 - y)] = self.at(y, x);
            }
        }
        ShapeMatrix {
            cells,
            n_rows: c,
            n_cols: r,
        }
    }

    /// Quarter-turn counterclockwise, i.e. three clockwise turns.
    pub fn rotate_ccw(&self) -> ShapeMatrix {
        self.rotate_cw().rotate_cw().rotate_cw()
    }

    /// Mirror along the vertical axis (every row reversed).
    /// An involution: flipping twice yields the original.
    pub fn flip_horizontal(&self) -> ShapeMatrix {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.rows() {
            cells.extend(row.iter().rev());
        }
        ShapeMatrix {
            cells,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }

    /// Offset of the center cell, biased to the top-left for even dimensions
    /// (a 4-wide shape's center column is index 2). Drags anchor the shape
    /// at this cell rather than at its top-left corner.
    pub fn center_offset(&self) -> Cell {
        Cell((self.n_cols / 2) as i32, (self.n_rows / 2) as i32)
    }
}

impl Display for ShapeMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_str(match cell {
                    true => "#",
                    false => ".",
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
