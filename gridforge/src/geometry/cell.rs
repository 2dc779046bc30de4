use std::fmt::Display;
use std::ops::{Add, Sub};

/// Grid coordinate, (x, y). Signed: origins can go negative while a pending
/// placement is being tested against a footprint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub fn x(self) -> i32 {
        self.0
    }

    pub fn y(self) -> i32 {
        self.1
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, rhs: Cell) -> Cell {
        Cell(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, rhs: Cell) -> Cell {
        Cell(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell(x, y)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
