use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A board cell addressed by `(row, col)`.
///
/// Coordinates are signed so neighbour offsets can step off the board; use
/// [`crate::core::grid::Grid::contains`] before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance; adjacent cells are exactly 1 apart.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> i32 {
        let d = self - other;
        d.row.abs().max(d.col.abs())
    }

    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.chebyshev(other) == 1
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Self::Output {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Cell) -> Self::Output {
        Cell::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 8 steps around a cell, in row-major order over the 3x3 block (centre skipped).
///
/// Every traversal walks neighbours in this order so DFS, BFS and traces agree.
pub const NEIGHBOR_STEPS: [Cell; 8] = [
    Cell { row: -1, col: -1 },
    Cell { row: -1, col: 0 },
    Cell { row: -1, col: 1 },
    Cell { row: 0, col: -1 },
    Cell { row: 0, col: 1 },
    Cell { row: 1, col: -1 },
    Cell { row: 1, col: 0 },
    Cell { row: 1, col: 1 },
];
