use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::cell::{Cell, NEIGHBOR_STEPS};
use crate::error::GridError;

/// Side length of the board.
pub const GRID_SIZE: usize = 4;

/// Value of a cell that was never filled in. It never matches a search letter.
pub const EMPTY: char = '\0';

/// The letter board.
///
/// Read-only for every search routine; only the puzzle loader fills it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            rows: [[EMPTY; GRID_SIZE]; GRID_SIZE],
        }
    }
}

impl Grid {
    pub fn from_rows(rows: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { rows }
    }

    /// Build a board from text rows, one character per cell.
    ///
    /// Short rows and missing rows keep [`EMPTY`]; anything past the board is dropped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut grid = Grid::default();
        for (r, line) in lines.into_iter().take(GRID_SIZE).enumerate() {
            for (c, ch) in line.chars().take(GRID_SIZE).enumerate() {
                grid.rows[r][c] = ch;
            }
        }
        grid
    }

    #[inline]
    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        let n = GRID_SIZE as i32;
        (0..n).contains(&cell.row) && (0..n).contains(&cell.col)
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.contains(cell) {
            Some(self.rows[cell.row as usize][cell.col as usize])
        } else {
            None
        }
    }

    /// The letter at `cell`, or [`GridError::OutOfBounds`].
    pub fn char_at(&self, cell: Cell) -> Result<char, GridError> {
        self.get(cell).ok_or(GridError::OutOfBounds {
            row: cell.row,
            col: cell.col,
            size: GRID_SIZE,
        })
    }

    pub fn set(&mut self, cell: Cell, letter: char) -> Result<(), GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                size: GRID_SIZE,
            });
        }
        self.rows[cell.row as usize][cell.col as usize] = letter;
        Ok(())
    }

    /// Whether `cell` is on the board and holds `letter`. Empty cells match nothing.
    #[inline]
    pub fn matches(&self, cell: Cell, letter: char) -> bool {
        match self.get(cell) {
            Some(ch) => ch != EMPTY && ch == letter,
            None => false,
        }
    }

    /// In-bounds neighbours of `cell`, row-major over the surrounding 3x3 block.
    pub fn neighbors_of(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_STEPS
            .into_iter()
            .map(move |step| cell + step)
            .filter(move |&n| self.contains(n))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = GRID_SIZE as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Cells holding `letter`, in row-major order.
    pub fn cells_with(&self, letter: char) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |&c| self.matches(c, letter))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|&ch| if ch == EMPTY { ".".to_string() } else { ch.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbours_in_row_major_order() {
        let grid = Grid::default();
        let n: Vec<Cell> = grid.neighbors_of(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn inner_cell_has_eight_neighbours() {
        let grid = Grid::default();
        let n: Vec<Cell> = grid.neighbors_of(Cell::new(1, 2)).collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Cell::new(0, 1));
        assert_eq!(n[7], Cell::new(2, 3));
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(1, 2))));
    }

    #[test]
    fn empty_cells_never_match() {
        let grid = Grid::default();
        assert!(!grid.matches(Cell::new(0, 0), EMPTY));
    }
}
