//! Backtracking depth-first search.
//!
//! One attempt per start cell, each with its own [`VisitedSet`]. A cell is marked while it
//! sits on the current path and released on backtrack, so it can be tried again under a
//! different prefix but never twice within one path.

use tracing::trace;

use crate::core::cell::Cell;
use crate::core::grid::{Grid, GRID_SIZE};
use crate::error::SearchError;
use crate::search::resources::ResourceTracker;

const STAGE: &str = "dfs";

/// Cells consumed by the current DFS path.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    mask: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl VisitedSet {
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.mask[cell.row as usize][cell.col as usize]
    }

    #[inline]
    fn set(&mut self, cell: Cell, on: bool) {
        self.mask[cell.row as usize][cell.col as usize] = on;
    }

    /// Marked cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..GRID_SIZE).flat_map(move |r| {
            (0..GRID_SIZE)
                .filter(move |&c| self.mask[r][c])
                .map(move |c| Cell::new(r as i32, c as i32))
        })
    }
}

/// Try to spell `word[index..]` starting at `cell`.
///
/// On success the path is left marked in `visited` and its cells are pushed onto `path` in
/// order. On failure both are restored to how they were on entry.
pub fn try_dfs(
    grid: &Grid,
    word: &[char],
    cell: Cell,
    index: usize,
    visited: &mut VisitedSet,
    path: &mut Vec<Cell>,
    tracker: &mut ResourceTracker,
) -> Result<bool, SearchError> {
    if index == word.len() {
        return Ok(true);
    }
    if !grid.contains(cell) || visited.contains(cell) || !grid.matches(cell, word[index]) {
        return Ok(false);
    }
    tracker.bump_steps(STAGE, 1)?;

    visited.set(cell, true);
    path.push(cell);

    for next in grid.neighbors_of(cell) {
        if try_dfs(grid, word, next, index + 1, visited, path, tracker)? {
            return Ok(true);
        }
    }

    trace!(%cell, index, "backtrack");
    path.pop();
    visited.set(cell, false);
    Ok(false)
}

/// Run one attempt from `start` with a fresh visited set; returns the path if found.
pub fn dfs_from(
    grid: &Grid,
    word: &[char],
    start: Cell,
    tracker: &mut ResourceTracker,
) -> Result<Option<Vec<Cell>>, SearchError> {
    let mut visited = VisitedSet::default();
    let mut path = Vec::with_capacity(word.len());
    if try_dfs(grid, word, start, 0, &mut visited, &mut path, tracker)? {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}
