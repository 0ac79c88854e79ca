//! Word search over a [`Grid`].
//!
//! - [`dfs`]: backtracking search with a per-attempt visited mask.
//! - [`bfs`]: arena-backed breadth-first expansion (no visited set for searching).
//! - [`batch`]: a whole word list against one board.
//! - [`trace`]: the per-start BFS tree used to explain a breadth-first hit.
//! - [`resources`]: optional budgets for the `try_*` entry points.

pub mod batch;
pub mod bfs;
pub mod dfs;
pub mod resources;
pub mod trace;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cell::Cell;
use crate::core::grid::Grid;
use crate::error::{ParseStrategyError, SearchError};
use crate::search::bfs::{expand, try_bfs, RevisitPolicy};
use crate::search::dfs::dfs_from;
use crate::search::resources::{ResourceTracker, SearchLimits};
use crate::word::SearchWord;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    #[serde(alias = "dfs")]
    DepthFirst,
    #[serde(alias = "bfs")]
    BreadthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => f.write_str("DFS"),
            Strategy::BreadthFirst => f.write_str("BFS"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth_first" | "breadth-first" => Ok(Strategy::BreadthFirst),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Whether `word` can be traced on `grid`. Empty words are never found.
pub fn find_word(grid: &Grid, word: &str, strategy: Strategy) -> bool {
    unbounded(try_find_word(grid, word, strategy, SearchLimits::UNBOUNDED))
}

/// Like [`find_word`], but stops with an error once `limits` are exceeded.
pub fn try_find_word(
    grid: &Grid,
    word: &str,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<bool, SearchError> {
    let hit = scan_starts(grid, word, strategy, limits, |letters, start, tracker| {
        let found = match strategy {
            Strategy::DepthFirst => dfs_from(grid, letters, start, tracker)?.is_some(),
            Strategy::BreadthFirst => try_bfs(grid, letters, start, tracker)?,
        };
        Ok(found.then_some(()))
    })?;
    Ok(hit.is_some())
}

/// The path accepted by `strategy`, start cell first.
///
/// Breadth-first paths may repeat a cell (see [`bfs`]).
pub fn find_path(grid: &Grid, word: &str, strategy: Strategy) -> Option<Vec<Cell>> {
    unbounded(try_find_path(grid, word, strategy, SearchLimits::UNBOUNDED))
}

pub fn try_find_path(
    grid: &Grid,
    word: &str,
    strategy: Strategy,
    limits: SearchLimits,
) -> Result<Option<Vec<Cell>>, SearchError> {
    scan_starts(grid, word, strategy, limits, |letters, start, tracker| {
        Ok(match strategy {
            Strategy::DepthFirst => dfs_from(grid, letters, start, tracker)?,
            Strategy::BreadthFirst => {
                expand(grid, letters, start, RevisitPolicy::Allow, tracker)?.completed_path()
            }
        })
    })
}

/// Try every cell holding the first letter in row-major order; stop at the first hit.
fn scan_starts<T>(
    grid: &Grid,
    word: &str,
    strategy: Strategy,
    limits: SearchLimits,
    mut attempt: impl FnMut(&[char], Cell, &mut ResourceTracker) -> Result<Option<T>, SearchError>,
) -> Result<Option<T>, SearchError> {
    let Some(word) = SearchWord::new(word) else {
        debug!("empty word, nothing to search");
        return Ok(None);
    };

    let mut tracker = ResourceTracker::new(limits);
    for start in grid.cells_with(word.first()) {
        if let Some(hit) = attempt(word.letters(), start, &mut tracker)? {
            debug!(%word, %strategy, %start, "found");
            return Ok(Some(hit));
        }
    }
    debug!(%word, %strategy, steps = tracker.counts().steps, "not found");
    Ok(None)
}

pub(crate) fn unbounded<T>(r: Result<T, SearchError>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => unreachable!("unbounded search cannot exceed a limit: {e}"),
    }
}
