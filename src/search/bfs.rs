//! Breadth-first expansion over partial matches.
//!
//! Frontier nodes live in an arena (`Vec`) and refer to their parent by index. The arena is
//! also the FIFO queue: a head cursor walks it, and children are pushed at the back.
//!
//! Two revisit policies share the same expansion:
//! - [`RevisitPolicy::Allow`] is the word search. It keeps no visited set, so a growing path
//!   may re-enter a cell it already used.
//! - [`RevisitPolicy::OncePerStart`] is the trace expansion. A cell enters the arena at most
//!   once per start cell (the start included).

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::trace;

use crate::core::cell::Cell;
use crate::core::grid::Grid;
use crate::error::SearchError;
use crate::search::resources::ResourceTracker;

const STAGE: &str = "bfs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitPolicy {
    Allow,
    OncePerStart,
}

/// A partial match: `cell` holds `word[matched]`, reached from `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrontierNode {
    pub cell: Cell,
    pub matched: usize,
    pub parent: Option<usize>,
}

/// Everything one start cell's expansion pushed, in discovery order.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub start: Cell,
    pub nodes: Vec<FrontierNode>,
    /// Arena index of the node that matched the last letter, if any.
    pub completed: Option<usize>,
}

impl Expansion {
    pub fn is_complete(&self) -> bool {
        self.completed.is_some()
    }

    /// Cells from the start to `idx`, following parent links.
    pub fn path_to(&self, idx: usize) -> Vec<Cell> {
        let mut path = Vec::with_capacity(self.nodes[idx].matched + 1);
        let mut cur = Some(idx);
        while let Some(i) = cur {
            path.push(self.nodes[i].cell);
            cur = self.nodes[i].parent;
        }
        path.reverse();
        path
    }

    /// The path of the completing node.
    pub fn completed_path(&self) -> Option<Vec<Cell>> {
        self.completed.map(|idx| self.path_to(idx))
    }
}

/// Expand partial matches of `word` from `start`.
///
/// `start` must already hold `word[0]`. A node is complete when it is *dequeued* with
/// `matched == word.len() - 1`; expansion stops there and the rest of the queue is dropped.
pub fn expand(
    grid: &Grid,
    word: &[char],
    start: Cell,
    policy: RevisitPolicy,
    tracker: &mut ResourceTracker,
) -> Result<Expansion, SearchError> {
    debug_assert!(!word.is_empty());
    debug_assert!(grid.matches(start, word[0]));

    let mut nodes: Vec<FrontierNode> = Vec::new();
    let mut seen: FxHashSet<Cell> = FxHashSet::default();

    tracker.bump_frontier(STAGE, 1)?;
    nodes.push(FrontierNode {
        cell: start,
        matched: 0,
        parent: None,
    });
    if policy == RevisitPolicy::OncePerStart {
        seen.insert(start);
    }

    let last = word.len() - 1;
    let mut head = 0;
    while head < nodes.len() {
        let idx = head;
        head += 1;
        let node = nodes[idx];
        tracker.bump_steps(STAGE, 1)?;

        if node.matched == last {
            trace!(%start, nodes = nodes.len(), "bfs complete");
            return Ok(Expansion {
                start,
                nodes,
                completed: Some(idx),
            });
        }

        let wanted = word[node.matched + 1];
        for next in grid.neighbors_of(node.cell) {
            if !grid.matches(next, wanted) {
                continue;
            }
            if policy == RevisitPolicy::OncePerStart && !seen.insert(next) {
                continue;
            }
            tracker.bump_frontier(STAGE, 1)?;
            nodes.push(FrontierNode {
                cell: next,
                matched: node.matched + 1,
                parent: Some(idx),
            });
        }
    }

    Ok(Expansion {
        start,
        nodes,
        completed: None,
    })
}

/// Breadth-first word search from one start cell.
pub fn try_bfs(
    grid: &Grid,
    word: &[char],
    start: Cell,
    tracker: &mut ResourceTracker,
) -> Result<bool, SearchError> {
    Ok(expand(grid, word, start, RevisitPolicy::Allow, tracker)?.is_complete())
}
