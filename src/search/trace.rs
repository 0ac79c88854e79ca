//! Breadth-first search trees for display.
//!
//! Unlike [`find_word`](crate::search::find_word), which stops at the first start cell
//! that works, a trace expands from *every* cell holding the first letter. Each start gets
//! its own [`RevisitPolicy::OncePerStart`] expansion, so a cell appears at most once per
//! start, and expansion for a start stops as soon as a node matching the last letter is
//! dequeued. The result is therefore a pruned tree, not the full reachability set.
//!
//! Node ids carry the start cell, so subtrees from different starts never collide even when
//! they pass through the same board cells.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::core::cell::Cell;
use crate::core::grid::Grid;
use crate::error::TraceError;
use crate::search::bfs::{expand, Expansion, RevisitPolicy};
use crate::search::resources::{ResourceTracker, SearchLimits};
use crate::word::SearchWord;

/// `(start, cell)`; formatted as `"sr-sc-r,c"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TraceNodeId {
    pub start: Cell,
    pub cell: Cell,
}

impl fmt::Display for TraceNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{},{}",
            self.start.row, self.start.col, self.cell.row, self.cell.col
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceNode {
    pub id: TraceNodeId,
    pub letter: char,
    /// Index into the word of `letter`; 0 for roots.
    pub depth: usize,
    pub parent: Option<TraceNodeId>,
}

impl TraceNode {
    #[inline]
    pub fn cell(&self) -> Cell {
        self.id.cell
    }

    /// Two-line display label: `"(r,c)"` then the letter.
    pub fn label(&self) -> String {
        format!("{}\n{}", self.id.cell, self.letter)
    }
}

/// Outcome of one start cell's expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStart {
    pub cell: Cell,
    pub reached_last_letter: bool,
    pub nodes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceGraph {
    pub word: String,
    pub starts: Vec<TraceStart>,
    nodes: Vec<TraceNode>,
    #[serde(skip)]
    index: FxHashMap<TraceNodeId, usize>,
}

impl TraceGraph {
    /// Nodes in discovery order, start by start.
    pub fn nodes(&self) -> &[TraceNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: TraceNodeId) -> Option<&TraceNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn parent_of(&self, id: TraceNodeId) -> Option<TraceNodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Directed `(parent, child)` edges in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = (TraceNodeId, TraceNodeId)> + '_ {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (p, n.id)))
    }

    pub fn roots(&self) -> impl Iterator<Item = &TraceNode> + '_ {
        self.nodes.iter().filter(|n| n.parent.is_none())
    }

    pub fn children_of(&self, id: TraceNodeId) -> impl Iterator<Item = &TraceNode> + '_ {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    fn push_expansion(&mut self, word: &[char], exp: &Expansion) {
        let start = exp.start;
        for node in &exp.nodes {
            let id = TraceNodeId {
                start,
                cell: node.cell,
            };
            let parent = node.parent.map(|p| TraceNodeId {
                start,
                cell: exp.nodes[p].cell,
            });
            self.index.insert(id, self.nodes.len());
            self.nodes.push(TraceNode {
                id,
                letter: word[node.matched],
                depth: node.matched,
                parent,
            });
        }
        self.starts.push(TraceStart {
            cell: start,
            reached_last_letter: exp.is_complete(),
            nodes: exp.nodes.len(),
        });
    }
}

/// Build the trace for `word`. Meant to be called after a breadth-first hit.
pub fn build_trace(grid: &Grid, word: &str) -> Result<TraceGraph, TraceError> {
    try_build_trace(grid, word, SearchLimits::UNBOUNDED)
}

pub fn try_build_trace(
    grid: &Grid,
    word: &str,
    limits: SearchLimits,
) -> Result<TraceGraph, TraceError> {
    let word = SearchWord::new(word).ok_or(TraceError::EmptyWord)?;
    let letters = word.letters();

    let mut graph = TraceGraph {
        word: word.to_string(),
        starts: Vec::new(),
        nodes: Vec::new(),
        index: FxHashMap::default(),
    };

    let mut tracker = ResourceTracker::new(limits);
    for start in grid.cells_with(word.first()) {
        let exp = expand(
            grid,
            letters,
            start,
            RevisitPolicy::OncePerStart,
            &mut tracker,
        )?;
        graph.push_expansion(letters, &exp);
    }

    if graph.starts.is_empty() {
        return Err(TraceError::FirstLetterMissing {
            letter: word.first(),
        });
    }

    debug!(
        %word,
        starts = graph.starts.len(),
        nodes = graph.nodes.len(),
        "trace built"
    );
    Ok(graph)
}
