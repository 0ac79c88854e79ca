//! Budgets for search routines.
//!
//! Breadth-first search keeps no visited set, so on boards with many repeated letters the
//! frontier grows roughly 8x per letter. The bounded entry points (`try_*`) thread a
//! [`ResourceTracker`] through the search and stop with [`SearchError::LimitExceeded`]
//! instead of exhausting memory. The plain entry points use [`SearchLimits::UNBOUNDED`].

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Search budgets.
///
/// - `max_frontier_nodes`: BFS nodes pushed into the arena (across all start cells)
/// - `max_steps`: DFS cell visits plus BFS node expansions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    pub max_frontier_nodes: u64,
    pub max_steps: u64,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits {
        max_frontier_nodes: u64::MAX,
        max_steps: u64::MAX,
    };

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Running counters tracked during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounts {
    pub frontier_nodes: u64,
    pub steps: u64,
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during one search call.
pub struct ResourceTracker {
    limits: SearchLimits,
    counts: SearchCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            counts: SearchCounts::default(),
        }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self::new(SearchLimits::UNBOUNDED)
    }

    #[inline]
    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    #[inline]
    pub fn bump_frontier(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "frontier_nodes",
            delta as u64,
            self.limits.max_frontier_nodes,
            |c| &mut c.frontier_nodes,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(stage, "steps", delta, self.limits.max_steps, |c| &mut c.steps)
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut SearchCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }
}
