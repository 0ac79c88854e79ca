//! Error types.
//!
//! A word that is not on the board is a plain `false`, never an error. The variants below
//! cover caller bugs (bad coordinates), exhausted budgets, and the I/O layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::search::resources::SearchCounts;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row},{col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A configured search budget was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(frontier_nodes={}, steps={})",
        .counts.frontier_nodes,
        .counts.steps
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: SearchCounts,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("cannot trace an empty word")]
    EmptyWord,
    #[error("the first letter '{letter}' is not on the board")]
    FirstLetterMissing { letter: char },
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("I/O failure at {stage} for {}: {source}", .path.display())]
    Io {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected dfs or bfs)")]
pub struct ParseStrategyError(pub String);
