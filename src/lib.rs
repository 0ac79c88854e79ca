//! Find words on a 4x4 letter board by tracing paths of adjacent cells.
//!
//! Cells connect to their up to 8 neighbours (orthogonal and diagonal). A word is found when
//! a path of adjacent cells spells it. Two strategies are available:
//!
//! - [`Strategy::DepthFirst`]: backtracking with a visited mask, so no cell repeats in a path.
//! - [`Strategy::BreadthFirst`]: frontier expansion without a visited set. It accepts some
//!   paths that re-enter a cell (see [`search::bfs`]).
//!
//! [`search::trace::build_trace`] explains a breadth-first hit as a tree of partial matches,
//! and [`puzzle`] reads and updates the `dic`/`tab` board file format.

pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod puzzle;
pub mod search;
pub mod word;

pub use crate::core::cell::Cell;
pub use crate::core::grid::{Grid, EMPTY, GRID_SIZE};
pub use dictionary::Dictionary;
pub use search::batch::{find_all, find_all_par};
pub use search::trace::{build_trace, TraceGraph};
pub use search::{find_path, find_word, Strategy};
