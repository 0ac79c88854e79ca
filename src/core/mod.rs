//! Board primitives.
//!
//! - [`cell`]: `(row, col)` coordinates and the fixed neighbour step order.
//! - [`grid`]: the 4x4 letter board with bounds-checked access and adjacency.

pub mod cell;
pub mod grid;
