//! Board primitives shared by every other layer.
//!
//! - [`coord`]: signed diagonal steps.
//! - [`position`]: `(row, col)` squares with bounds-checked shifting.
//! - [`piece`]: players and per-square piece states.

pub mod coord;
pub mod piece;
pub mod position;
