//! **gridcost-core**: core types for cost-grid path searches.
//!
//! This crate provides geometry primitives ([`Point`], [`Range`]), the
//! immutable [`CostGrid`] of non-negative cell costs, and a reader that
//! builds a grid from whitespace-separated integers.

pub mod geom;
pub mod grid;
pub mod read;

pub use geom::{Point, Range, RangeIter};
pub use grid::{CostGrid, GridError, MAX_CELL_COST};
pub use read::{GridReader, ReadError, read_grid};
