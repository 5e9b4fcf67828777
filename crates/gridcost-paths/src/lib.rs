//! Shortest-path searches over cost grids.
//!
//! The main entry point is [`min_path_sum_to_last_column`]: the cheapest
//! 4-directional walk from the top-left cell to any cell of the last column,
//! where a path costs the sum of every cell it visits, start included.
//!
//! The searches themselves live on [`PathRange`], which owns and reuses its
//! distance tables so that repeated queries allocate nothing after warm-up:
//!
//! - **Early-exit uniform-cost search** ([`PathRange::cheapest_path`])
//! - **Dijkstra** cost maps ([`PathRange::dijkstra_map`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | both searches |

mod cell_cost;
mod column;
mod dijkstra;
mod pathrange;
mod search;
mod traits;

pub use cell_cost::CellCostPather;
pub use column::{min_path_sum_to_last_column, solve_to_last_column};
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use search::Solution;
pub use traits::{Pather, WeightedPather};
