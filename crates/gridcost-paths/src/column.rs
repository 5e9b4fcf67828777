//! Minimum path sum from the top-left cell to the last column.

use gridcost_core::{CostGrid, Point};

use crate::PathRange;
use crate::cell_cost::CellCostPather;
use crate::search::Solution;

impl PathRange {
    /// Cheapest path from the top-left cell of `grid` to any cell of its last
    /// column, reusing this workspace's tables.
    ///
    /// The range is switched to the grid's bounds first. Reaching any row of
    /// the last column ends the search. An empty grid has no start cell and
    /// yields `None`.
    pub fn solve_to_last_column(&mut self, grid: &CostGrid) -> Option<Solution> {
        if grid.is_empty() {
            log::debug!("grid {}×{} has no cells", grid.rows(), grid.cols());
            return None;
        }
        if self.rng != grid.range() {
            self.set_range(grid.range());
        }
        let last = grid.range().last_column();
        self.cheapest_path(&CellCostPather::new(grid), Point::ZERO, |p| {
            last.contains(p)
        })
    }
}

/// Cheapest path from the top-left cell to any cell of the last column.
pub fn solve_to_last_column(grid: &CostGrid) -> Option<Solution> {
    PathRange::new(grid.range()).solve_to_last_column(grid)
}

/// Minimum cumulative cost from the top-left cell to any cell of the last
/// column, start and end cells included. `None` means no path was found.
pub fn min_path_sum_to_last_column(grid: &CostGrid) -> Option<i64> {
    solve_to_last_column(grid).map(|s| s.cost)
}
