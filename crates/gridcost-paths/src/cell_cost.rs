use gridcost_core::{CostGrid, Point};

use crate::pathrange::UNREACHABLE;
use crate::traits::{Pather, WeightedPather};

/// Adapts a [`CostGrid`] for the searches: 4-directional moves inside the
/// grid, where stepping onto a cell (or starting on it) costs its value.
#[derive(Debug, Clone, Copy)]
pub struct CellCostPather<'a> {
    grid: &'a CostGrid,
}

impl<'a> CellCostPather<'a> {
    pub fn new(grid: &'a CostGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a CostGrid {
        self.grid
    }
}

impl Pather for CellCostPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.grid.contains(n)));
    }
}

impl WeightedPather for CellCostPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> i64 {
        self.grid.at(to).unwrap_or(UNREACHABLE)
    }

    fn entry_cost(&self, p: Point) -> i64 {
        self.grid.at(p).unwrap_or(UNREACHABLE)
    }
}
