use gridcost_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted edges.
///
/// Costs must be non-negative; the early-exit search relies on it.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Point, to: Point) -> i64;

    /// Cost charged for starting a path on `p`.
    fn entry_cost(&self, _p: Point) -> i64 {
        0
    }
}
