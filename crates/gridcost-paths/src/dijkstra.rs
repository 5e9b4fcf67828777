use std::collections::BinaryHeap;

use gridcost_core::Point;

use crate::PathRange;
use crate::pathrange::{Node, NodeRef, PathNode, UNREACHABLE, next_generation};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at its entry cost. Unlike
    /// [`cheapest_path`](Self::cheapest_path) there is no goal: expansion
    /// continues until the frontier is exhausted or the cumulative cost
    /// exceeds `max_cost`. Returns every settled node in order of increasing
    /// cost.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_cost: i64,
    ) -> &[PathNode] {
        self.dijkstra_results.clear();
        let len = self.rng.len();
        if self.dijkstra_nodes.len() < len {
            self.dijkstra_nodes.clear();
            self.dijkstra_nodes.resize(len, Node::default());
            self.dijkstra_generation = 0;
        }
        let cur_gen = next_generation(&mut self.dijkstra_nodes, &mut self.dijkstra_generation);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        // Seed sources.
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            let entry = pather.entry_cost(src);
            if entry > max_cost {
                continue;
            }
            let n = &mut self.dijkstra_nodes[si];
            if n.generation == cur_gen && n.g <= entry {
                continue;
            }
            n.g = entry;
            n.generation = cur_gen;
            open.push(NodeRef {
                idx: si,
                cost: entry,
            });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if current.cost != self.dijkstra_nodes[ci].g {
                continue;
            }

            let cp = self.point(ci);
            self.dijkstra_results.push(PathNode {
                pos: cp,
                cost: current.cost,
            });

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current.cost.saturating_add(pather.cost(cp, np));
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.dijkstra_nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }
                if tentative >= n.g {
                    continue;
                }

                n.g = tentative;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "cost map from {} source(s) settled {} cells",
            sources.len(),
            self.dijkstra_results.len()
        );
        &self.dijkstra_results
    }

    /// Query the Dijkstra cost at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `dijkstra_map` call.
    pub fn dijkstra_at(&self, p: Point) -> i64 {
        match self.idx(p).and_then(|i| self.dijkstra_nodes.get(i)) {
            Some(n) if n.generation == self.dijkstra_generation => n.g,
            _ => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellCostPather;
    use gridcost_core::CostGrid;

    #[test]
    fn full_map_from_origin() {
        let g = CostGrid::from_rows(&[&[1, 2], &[1, 1]]).unwrap();
        let mut pr = PathRange::new(g.range());
        let nodes = pr.dijkstra_map(&CellCostPather::new(&g), &[Point::ZERO], UNREACHABLE);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], PathNode { pos: Point::ZERO, cost: 1 });
        assert!(nodes.windows(2).all(|w| w[0].cost <= w[1].cost));
        assert_eq!(pr.dijkstra_at(Point::new(0, 1)), 2);
        assert_eq!(pr.dijkstra_at(Point::new(1, 0)), 3);
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), 3);
        assert_eq!(pr.dijkstra_at(Point::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn max_cost_limits_expansion() {
        let g = CostGrid::from_rows(&[&[1, 1, 1, 1]]).unwrap();
        let mut pr = PathRange::new(g.range());
        let nodes = pr.dijkstra_map(&CellCostPather::new(&g), &[Point::ZERO], 2);
        assert_eq!(nodes.len(), 2);
        assert_eq!(pr.dijkstra_at(Point::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn multiple_sources() {
        let g = CostGrid::from_rows(&[&[1, 5, 5, 1]]).unwrap();
        let mut pr = PathRange::new(g.range());
        pr.dijkstra_map(
            &CellCostPather::new(&g),
            &[Point::ZERO, Point::new(3, 0)],
            UNREACHABLE,
        );
        assert_eq!(pr.dijkstra_at(Point::new(1, 0)), 6);
        assert_eq!(pr.dijkstra_at(Point::new(2, 0)), 6);
    }

    #[test]
    fn previous_map_is_forgotten() {
        let g = CostGrid::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
        let mut pr = PathRange::new(g.range());
        let pather = CellCostPather::new(&g);
        pr.dijkstra_map(&pather, &[Point::ZERO], UNREACHABLE);
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), 3);
        pr.dijkstra_map(&pather, &[Point::ZERO], 1);
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), UNREACHABLE);
        assert_eq!(pr.dijkstra_at(Point::ZERO), 1);
    }

    #[test]
    fn table_is_allocated_on_first_map() {
        let g = CostGrid::from_rows(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
        let mut pr = PathRange::new(g.range());
        assert!(pr.dijkstra_nodes.is_empty());
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), UNREACHABLE);

        pr.solve_to_last_column(&g);
        assert!(pr.dijkstra_nodes.is_empty());

        pr.dijkstra_map(&CellCostPather::new(&g), &[Point::ZERO], UNREACHABLE);
        assert_eq!(pr.dijkstra_nodes.len(), 6);
        assert_eq!(pr.dijkstra_at(Point::new(1, 1)), 8);
    }

    #[test]
    fn table_grows_after_set_range() {
        let small = CostGrid::from_rows(&[&[1]]).unwrap();
        let big = CostGrid::from_rows(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]).unwrap();
        let mut pr = PathRange::new(small.range());
        pr.dijkstra_map(&CellCostPather::new(&small), &[Point::ZERO], UNREACHABLE);
        assert_eq!(pr.dijkstra_nodes.len(), 1);

        pr.set_range(big.range());
        pr.dijkstra_map(&CellCostPather::new(&big), &[Point::ZERO], UNREACHABLE);
        assert_eq!(pr.dijkstra_nodes.len(), 9);
        assert_eq!(pr.dijkstra_at(Point::new(2, 2)), 5);
    }
}
