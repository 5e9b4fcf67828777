//! Early-exit uniform-cost search.

use std::collections::BinaryHeap;

use gridcost_core::Point;

use crate::PathRange;
use crate::pathrange::{NodeRef, UNREACHABLE, next_generation};
use crate::traits::WeightedPather;

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Cumulative cost, including the start cell's entry cost.
    pub cost: i64,
    /// The goal cell the search stopped at.
    pub end: Point,
    /// Every cell from the start to `end`, inclusive.
    pub path: Vec<Point>,
}

impl PathRange {
    /// Find the cheapest path from `start` to any cell accepted by `is_goal`.
    ///
    /// The search is a uniform-cost search with lazy deletion: every
    /// relaxation pushes a new frontier entry, and entries whose cost no
    /// longer matches the distance table are skipped when popped. It stops
    /// at the first goal cell popped, which is optimal as long as all costs
    /// are non-negative.
    ///
    /// Returns `None` if `start` is outside the range or no goal is
    /// reachable.
    pub fn cheapest_path<P, G>(&mut self, pather: &P, start: Point, is_goal: G) -> Option<Solution>
    where
        P: WeightedPather,
        G: Fn(Point) -> bool,
    {
        let start_idx = self.idx(start)?;
        let cur_gen = next_generation(&mut self.search_nodes, &mut self.search_generation);

        let entry = pather.entry_cost(start);
        {
            let node = &mut self.search_nodes[start_idx];
            node.g = entry;
            node.parent = usize::MAX;
            node.generation = cur_gen;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            cost: entry,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let (mut pushed, mut stale, mut expanded) = (1usize, 0usize, 0usize);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;
            let cn = &self.search_nodes[ci];
            if cn.generation != cur_gen || current.cost != cn.g {
                stale += 1;
                log::trace!("skipping stale entry {} at cost {}", self.point(ci), current.cost);
                continue;
            }

            let cp = self.point(ci);
            if is_goal(cp) {
                break 'search Some((ci, current.cost));
            }
            expanded += 1;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current.cost.saturating_add(pather.cost(cp, np));

                let n = &mut self.search_nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.parent = usize::MAX;
                }
                if tentative >= n.g {
                    continue;
                }

                n.g = tentative;
                n.parent = ci;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
                pushed += 1;
            }
        };

        self.nbuf = nbuf;

        let Some((goal_idx, cost)) = found else {
            log::debug!(
                "no goal reachable from {start}: expanded {expanded}, pushed {pushed}, stale {stale}"
            );
            return None;
        };

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.search_nodes[ci].parent;
        }
        path.reverse();

        let end = self.point(goal_idx);
        log::debug!(
            "reached {end} at cost {cost}: expanded {expanded}, pushed {pushed}, stale {stale}"
        );
        Some(Solution { cost, end, path })
    }
}
