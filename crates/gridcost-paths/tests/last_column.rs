//! Properties of the last-column search, checked on seeded random grids.

use gridcost_core::{CostGrid, Point};
use gridcost_paths::{
    CellCostPather, PathRange, UNREACHABLE, min_path_sum_to_last_column, solve_to_last_column,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: i64, cols: i64, max_cost: i64) -> CostGrid {
    let cells = (0..rows * cols)
        .map(|_| rng.random_range(0..=max_cost))
        .collect();
    CostGrid::from_row_major(rows, cols, cells).unwrap()
}

/// Exhaustive minimum over every simple path from (0,0) to the last column.
fn brute_force(grid: &CostGrid) -> Option<i64> {
    fn walk(grid: &CostGrid, p: Point, sum: i64, seen: &mut Vec<Point>, best: &mut Option<i64>) {
        if p.x == grid.cols() - 1 {
            *best = Some(best.map_or(sum, |b| b.min(sum)));
            return;
        }
        for n in p.neighbors_4() {
            let Some(c) = grid.at(n) else { continue };
            if seen.contains(&n) {
                continue;
            }
            seen.push(n);
            walk(grid, n, sum + c, seen, best);
            seen.pop();
        }
    }

    let start = grid.at(Point::ZERO)?;
    let mut best = None;
    walk(grid, Point::ZERO, start, &mut vec![Point::ZERO], &mut best);
    best
}

#[test]
fn concrete_scenarios() {
    let g = CostGrid::from_rows(&[&[1, 2], &[1, 1]]).unwrap();
    assert_eq!(min_path_sum_to_last_column(&g), Some(3));

    let g = CostGrid::from_rows(&[&[5]]).unwrap();
    assert_eq!(min_path_sum_to_last_column(&g), Some(5));

    let g = CostGrid::from_rows(&[&[1, 99], &[2, 1], &[1, 1]]).unwrap();
    assert_eq!(min_path_sum_to_last_column(&g), Some(4));

    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let g = CostGrid::from_row_major(rows, cols, vec![]).unwrap();
        assert_eq!(min_path_sum_to_last_column(&g), None);
    }
}

#[test]
fn single_row_sums_the_row() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let cols = rng.random_range(1..12);
        let g = random_grid(&mut rng, 1, cols, 100);
        let total: i64 = g.row(0).iter().sum();
        assert_eq!(min_path_sum_to_last_column(&g), Some(total));
    }
}

#[test]
fn single_column_is_the_start_cell() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let rows = rng.random_range(1..12);
        let g = random_grid(&mut rng, rows, 1, 100);
        let sol = solve_to_last_column(&g).unwrap();
        assert_eq!(Some(sol.cost), g.at(Point::ZERO));
        assert_eq!(sol.path, vec![Point::ZERO]);
    }
}

#[test]
fn matches_brute_force_on_small_grids() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let rows = rng.random_range(1..4);
        let cols = rng.random_range(1..5);
        let g = random_grid(&mut rng, rows, cols, 9);
        assert_eq!(min_path_sum_to_last_column(&g), brute_force(&g), "grid:\n{g}");
    }
}

#[test]
fn matches_full_cost_map() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..100 {
        let rows = rng.random_range(1..15);
        let cols = rng.random_range(1..15);
        let g = random_grid(&mut rng, rows, cols, 50);

        let mut pr = PathRange::new(g.range());
        pr.dijkstra_map(&CellCostPather::new(&g), &[Point::ZERO], UNREACHABLE);
        let expected = g
            .range()
            .last_column()
            .iter()
            .map(|p| pr.dijkstra_at(p))
            .min();

        assert_eq!(min_path_sum_to_last_column(&g), expected, "grid:\n{g}");
    }
}

#[test]
fn path_is_connected_and_sums_to_cost() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let rows = rng.random_range(1..10);
        let cols = rng.random_range(1..10);
        let g = random_grid(&mut rng, rows, cols, 20);
        let sol = solve_to_last_column(&g).unwrap();

        assert_eq!(sol.path.first(), Some(&Point::ZERO));
        assert_eq!(sol.path.last(), Some(&sol.end));
        assert_eq!(sol.end.x, g.cols() - 1);
        assert!(sol.path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        // Only the end cell may sit in the last column.
        assert!(sol.path[..sol.path.len() - 1].iter().all(|p| p.x < g.cols() - 1));
        let sum: i64 = sol.path.iter().filter_map(|&p| g.at(p)).sum();
        assert_eq!(sum, sol.cost);
    }
}

#[test]
fn raising_a_cell_never_lowers_the_result() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..200 {
        let rows = rng.random_range(1..8);
        let cols = rng.random_range(1..8);
        let g = random_grid(&mut rng, rows, cols, 30);
        let before = min_path_sum_to_last_column(&g).unwrap();

        let p = Point::new(
            rng.random_range(0..g.cols()),
            rng.random_range(0..g.rows()),
        );
        let raised = g.at(p).unwrap() + rng.random_range(1..50);
        let h = g.with_cell(p, raised).unwrap();
        let after = min_path_sum_to_last_column(&h).unwrap();

        assert!(after >= before, "raising {p} lowered {before} to {after}");
    }
}

#[test]
fn solving_twice_gives_the_same_answer() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut shared = PathRange::new(gridcost_core::Range::default());
    for _ in 0..50 {
        let rows = rng.random_range(1..10);
        let cols = rng.random_range(1..10);
        let g = random_grid(&mut rng, rows, cols, 40);

        let first = solve_to_last_column(&g);
        let second = solve_to_last_column(&g);
        let reused = shared.solve_to_last_column(&g);
        let reused_again = shared.solve_to_last_column(&g);
        assert_eq!(first, second);
        assert_eq!(first, reused);
        assert_eq!(reused, reused_again);
    }
}

#[test]
fn large_costs_do_not_overflow() {
    let max = gridcost_core::MAX_CELL_COST;
    let g = CostGrid::from_row_major(50, 50, vec![max; 2500]).unwrap();
    assert_eq!(min_path_sum_to_last_column(&g), Some(50 * max));
}
