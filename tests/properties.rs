use petri_lib::model::engine;
use petri_lib::model::grid::{CellState, GridState};
use proptest::prelude::*;

prop_compose! {
    fn arb_grid()
        (rows in 1usize..8, columns in 1usize..8)
        (cells in prop::collection::vec(any::<bool>(), rows * columns),
         rows in Just(rows), columns in Just(columns))
        -> GridState
    {
        let mut grid = GridState::new(rows, columns).expect("valid dimensions");
        for (idx, alive) in cells.iter().enumerate() {
            if *alive {
                grid.set(idx / columns, idx % columns, CellState::Alive)
                    .expect("seed in bounds");
            }
        }
        grid
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_neighbor_count_is_bounded(grid in arb_grid()) {
        let snapshot = grid.snapshot();
        let live = grid.live_cells();
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let count = engine::count_live_neighbors(&snapshot, row, col);
                prop_assert!(count <= 8);
                prop_assert!(count <= live);
            }
        }
    }

    #[test]
    fn prop_neighbor_count_ignores_the_cell_itself(grid in arb_grid()) {
        // Flipping a cell never changes its own neighbor count.
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let mut flipped = grid.clone();
                flipped.toggle(row, col).expect("in bounds");
                prop_assert_eq!(
                    engine::count_live_neighbors(&grid.snapshot(), row, col),
                    engine::count_live_neighbors(&flipped.snapshot(), row, col),
                );
            }
        }
    }

    #[test]
    fn prop_step_is_deterministic(grid in arb_grid()) {
        let mut a = grid.clone();
        let mut b = grid;
        let out_a = engine::step(&mut a);
        let out_b = engine::step(&mut b);
        prop_assert_eq!(out_a.after, out_b.after);
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn prop_step_preserves_dimensions(mut grid in arb_grid()) {
        let rows = grid.rows();
        let columns = grid.columns();
        let outcome = engine::step(&mut grid);
        prop_assert_eq!(grid.rows(), rows);
        prop_assert_eq!(grid.columns(), columns);
        prop_assert_eq!(outcome.before.rows(), rows);
        prop_assert_eq!(outcome.after.columns(), columns);
    }

    #[test]
    fn prop_all_dead_is_a_fixed_point(rows in 1usize..10, columns in 1usize..10) {
        let mut grid = GridState::new(rows, columns).expect("valid dimensions");
        let outcome = engine::step(&mut grid);
        prop_assert!(!outcome.changed());
        prop_assert!(grid.is_all_dead());
    }

    #[test]
    fn prop_double_toggle_is_identity(
        grid in arb_grid(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let mut grid = grid;
        let row = row_seed % grid.rows();
        let col = col_seed % grid.columns();
        let before = grid.snapshot();
        grid.toggle(row, col).expect("in bounds");
        grid.toggle(row, col).expect("in bounds");
        prop_assert_eq!(grid.snapshot(), before);
    }
}
