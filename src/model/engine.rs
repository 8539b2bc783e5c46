//! The step function: one synchronous application of the birth/death rule
//! to every cell, evaluated against a single pre-step snapshot.

use crate::model::grid::{CellState, GridSnapshot, GridState};

/// Pre- and post-step snapshots of one completed engine step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub before: GridSnapshot,
    pub after: GridSnapshot,
}

impl StepOutcome {
    /// Whether the step changed the grid at all.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Counts Alive cells in the Moore neighborhood of `(row, col)`.
///
/// The cell itself is excluded. Positions outside the grid do not
/// contribute: there is no wraparound, so an edge or corner cell simply
/// has fewer than 8 candidate neighbors.
pub fn count_live_neighbors(snapshot: &GridSnapshot, row: usize, col: usize) -> usize {
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if nr < 0 || nc < 0 {
                continue;
            }
            if snapshot.is_alive(nr as usize, nc as usize) {
                count += 1;
            }
        }
    }
    count
}

/// Advances the grid by one generation.
///
/// Every next-state is computed from the snapshot taken on entry, then
/// written back wholesale, so no cell is ever evaluated against a
/// partially updated grid. The neighbor count is computed once per cell
/// and reused for both rule branches.
pub fn step(grid: &mut GridState) -> StepOutcome {
    let before = grid.snapshot();
    let mut next = Vec::with_capacity(grid.rows() * grid.columns());

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let neighbors = count_live_neighbors(&before, row, col);
            let state = match (before.is_alive(row, col), neighbors) {
                (true, 2) | (true, 3) => CellState::Alive, // Survival
                (false, 3) => CellState::Alive,            // Birth
                _ => CellState::Dead,
            };
            next.push(state);
        }
    }

    grid.apply(next);
    StepOutcome {
        before,
        after: grid.snapshot(),
    }
}
