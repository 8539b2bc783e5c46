use serde::{Deserialize, Serialize};

use crate::model::error::{Result, SimError};

/// State of a single grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub fn flipped(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// Fixed-size rectangular field of cells, stored row-major.
///
/// Dimensions are set at construction and never change. Coordinates are
/// zero-based `(row, col)` with `0 <= row < rows`, `0 <= col < columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl GridState {
    /// Creates a grid with every cell Dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(SimError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![CellState::Dead; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.columns {
            return Err(SimError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        Ok(self.cells[self.index(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Flips the cell between Alive and Dead and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState> {
        let idx = self.index(row, col)?;
        self.cells[idx] = self.cells[idx].flipped();
        Ok(self.cells[idx])
    }

    /// Resets every cell to Dead.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Immutable copy of all cell states at this instant.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.clone(),
        }
    }

    pub fn is_all_dead(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Overwrites every cell at once. `cells` must be a full row-major
    /// field for this grid's dimensions.
    pub(crate) fn apply(&mut self, cells: Vec<CellState>) {
        debug_assert_eq!(cells.len(), self.rows * self.columns);
        self.cells = cells;
    }
}

/// Immutable copy of a grid's cell states at one instant.
///
/// Snapshots are the read-only input to a step's neighbor counting and the
/// retained "previous state" for stall detection; two snapshots compare
/// equal iff every cell matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl GridSnapshot {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell state at `(row, col)`, or None outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.rows && col < self.columns {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(CellState::is_alive)
    }

    pub fn is_all_dead(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }
}
