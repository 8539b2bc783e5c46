//! Error types for the simulation model.

use thiserror::Error;

/// Main error type for grid and controller operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Grid construction with zero rows or columns
    #[error("invalid grid dimensions: {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Cell access outside the grid extent
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    /// Interactive editing attempted while auto-advance is active
    #[error("grid cannot be edited while updates are running")]
    EditWhileRunning,
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidDimensions { rows: 0, columns: 40 };
        assert_eq!(err.to_string(), "invalid grid dimensions: 0x40");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SimError::OutOfBounds {
            row: 40,
            col: 3,
            rows: 40,
            columns: 40,
        };
        assert!(err.to_string().contains("(40, 3)"));
        assert!(err.to_string().contains("40x40"));
    }
}
