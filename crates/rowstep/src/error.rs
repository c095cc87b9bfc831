//! Errors surfaced to callers of a solve.

use rowstep_linalg::{DimensionError, MatrixError};
use thiserror::Error;

/// Every way a solve can be rejected. All of them happen before elimination
/// starts; the engine itself never fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A cell is not a rational literal.
    #[error("invalid number `{text}` in row {}, column {}", row + 1, col + 1)]
    Parse {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The offending text.
        text: String,
    },

    /// The grid or vector set has the wrong shape.
    #[error("invalid dimensions: {0}")]
    Dimension(#[from] DimensionError),

    /// A cell is a fraction with a zero denominator.
    #[error("division by zero in row {}, column {}", row + 1, col + 1)]
    DivisionByZero {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
}

impl From<MatrixError> for SolveError {
    fn from(error: MatrixError) -> Self {
        match error {
            MatrixError::Dimension(e) => Self::Dimension(e),
            MatrixError::Parse { row, col, text } => Self::Parse { row, col, text },
            MatrixError::DivisionByZero { row, col } => Self::DivisionByZero { row, col },
        }
    }
}
