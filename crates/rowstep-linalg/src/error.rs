//! Errors raised before a matrix ever reaches the engine.

use rowstep_integers::RationalError;
use thiserror::Error;

/// Shape problems with matrix or vector input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// No rows were supplied.
    #[error("matrix has no rows")]
    NoRows,

    /// The first row has no entries.
    #[error("matrix has no columns")]
    NoColumns,

    /// A row differs in length from the first row.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// An augmented system needs at least one variable column.
    #[error("augmented matrix needs at least 2 columns, found {0}")]
    NoVariables(usize),

    /// No vectors were supplied to the independence check.
    #[error("vector set is empty")]
    NoVectors,

    /// Vectors in one set must share a length, and that length must be positive.
    #[error("vector {index} has length {found}, expected {expected}")]
    VectorLength {
        /// Zero-based vector index.
        index: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },
}

/// Errors from building a matrix out of raw cell text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The grid is not a valid rectangle.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// A cell is not a rational literal.
    #[error("cell ({row}, {col}): `{text}` is not a number")]
    Parse {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The offending text.
        text: String,
    },

    /// A cell is a fraction with a zero denominator.
    #[error("cell ({row}, {col}): division by zero")]
    DivisionByZero {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
}

impl MatrixError {
    /// Attaches a cell position to a rational parsing failure.
    #[must_use]
    pub fn at_cell(row: usize, col: usize, error: RationalError) -> Self {
        match error {
            RationalError::InvalidLiteral(text) => Self::Parse { row, col, text },
            RationalError::DivisionByZero => Self::DivisionByZero { row, col },
        }
    }
}
