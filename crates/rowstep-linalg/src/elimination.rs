//! Gauss-Jordan elimination with a replayable step log.
//!
//! [`reduce`] brings an augmented matrix to reduced row-echelon form and
//! records every row operation together with a snapshot of the matrix right
//! after it. The log is what a step-by-step view replays; the final matrix is
//! what classification runs on.
//!
//! # Algorithm
//!
//! With a pivot row pointer `p` starting at 0, for every column `c` except the
//! constant column:
//!
//! 1. Find the first row at or below `p` with a nonzero entry in `c`. If there
//!    is none, `c` is a free column and the scan moves on.
//! 2. Swap that row into position `p` if needed.
//! 3. Divide row `p` by its pivot unless the pivot is already 1.
//! 4. Subtract the right multiple of row `p` from every other row with a
//!    nonzero entry in `c`.
//! 5. Advance `p`, stopping once every row holds a pivot.
//!
//! Pivot selection is "first nonzero", never "largest magnitude": the step
//! sequence is fully determined by the input. Operations that would not change
//! the matrix are never recorded.

use std::fmt;

use num_traits::{One, Zero};
use rowstep_integers::Rational;
use tracing::{debug, trace};

use crate::matrix::Matrix;

/// A single elementary row operation. Row indices are zero-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowOperation {
    /// Exchange two rows.
    Swap {
        /// The pivot row receiving the nonzero entry.
        first: usize,
        /// The row it came from.
        second: usize,
    },
    /// Divide a row by its pivot value so the pivot becomes 1.
    Scale {
        /// The pivot row.
        row: usize,
        /// The former pivot value.
        divisor: Rational,
    },
    /// `target -= factor * pivot_row`.
    Combine {
        /// The row being cleared.
        target: usize,
        /// The pivot row used to clear it.
        pivot_row: usize,
        /// The target's entry in the pivot column before the operation.
        factor: Rational,
    },
}

/// Renders the operation title with one-based row labels, e.g. `F2 ↔ F3`,
/// `F1 → F1/2` or `F3 → F3 - (4)F1`.
impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.titled("F"), f)
    }
}

impl RowOperation {
    /// Returns a [`Display`](fmt::Display) adapter that labels rows with
    /// `prefix`.
    #[must_use]
    pub fn titled<'a>(&'a self, prefix: &'a str) -> Title<'a> {
        Title {
            operation: self,
            prefix,
        }
    }

    /// Returns the title with a custom row label prefix.
    #[must_use]
    pub fn title_with_prefix(&self, prefix: &str) -> String {
        self.titled(prefix).to_string()
    }
}

/// Operation title with a chosen row label prefix.
///
/// A scale divisor that is negative or fractional is parenthesized, so
/// `F2 → F2/(-2)` and `F1 → F1/(1/2)` cannot be misread.
#[derive(Clone, Copy, Debug)]
pub struct Title<'a> {
    operation: &'a RowOperation,
    prefix: &'a str,
}

impl fmt::Display for Title<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        match self.operation {
            RowOperation::Swap { first, second } => {
                write!(f, "{prefix}{} \u{2194} {prefix}{}", first + 1, second + 1)
            }
            RowOperation::Scale { row, divisor } => {
                let r = row + 1;
                if divisor.is_integer() && !divisor.is_negative() {
                    write!(f, "{prefix}{r} \u{2192} {prefix}{r}/{divisor}")
                } else {
                    write!(f, "{prefix}{r} \u{2192} {prefix}{r}/({divisor})")
                }
            }
            RowOperation::Combine {
                target,
                pivot_row,
                factor,
            } => write!(
                f,
                "{prefix}{t} \u{2192} {prefix}{t} - ({factor}){prefix}{p}",
                t = target + 1,
                p = pivot_row + 1
            ),
        }
    }
}

/// Human-readable description of a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// Operation title such as `F1 → F1/2`.
    pub title: String,
    /// Why the operation was performed.
    pub rationale: String,
}

/// One recorded elimination step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliminationStep {
    /// The operation that was applied.
    pub operation: RowOperation,
    /// The pivot column (zero-based) being processed.
    pub pivot_col: usize,
    /// The full matrix immediately after the operation.
    pub snapshot: Matrix,
}

impl EliminationStep {
    /// Returns the step's title and rationale.
    #[must_use]
    pub fn annotation(&self) -> Annotation {
        Annotation {
            title: self.operation.to_string(),
            rationale: self.rationale(),
        }
    }

    /// Explains the purpose of the step, naming the pivot column one-based.
    #[must_use]
    pub fn rationale(&self) -> String {
        let col = self.pivot_col + 1;
        match self.operation {
            RowOperation::Swap { .. } => {
                format!("row swap to bring a nonzero pivot into column {col}")
            }
            RowOperation::Scale { .. } => {
                format!("normalization: the pivot in column {col} becomes 1")
            }
            RowOperation::Combine { .. } => {
                format!("the entry in column {col} is cleared using the pivot row")
            }
        }
    }

    /// For a `Combine` step, reconstructs the target row as it was before the
    /// operation (`after + factor * pivot_row`).
    #[must_use]
    pub fn combine_source_row(&self) -> Option<Vec<Rational>> {
        let RowOperation::Combine {
            target,
            pivot_row,
            ref factor,
        } = self.operation
        else {
            return None;
        };
        Some(
            self.snapshot
                .row(target)
                .iter()
                .zip(self.snapshot.row(pivot_row))
                .map(|(after, pivot)| after + &(pivot * factor))
                .collect(),
        )
    }
}

/// Result of a reduction: the RREF and the steps that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// The matrix in reduced row-echelon form.
    pub matrix: Matrix,
    /// Every recorded operation, in order.
    pub steps: Vec<EliminationStep>,
    /// Pivot columns in the order they were found (one per pivot row).
    pub pivot_cols: Vec<usize>,
}

impl Reduction {
    /// Number of pivots found, i.e. the rank of the coefficient block.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivot_cols.len()
    }
}

/// Reduces `matrix` to reduced row-echelon form, recording every step.
///
/// Takes ownership of the input; callers that still need the original clone
/// it first. The constant (last) column is never used as a pivot column.
/// This cannot fail: every division is by a pivot that was checked nonzero.
#[must_use]
pub fn reduce(mut matrix: Matrix) -> Reduction {
    let num_rows = matrix.num_rows();
    let num_cols = matrix.num_cols();
    let mut steps = Vec::new();
    let mut pivot_cols = Vec::new();
    let mut p = 0;

    for col in 0..num_cols - 1 {
        let Some(found) = (p..num_rows).find(|&row| !matrix[(row, col)].is_zero()) else {
            trace!(col, "no pivot in column");
            continue;
        };

        if found != p {
            matrix.swap_rows(p, found);
            push_step(
                &mut steps,
                RowOperation::Swap {
                    first: p,
                    second: found,
                },
                col,
                &matrix,
            );
        }

        let pivot = matrix[(p, col)].clone();
        if pivot.is_zero() {
            // Unreachable given the scan above.
            p += 1;
            if p >= num_rows {
                break;
            }
            continue;
        }

        if !pivot.is_one() {
            matrix.divide_row(p, &pivot);
            push_step(
                &mut steps,
                RowOperation::Scale {
                    row: p,
                    divisor: pivot,
                },
                col,
                &matrix,
            );
        }

        for target in 0..num_rows {
            if target == p || matrix[(target, col)].is_zero() {
                continue;
            }
            let factor = matrix[(target, col)].clone();
            matrix.sub_scaled_row(target, p, &factor);
            push_step(
                &mut steps,
                RowOperation::Combine {
                    target,
                    pivot_row: p,
                    factor,
                },
                col,
                &matrix,
            );
        }

        pivot_cols.push(col);
        p += 1;
        if p >= num_rows {
            break;
        }
    }

    debug!(
        rows = num_rows,
        cols = num_cols,
        steps = steps.len(),
        rank = pivot_cols.len(),
        "gauss-jordan reduction finished"
    );

    Reduction {
        matrix,
        steps,
        pivot_cols,
    }
}

fn push_step(
    steps: &mut Vec<EliminationStep>,
    operation: RowOperation,
    pivot_col: usize,
    matrix: &Matrix,
) {
    trace!(step = steps.len(), op = %operation, "row operation");
    steps.push(EliminationStep {
        operation,
        pivot_col,
        snapshot: matrix.clone(),
    });
}
