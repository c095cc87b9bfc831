//! Classification of a reduced augmented system.
//!
//! Works purely on the numbers in an RREF matrix: pivot and free columns are
//! read off the entries, and free-variable coefficients come straight from the
//! pivot rows.

use num_traits::{One, Zero};
use rowstep_integers::Rational;
use tracing::debug;

use crate::matrix::Matrix;

/// Which columns of an RREF carry pivots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PivotAnalysis {
    /// For each variable column, the row holding its pivot.
    pub pivot_row_for_col: Vec<Option<usize>>,
    /// Pivot columns in ascending order.
    pub pivot_cols: Vec<usize>,
    /// Free columns in ascending order.
    pub free_cols: Vec<usize>,
}

impl PivotAnalysis {
    /// Scans an RREF matrix for pivot columns.
    ///
    /// A column is a pivot column when some row has a 1 in it and every other
    /// row has a 0. Each row claims at most one such column, the first one
    /// from the left, so a row like `[1 1 | 2]` makes column 0 a pivot and
    /// leaves column 1 free.
    #[must_use]
    pub fn of(rref: &Matrix) -> Self {
        let num_vars = rref.num_vars();
        let num_rows = rref.num_rows();
        let mut pivot_row_for_col = vec![None; num_vars];

        for row in 0..num_rows {
            let claimed = (0..num_vars).find(|&col| {
                rref[(row, col)].is_one()
                    && (0..num_rows).all(|other| other == row || rref[(other, col)].is_zero())
            });
            if let Some(col) = claimed {
                pivot_row_for_col[col] = Some(row);
            }
        }

        let (pivot_cols, free_cols): (Vec<usize>, Vec<usize>) =
            (0..num_vars).partition(|&col| pivot_row_for_col[col].is_some());

        Self {
            pivot_row_for_col,
            pivot_cols,
            free_cols,
        }
    }

    /// Returns true if `col` is a free column.
    #[must_use]
    pub fn is_free(&self, col: usize) -> bool {
        self.pivot_row_for_col
            .get(col)
            .is_some_and(Option::is_none)
    }
}

/// How one variable is determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionExpression {
    /// The variable has exactly this value.
    Fixed(Rational),
    /// The variable is a free parameter.
    Free,
    /// `constant + Σ coefficient · x_index` over free variables.
    Affine {
        /// Value when every free variable is zero.
        constant: Rational,
        /// `(coefficient, free variable index)` pairs, coefficients nonzero.
        terms: Vec<(Rational, usize)>,
    },
}

impl SolutionExpression {
    /// Evaluates the expression for a full assignment of the variables.
    ///
    /// Free variables read their own entry in `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is too short for a referenced variable.
    #[must_use]
    pub fn evaluate(&self, own_index: usize, values: &[Rational]) -> Rational {
        match self {
            Self::Fixed(v) => v.clone(),
            Self::Free => values[own_index].clone(),
            Self::Affine { constant, terms } => terms
                .iter()
                .fold(constant.clone(), |acc, (coef, var)| acc + coef * &values[*var]),
        }
    }
}

/// Outcome of classifying a reduced system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// Some row reads `0 = c` with `c ≠ 0`.
    Inconsistent {
        /// First offending row.
        row: usize,
    },
    /// Exactly one solution.
    Unique {
        /// One value per variable.
        values: Vec<Rational>,
        /// Pivot structure of the RREF.
        pivots: PivotAnalysis,
    },
    /// At least one free variable.
    Infinite {
        /// One expression per variable.
        expressions: Vec<SolutionExpression>,
        /// Pivot structure of the RREF.
        pivots: PivotAnalysis,
    },
}

impl Solution {
    /// Returns `"unique"`, `"infinite"` or `"inconsistent"`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Inconsistent { .. } => "inconsistent",
            Self::Unique { .. } => "unique",
            Self::Infinite { .. } => "infinite",
        }
    }

    /// Returns the pivot analysis, absent for inconsistent systems.
    #[must_use]
    pub fn pivots(&self) -> Option<&PivotAnalysis> {
        match self {
            Self::Inconsistent { .. } => None,
            Self::Unique { pivots, .. } | Self::Infinite { pivots, .. } => Some(pivots),
        }
    }

    /// Returns one expression per variable; empty for inconsistent systems.
    #[must_use]
    pub fn expressions(&self) -> Vec<SolutionExpression> {
        match self {
            Self::Inconsistent { .. } => Vec::new(),
            Self::Unique { values, .. } => values
                .iter()
                .cloned()
                .map(SolutionExpression::Fixed)
                .collect(),
            Self::Infinite { expressions, .. } => expressions.clone(),
        }
    }
}

/// Classifies a matrix in reduced row-echelon form.
///
/// Inconsistency is checked first and overrides everything else.
#[must_use]
pub fn classify(rref: &Matrix) -> Solution {
    let last = rref.num_cols() - 1;

    if let Some(row) = (0..rref.num_rows())
        .find(|&row| rref.is_zero_coefficient_row(row) && !rref[(row, last)].is_zero())
    {
        debug!(row, "system is inconsistent");
        return Solution::Inconsistent { row };
    }

    let pivots = PivotAnalysis::of(rref);
    let constant_of = |col: usize| {
        pivots.pivot_row_for_col[col].map_or_else(Rational::zero, |row| rref[(row, last)].clone())
    };

    if pivots.free_cols.is_empty() {
        let values = (0..rref.num_vars()).map(constant_of).collect();
        debug!(vars = rref.num_vars(), "system has a unique solution");
        return Solution::Unique { values, pivots };
    }

    let expressions = pivots
        .pivot_row_for_col
        .iter()
        .map(|pivot_row| match *pivot_row {
            None => SolutionExpression::Free,
            Some(row) => SolutionExpression::Affine {
                constant: rref[(row, last)].clone(),
                terms: pivots
                    .free_cols
                    .iter()
                    .filter(|&&free| !rref[(row, free)].is_zero())
                    .map(|&free| (-&rref[(row, free)], free))
                    .collect(),
            },
        })
        .collect();

    debug!(
        free = pivots.free_cols.len(),
        pivots = pivots.pivot_cols.len(),
        "system has infinitely many solutions"
    );
    Solution::Infinite {
        expressions,
        pivots,
    }
}
