//! Linear independence of a set of vectors.
//!
//! Small sets are decided by textbook rules (zero vector, single vector, two
//! vectors that are multiples). Larger sets are decided by reducing the
//! homogeneous system `c₁v₁ + … + cₚvₚ = 0`: any free column means a
//! nontrivial combination exists.

use num_traits::Zero;
use rowstep_integers::Rational;
use tracing::debug;

use crate::classify::PivotAnalysis;
use crate::elimination::{reduce, Reduction};
use crate::error::DimensionError;
use crate::matrix::Matrix;
use crate::parametric::ParametricForm;

/// A rule that contributed to the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndependenceRule {
    /// Vector `index` is the zero vector, so the set is dependent.
    ContainsZeroVector {
        /// Zero-based vector index.
        index: usize,
    },
    /// More vectors than entries per vector, so the set is dependent.
    MoreVectorsThanEntries {
        /// Number of vectors.
        count: usize,
        /// Entries per vector.
        dimension: usize,
    },
    /// A single vector is independent exactly when it is nonzero.
    SingleVector {
        /// Whether that vector is nonzero.
        nonzero: bool,
    },
    /// Two vectors are dependent exactly when one is a multiple of the other.
    TwoVectors {
        /// Whether one is a scalar multiple of the other.
        multiples: bool,
    },
    /// Elimination found a free column, hence a nontrivial combination.
    NontrivialCombination,
    /// Elimination found a pivot in every column: only the trivial solution.
    OnlyTrivialSolution,
}

impl IndependenceRule {
    /// Returns true if the rule on its own shows dependence.
    #[must_use]
    pub fn implies_dependence(&self) -> bool {
        match self {
            Self::ContainsZeroVector { .. }
            | Self::MoreVectorsThanEntries { .. }
            | Self::NontrivialCombination => true,
            Self::SingleVector { nonzero } => !nonzero,
            Self::TwoVectors { multiples } => *multiples,
            Self::OnlyTrivialSolution => false,
        }
    }
}

/// Outcome of an independence check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndependenceReport {
    /// The verdict.
    pub independent: bool,
    /// Rules observed, in the order they were checked.
    pub rules: Vec<IndependenceRule>,
    /// The reduction of `[v₁ … vₚ | 0]`, when elimination was needed.
    pub reduction: Option<Reduction>,
    /// Coefficients of a nontrivial vanishing combination, when elimination
    /// showed dependence. The first free variable is set to 1.
    pub dependency: Option<Vec<Rational>>,
}

/// Decides whether `vectors` are linearly independent.
///
/// # Errors
///
/// Returns [`DimensionError::NoVectors`] for an empty set and
/// [`DimensionError::VectorLength`] when a vector is empty or differs in
/// length from the first.
pub fn check_independence(vectors: &[Vec<Rational>]) -> Result<IndependenceReport, DimensionError> {
    let dimension = vectors.first().ok_or(DimensionError::NoVectors)?.len();
    for (index, v) in vectors.iter().enumerate() {
        if v.len() != dimension || v.is_empty() {
            return Err(DimensionError::VectorLength {
                index,
                expected: dimension.max(1),
                found: v.len(),
            });
        }
    }
    let count = vectors.len();

    let mut rules: Vec<IndependenceRule> = vectors
        .iter()
        .enumerate()
        .filter(|(_, v)| v.iter().all(Zero::is_zero))
        .map(|(index, _)| IndependenceRule::ContainsZeroVector { index })
        .collect();
    if count > dimension {
        rules.push(IndependenceRule::MoreVectorsThanEntries { count, dimension });
    }
    match vectors {
        [v] => rules.push(IndependenceRule::SingleVector {
            nonzero: v.iter().any(|x| !x.is_zero()),
        }),
        [a, b] => rules.push(IndependenceRule::TwoVectors {
            multiples: are_multiples(a, b),
        }),
        _ => {}
    }

    if count <= 2 {
        let independent = !rules.iter().any(IndependenceRule::implies_dependence);
        debug!(count, independent, "independence decided by rules");
        return Ok(IndependenceReport {
            independent,
            rules,
            reduction: None,
            dependency: None,
        });
    }

    let mut system = Matrix::zeros(dimension, count + 1)?;
    for (col, v) in vectors.iter().enumerate() {
        for (row, entry) in v.iter().enumerate() {
            system[(row, col)] = entry.clone();
        }
    }
    let reduction = reduce(system);
    let pivots = PivotAnalysis::of(&reduction.matrix);

    let dependency = if pivots.free_cols.is_empty() {
        rules.push(IndependenceRule::OnlyTrivialSolution);
        None
    } else {
        rules.push(IndependenceRule::NontrivialCombination);
        ParametricForm::build(&reduction.matrix, &pivots, true)
            .directions
            .into_iter()
            .next()
            .map(|(_, direction)| direction)
    };

    let independent = !rules.iter().any(IndependenceRule::implies_dependence);
    debug!(count, dimension, independent, "independence decided by elimination");
    Ok(IndependenceReport {
        independent,
        rules,
        reduction: Some(reduction),
        dependency,
    })
}

/// True if some scalar `k` makes `a = k·b` or `b = k·a` with both nonzero.
///
/// Zero vectors are never reported as multiples here; the zero-vector rule
/// covers them.
fn are_multiples(a: &[Rational], b: &[Rational]) -> bool {
    let mut ratio: Option<Rational> = None;
    for (x, y) in a.iter().zip(b) {
        match (x.is_zero(), y.is_zero()) {
            (true, true) => {}
            (false, false) => {
                let r = x / y;
                if *ratio.get_or_insert_with(|| r.clone()) != r {
                    return false;
                }
            }
            _ => return false,
        }
    }
    ratio.is_some()
}
