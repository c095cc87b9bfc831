//! Parametric vector form of an infinite solution set.
//!
//! `x = p + Σ t_l · d_l`, one direction `d_l` per free variable `x_l`.

use num_traits::{One, Zero};
use rowstep_integers::Rational;

use crate::classify::{PivotAnalysis, Solution};
use crate::matrix::Matrix;

/// A particular solution plus one direction vector per free variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametricForm {
    /// The solution with every free variable set to zero.
    pub particular: Vec<Rational>,
    /// `(free variable index, direction vector)` pairs, by ascending index.
    pub directions: Vec<(usize, Vec<Rational>)>,
    /// True when the original system's constants were all zero. The
    /// particular vector is then the zero vector and is usually not shown.
    pub homogeneous: bool,
}

impl ParametricForm {
    /// Builds the parametric form from an RREF and its pivot analysis.
    ///
    /// `homogeneous` describes the system before reduction.
    #[must_use]
    pub fn build(rref: &Matrix, pivots: &PivotAnalysis, homogeneous: bool) -> Self {
        let num_vars = rref.num_vars();
        let last = rref.num_cols() - 1;

        let particular = pivots
            .pivot_row_for_col
            .iter()
            .map(|row| row.map_or_else(Rational::zero, |row| rref[(row, last)].clone()))
            .collect();

        let directions = pivots
            .free_cols
            .iter()
            .map(|&free| {
                let mut direction = vec![Rational::zero(); num_vars];
                direction[free] = Rational::one();
                for &col in &pivots.pivot_cols {
                    if let Some(row) = pivots.pivot_row_for_col[col] {
                        direction[col] = -&rref[(row, free)];
                    }
                }
                (free, direction)
            })
            .collect();

        Self {
            particular,
            directions,
            homogeneous,
        }
    }

    /// Builds the parametric form for an infinite solution set.
    ///
    /// Returns `None` unless `solution` is [`Solution::Infinite`].
    #[must_use]
    pub fn from_solution(solution: &Solution, rref: &Matrix, original: &Matrix) -> Option<Self> {
        match solution {
            Solution::Infinite { pivots, .. } => {
                Some(Self::build(rref, pivots, original.is_homogeneous()))
            }
            _ => None,
        }
    }

    /// Free variable indices, ascending.
    pub fn free_vars(&self) -> impl Iterator<Item = usize> + '_ {
        self.directions.iter().map(|(free, _)| *free)
    }

    /// Evaluates `particular + Σ params[k] · directions[k]`.
    ///
    /// # Panics
    ///
    /// Panics if `params` does not have one entry per free variable.
    #[must_use]
    pub fn evaluate(&self, params: &[Rational]) -> Vec<Rational> {
        assert_eq!(params.len(), self.directions.len(), "one parameter per free variable");
        let mut x = self.particular.clone();
        for (t, (_, direction)) in params.iter().zip(&self.directions) {
            for (xi, di) in x.iter_mut().zip(direction) {
                *xi = &*xi + &(t * di);
            }
        }
        x
    }
}
