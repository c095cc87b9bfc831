//! Batch reduction of independent systems.
//!
//! Each reduction is a pure function of its input, so a batch of unrelated
//! matrices can be spread across rayon's work-stealing pool. Results are
//! identical to reducing each matrix on its own.

use rayon::prelude::*;
use tracing::debug;

use crate::classify::{classify, Solution};
use crate::elimination::{reduce, Reduction};
use crate::matrix::Matrix;

/// Configuration for batch reduction.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum batch size before work is handed to rayon.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 8,
        }
    }
}

/// Reduces every matrix in `matrices`, preserving order.
#[must_use]
pub fn reduce_all(matrices: Vec<Matrix>, config: &BatchConfig) -> Vec<Reduction> {
    if matrices.len() < config.parallel_threshold {
        // Fall back to sequential for small batches
        return matrices.into_iter().map(reduce).collect();
    }
    debug!(batch = matrices.len(), "reducing batch in parallel");
    matrices.into_par_iter().map(reduce).collect()
}

/// Reduces and classifies every matrix in `matrices`, preserving order.
#[must_use]
pub fn classify_all(matrices: Vec<Matrix>, config: &BatchConfig) -> Vec<(Reduction, Solution)> {
    reduce_all(matrices, config)
        .into_iter()
        .map(|reduction| {
            let solution = classify(&reduction.matrix);
            (reduction, solution)
        })
        .collect()
}
