//! # rowstep-linalg
//!
//! Exact Gauss-Jordan elimination over the rationals, with every row
//! operation recorded so it can be replayed.
//!
//! This crate provides:
//! - A rectangular augmented matrix model (`Matrix`)
//! - The elimination engine producing the RREF plus a step log
//! - Classification of the reduced system (unique, infinite, inconsistent)
//! - The parametric vector form of infinite solution sets
//! - A linear independence check built on the same engine
//! - Batch reduction of many independent systems via rayon
//!
//! ## Pivot Selection
//!
//! The engine always takes the first nonzero entry at or below the current
//! pivot row. Two runs on the same input produce the same step sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod elimination;
pub mod error;
pub mod independence;
pub mod matrix;
pub mod parallel;
pub mod parametric;

pub use classify::{classify, PivotAnalysis, Solution, SolutionExpression};
pub use elimination::{reduce, Annotation, EliminationStep, Reduction, RowOperation, Title};
pub use error::{DimensionError, MatrixError};
pub use independence::{check_independence, IndependenceReport, IndependenceRule};
pub use matrix::Matrix;
pub use parallel::{classify_all, reduce_all, BatchConfig};
pub use parametric::ParametricForm;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
