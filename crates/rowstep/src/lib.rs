//! # rowstep
//!
//! Step-by-step exact solving of linear systems.
//!
//! rowstep takes the raw cell text of an augmented matrix, reduces it with
//! Gauss-Jordan elimination over exact rationals, classifies the result and
//! renders both a summary and a replayable, step-by-step trace.
//!
//! ## Features
//!
//! - **Exact arithmetic**: every entry is an arbitrary precision rational
//! - **Replayable steps**: each row operation carries a matrix snapshot
//! - **Full classification**: unique, infinite (with parametric vector form)
//!   or inconsistent
//! - **Text rendering**: aligned matrices, worked row combinations and
//!   bracketed column vectors
//!
//! ## Quick Start
//!
//! ```rust
//! use rowstep::prelude::*;
//!
//! let mut result = solve_cells(&[vec!["1", "1", "2"], vec!["2", "2", "4"]]).unwrap();
//! assert_eq!(result.solution().tag(), "infinite");
//!
//! let summary = result.render(&RenderConfig::default());
//! assert!(summary.contains("x2 is a free variable"));
//!
//! result.toggle_view();
//! let steps = result.render(&RenderConfig::default());
//! assert!(steps.contains("F2 \u{2192} F2 - (2)F1"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod render;
pub mod session;

pub use error::SolveError;
pub use render::RenderConfig;
pub use session::{solve, solve_cells, SolveResult, View};

pub use rowstep_integers as integers;
pub use rowstep_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::render::RenderConfig;
    pub use crate::session::{solve, solve_cells, SolveResult, View};
    pub use crate::SolveError;
    pub use rowstep_integers::{Rational, RationalError};
    pub use rowstep_linalg::{
        check_independence, classify, reduce, EliminationStep, Matrix, ParametricForm,
        Reduction, RowOperation, Solution, SolutionExpression,
    };
}
