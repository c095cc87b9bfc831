//! One solve of one system.
//!
//! A [`SolveResult`] owns everything a front end needs to show a solve: the
//! matrix as entered, the reduction with its step log, the classification,
//! the parametric form for infinite systems and which view is currently
//! selected. Nothing is shared between solves.

use rowstep_linalg::{
    check_independence, classify, reduce, DimensionError, EliminationStep, IndependenceReport,
    Matrix, ParametricForm, Reduction, Solution,
};
use tracing::debug;

use crate::error::SolveError;
use crate::render::{self, RenderConfig};

/// Which rendering of a solve is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// Final answer only.
    #[default]
    Summary,
    /// Every row operation, then the final answer.
    Steps,
}

impl View {
    /// Returns the other view.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Summary => Self::Steps,
            Self::Steps => Self::Summary,
        }
    }
}

/// The complete outcome of solving one augmented system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResult {
    original: Matrix,
    reduction: Reduction,
    solution: Solution,
    parametric: Option<ParametricForm>,
    view: View,
}

/// Parses a grid of cell text and solves it.
///
/// Blank cells read as zero. The last column holds the constants.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] or [`SolveError::DivisionByZero`] for the
/// first bad cell, and [`SolveError::Dimension`] for an empty or ragged grid
/// or one with fewer than two columns.
pub fn solve_cells<S: AsRef<str>>(cells: &[Vec<S>]) -> Result<SolveResult, SolveError> {
    let matrix = Matrix::parse_cells(cells).map_err(|e| {
        debug!(error = %e, "input rejected");
        SolveError::from(e)
    })?;
    solve(matrix)
}

/// Solves an augmented system.
///
/// # Errors
///
/// Returns [`SolveError::Dimension`] if the matrix has fewer than two columns.
pub fn solve(matrix: Matrix) -> Result<SolveResult, SolveError> {
    if matrix.num_cols() < 2 {
        return Err(DimensionError::NoVariables(matrix.num_cols()).into());
    }

    let reduction = reduce(matrix.clone());
    let solution = classify(&reduction.matrix);
    let parametric = ParametricForm::from_solution(&solution, &reduction.matrix, &matrix);
    debug!(
        rows = matrix.num_rows(),
        cols = matrix.num_cols(),
        steps = reduction.steps.len(),
        classification = solution.tag(),
        "solved"
    );

    Ok(SolveResult {
        original: matrix,
        reduction,
        solution,
        parametric,
        view: View::default(),
    })
}

impl SolveResult {
    /// The matrix as entered.
    #[must_use]
    pub fn original(&self) -> &Matrix {
        &self.original
    }

    /// The reduced row-echelon form.
    #[must_use]
    pub fn reduced(&self) -> &Matrix {
        &self.reduction.matrix
    }

    /// The full reduction, steps included.
    #[must_use]
    pub fn reduction(&self) -> &Reduction {
        &self.reduction
    }

    /// The recorded row operations, in order.
    #[must_use]
    pub fn steps(&self) -> &[EliminationStep] {
        &self.reduction.steps
    }

    /// The classification.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The parametric vector form, present only for infinite solution sets.
    #[must_use]
    pub fn parametric(&self) -> Option<&ParametricForm> {
        self.parametric.as_ref()
    }

    /// The currently selected view.
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    /// Selects a view.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Switches between summary and steps, returning the new view.
    pub fn toggle_view(&mut self) -> View {
        self.view = self.view.toggled();
        self.view
    }

    /// Renders the current view.
    #[must_use]
    pub fn render(&self, config: &RenderConfig) -> String {
        match self.view {
            View::Summary => render::summary(
                &self.solution,
                &self.reduction.matrix,
                self.parametric.as_ref(),
                config,
            ),
            View::Steps => render::detailed(
                &self.reduction.steps,
                &self.solution,
                &self.reduction.matrix,
                config,
            ),
        }
    }

    /// Checks whether the coefficient columns of the entered system are
    /// linearly independent.
    ///
    /// # Errors
    ///
    /// Only fails on shapes [`solve`] already rejects.
    pub fn column_independence(&self) -> Result<IndependenceReport, SolveError> {
        Ok(check_independence(&self.original.coefficient_columns())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowstep_integers::Rational;

    #[test]
    fn test_toggle_view() {
        let mut result = solve_cells(&[vec!["1", "0", "3"], vec!["0", "1", "5"]]).unwrap();
        assert_eq!(result.view(), View::Summary);
        assert_eq!(result.toggle_view(), View::Steps);
        assert_eq!(result.toggle_view(), View::Summary);
        result.set_view(View::Steps);
        assert_eq!(result.view(), View::Steps);
    }

    #[test]
    fn test_render_follows_view() {
        let mut result = solve_cells(&[vec!["2", "4", "6"]]).unwrap();
        let config = RenderConfig::default();
        assert!(!result.render(&config).contains("Operation:"));
        result.toggle_view();
        assert!(result.render(&config).starts_with("Operation: F1 \u{2192} F1/2"));
    }

    #[test]
    fn test_accessors() {
        let result = solve_cells(&[vec!["1", "1", "2"], vec!["2", "2", "4"]]).unwrap();
        assert_eq!(result.original().num_rows(), 2);
        assert_eq!(result.steps().len(), 1);
        assert_eq!(result.reduction().rank(), 1);
        assert_eq!(result.reduced().row(1), vec![Rational::from(0); 3].as_slice());
        assert_eq!(result.solution().tag(), "infinite");
        assert!(result.parametric().is_some());
    }

    #[test]
    fn test_parametric_only_for_infinite() {
        let unique = solve_cells(&[vec!["1", "0", "3"], vec!["0", "1", "5"]]).unwrap();
        assert!(unique.parametric().is_none());
        let inconsistent = solve_cells(&[vec!["0", "0", "5"]]).unwrap();
        assert!(inconsistent.parametric().is_none());
    }

    #[test]
    fn test_rejects_single_column() {
        assert_eq!(
            solve_cells(&[vec!["1"], vec!["2"]]),
            Err(SolveError::Dimension(DimensionError::NoVariables(1)))
        );
    }

    #[test]
    fn test_reports_first_bad_cell() {
        assert_eq!(
            solve_cells(&[vec!["1", "x", "y"]]),
            Err(SolveError::Parse {
                row: 0,
                col: 1,
                text: "x".to_owned()
            })
        );
        assert_eq!(
            solve_cells(&[vec!["1", "2"], vec!["1/0", "2"]]),
            Err(SolveError::DivisionByZero { row: 1, col: 0 })
        );
        assert!(matches!(
            solve_cells(&[vec!["1", "2"], vec!["3"]]),
            Err(SolveError::Dimension(DimensionError::RaggedRow { row: 1, .. }))
        ));
        assert_eq!(
            solve_cells::<&str>(&[]),
            Err(SolveError::Dimension(DimensionError::NoRows))
        );
    }

    #[test]
    fn test_column_independence() {
        let result = solve_cells(&[vec!["1", "0", "3"], vec!["0", "1", "5"]]).unwrap();
        assert!(result.column_independence().unwrap().independent);

        let result = solve_cells(&[vec!["1", "2", "3"], vec!["2", "4", "6"]]).unwrap();
        assert!(!result.column_independence().unwrap().independent);
    }

    #[test]
    fn test_result_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolveResult>();
    }
}
