//! Augmented matrix model.
//!
//! A `Matrix` is a dense row-major grid of exact rationals. When it
//! represents a linear system, the last column holds the constants and every
//! other column belongs to one variable.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;
use rowstep_integers::parse::parse_cell;
use rowstep_integers::Rational;

use crate::error::{DimensionError, MatrixError};

/// Dense matrix of rationals stored in row-major order.
///
/// Never empty: construction rejects zero rows or zero columns.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Result<Self, DimensionError> {
        if num_rows == 0 {
            return Err(DimensionError::NoRows);
        }
        if num_cols == 0 {
            return Err(DimensionError::NoColumns);
        }
        Ok(Self {
            data: vec![Rational::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty, or any
    /// row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, DimensionError> {
        let num_rows = rows.len();
        let num_cols = rows.first().ok_or(DimensionError::NoRows)?.len();
        if num_cols == 0 {
            return Err(DimensionError::NoColumns);
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find_map(|(i, r)| (r.len() != num_cols).then_some((i, r.len())))
        {
            return Err(DimensionError::RaggedRow {
                row,
                expected: num_cols,
                found,
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from small integers. Mostly useful in tests.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::from_rows`].
    pub fn from_i64_rows(rows: &[&[i64]]) -> Result<Self, DimensionError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Rational::from(v)).collect())
                .collect(),
        )
    }

    /// Parses a grid of cell text. Blank cells read as zero.
    ///
    /// Shape is checked before any cell is parsed, and the first bad cell
    /// (row-major order) is reported.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Dimension`] for a bad shape, otherwise
    /// [`MatrixError::Parse`] or [`MatrixError::DivisionByZero`] for the
    /// first cell that fails.
    pub fn parse_cells<S: AsRef<str>>(cells: &[Vec<S>]) -> Result<Self, MatrixError> {
        let num_cols = cells.first().ok_or(DimensionError::NoRows)?.len();
        if num_cols == 0 {
            return Err(DimensionError::NoColumns.into());
        }
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != num_cols {
                return Err(DimensionError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: cells_in_row.len(),
                }
                .into());
            }
        }

        let rows = cells
            .iter()
            .enumerate()
            .map(|(row, cells_in_row)| {
                cells_in_row
                    .iter()
                    .enumerate()
                    .map(|(col, text)| {
                        parse_cell(text.as_ref()).map_err(|e| MatrixError::at_cell(row, col, e))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows)?)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns, constants included.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the number of variables (all columns but the last).
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_cols - 1
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Rational]> + '_ {
        self.data.chunks_exact(self.num_cols)
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<Rational> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Returns the coefficient columns, one vector per variable.
    #[must_use]
    pub fn coefficient_columns(&self) -> Vec<Vec<Rational>> {
        (0..self.num_vars()).map(|col| self.col(col)).collect()
    }

    /// Returns true if every constant is zero.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.rows().all(|row| row[self.num_cols - 1].is_zero())
    }

    /// Returns true if the coefficient part of `row` is all zero.
    #[must_use]
    pub fn is_zero_coefficient_row(&self, row: usize) -> bool {
        self.row(row)[..self.num_vars()].iter().all(Zero::is_zero)
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Divides every entry of a row by `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn divide_row(&mut self, row: usize, divisor: &Rational) {
        assert!(!divisor.is_zero(), "row divisor cannot be zero");
        let start = row * self.num_cols;
        for entry in &mut self.data[start..start + self.num_cols] {
            *entry = &*entry / divisor;
        }
    }

    /// Subtracts a multiple of one row from another:
    /// `row[target] -= factor * row[source]`.
    pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: &Rational) {
        for k in 0..self.num_cols {
            let delta = &self[(source, k)] * factor;
            self[(target, k)] = &self[(target, k)] - &delta;
        }
    }

    /// Evaluates the system at `x`: returns `A·x - b` for each row.
    ///
    /// A solution of the system yields an all-zero residual.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one entry per variable.
    #[must_use]
    pub fn residual(&self, x: &[Rational]) -> Vec<Rational> {
        assert_eq!(x.len(), self.num_vars(), "one value per variable");
        self.rows()
            .map(|row| {
                let (coefficients, constant) = row.split_at(self.num_vars());
                let lhs = coefficients
                    .iter()
                    .zip(x)
                    .fold(Rational::zero(), |acc, (a, v)| acc + a * v);
                lhs - &constant[0]
            })
            .collect()
    }

    /// Returns the rows as owned vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Rational>> {
        self.rows().map(<[Rational]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rows().map(|row| {
                row.iter().map(ToString::to_string).collect::<Vec<_>>()
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3, 4).unwrap();
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.num_cols(), 4);
        assert_eq!(m.num_vars(), 3);
        assert!(m.rows().flatten().all(Zero::is_zero));
        assert_eq!(Matrix::zeros(0, 2), Err(DimensionError::NoRows));
        assert_eq!(Matrix::zeros(2, 0), Err(DimensionError::NoColumns));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(Matrix::from_rows(vec![]), Err(DimensionError::NoRows));
        assert_eq!(Matrix::from_rows(vec![vec![]]), Err(DimensionError::NoColumns));
        assert_eq!(
            Matrix::from_i64_rows(&[&[1, 2, 3], &[4, 5]]),
            Err(DimensionError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_cells() {
        let m = Matrix::parse_cells(&[vec!["1", "", "1/2"], vec!["0,5", "-3", " 4 "]]).unwrap();
        assert_eq!(m.row(0), &[q(1, 1), q(0, 1), q(1, 2)]);
        assert_eq!(m.row(1), &[q(1, 2), q(-3, 1), q(4, 1)]);
    }

    #[test]
    fn test_parse_cells_reports_position() {
        let err = Matrix::parse_cells(&[vec!["1", "2"], vec!["x", "1/0"]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Parse {
                row: 1,
                col: 0,
                text: "x".to_owned()
            }
        );

        let err = Matrix::parse_cells(&[vec!["1", "1/0"]]).unwrap_err();
        assert_eq!(err, MatrixError::DivisionByZero { row: 0, col: 1 });

        // Shape is checked first, even when cells are also malformed.
        let err = Matrix::parse_cells(&[vec!["x", "2"], vec!["3"]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Dimension(DimensionError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix::from_i64_rows(&[&[2, 4, 6], &[1, 1, 1]]).unwrap();

        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[q(1, 1), q(1, 1), q(1, 1)]);

        m.divide_row(1, &q(2, 1));
        assert_eq!(m.row(1), &[q(1, 1), q(2, 1), q(3, 1)]);

        m.sub_scaled_row(0, 1, &q(1, 1));
        assert_eq!(m.row(0), &[q(0, 1), q(-1, 1), q(-2, 1)]);
    }

    #[test]
    fn test_residual() {
        // x + 2y = 5, 3x + 4y = 11  ->  x = 1, y = 2
        let m = Matrix::from_i64_rows(&[&[1, 2, 5], &[3, 4, 11]]).unwrap();
        let r = m.residual(&[q(1, 1), q(2, 1)]);
        assert!(r.iter().all(Zero::is_zero));

        let r = m.residual(&[q(0, 1), q(0, 1)]);
        assert_eq!(r, vec![q(-5, 1), q(-11, 1)]);
    }

    #[test]
    fn test_columns_and_homogeneity() {
        let m = Matrix::from_i64_rows(&[&[1, 2, 0], &[3, 4, 0]]).unwrap();
        assert!(m.is_homogeneous());
        assert_eq!(
            m.coefficient_columns(),
            vec![vec![q(1, 1), q(3, 1)], vec![q(2, 1), q(4, 1)]]
        );

        let m = Matrix::from_i64_rows(&[&[1, 2, 0], &[3, 4, 1]]).unwrap();
        assert!(!m.is_homogeneous());
    }
}
