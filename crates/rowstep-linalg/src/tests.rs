//! Integration tests for rowstep-linalg.

#[cfg(test)]
mod integration_tests {
    use num_traits::{One, Zero};
    use rowstep_integers::Rational;

    use crate::classify::{classify, Solution, SolutionExpression};
    use crate::elimination::{reduce, RowOperation};
    use crate::independence::check_independence;
    use crate::matrix::Matrix;
    use crate::parametric::ParametricForm;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn m(rows: &[&[i64]]) -> Matrix {
        Matrix::from_i64_rows(rows).unwrap()
    }

    #[test]
    fn test_dependent_rows_end_to_end() {
        let original = m(&[&[1, 1, 2], &[2, 2, 4]]);
        let reduction = reduce(original.clone());
        assert_eq!(reduction.steps.len(), 1);
        assert_eq!(reduction.steps[0].operation.to_string(), "F2 \u{2192} F2 - (2)F1");

        let solution = classify(&reduction.matrix);
        let form = ParametricForm::from_solution(&solution, &reduction.matrix, &original).unwrap();
        assert_eq!(form.particular, vec![q(2, 1), q(0, 1)]);
        assert_eq!(form.directions, vec![(1, vec![q(-1, 1), q(1, 1)])]);
    }

    #[test]
    fn test_identity_block_is_untouched() {
        let reduction = reduce(m(&[&[1, 0, 3], &[0, 1, 5]]));
        assert!(reduction.steps.is_empty());
        assert_eq!(
            classify(&reduction.matrix).expressions(),
            vec![SolutionExpression::Fixed(q(3, 1)), SolutionExpression::Fixed(q(5, 1))]
        );
    }

    #[test]
    fn test_row_of_zeros_with_constant() {
        assert_eq!(classify(&reduce(m(&[&[0, 0, 5]])).matrix), Solution::Inconsistent { row: 0 });
    }

    #[test]
    fn test_scale_only() {
        let reduction = reduce(m(&[&[2, 4, 6]]));
        assert!(matches!(
            reduction.steps.as_slice(),
            [step] if matches!(step.operation, RowOperation::Scale { row: 0, .. })
        ));
        assert_eq!(classify(&reduction.matrix).tag(), "infinite");
    }

    #[test]
    fn test_three_by_three_unique() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27  ->  (5, 3, -2)
        let original = m(&[&[1, 1, 1, 6], &[0, 2, 5, -4], &[2, 5, -1, 27]]);
        let reduction = reduce(original.clone());
        let Solution::Unique { values, .. } = classify(&reduction.matrix) else {
            panic!("expected a unique solution");
        };
        assert_eq!(values, vec![q(5, 1), q(3, 1), q(-2, 1)]);
        assert!(original.residual(&values).iter().all(Zero::is_zero));
    }

    #[test]
    fn test_fractional_pivots() {
        let original = Matrix::parse_cells(&[vec!["1/2", "1/3", "1"], vec!["0.25", "-1", "1,5"]])
            .unwrap();
        let reduction = reduce(original.clone());
        let Solution::Unique { values, .. } = classify(&reduction.matrix) else {
            panic!("expected a unique solution");
        };
        assert!(original.residual(&values).iter().all(Zero::is_zero));
    }

    #[test]
    fn test_every_snapshot_is_replayable() {
        let original = m(&[&[0, 3, -6, 6, 4, -5], &[3, -7, 8, -5, 8, 9], &[3, -9, 12, -9, 6, 15]]);
        let reduction = reduce(original.clone());

        let mut replay = original;
        for step in &reduction.steps {
            match &step.operation {
                RowOperation::Swap { first, second } => replay.swap_rows(*first, *second),
                RowOperation::Scale { row, divisor } => replay.divide_row(*row, divisor),
                RowOperation::Combine {
                    target,
                    pivot_row,
                    factor,
                } => replay.sub_scaled_row(*target, *pivot_row, factor),
            }
            assert_eq!(replay, step.snapshot);
        }
        assert_eq!(replay, reduction.matrix);
    }

    #[test]
    fn test_wide_system_parametric() {
        let original = m(&[&[0, 3, -6, 6, 4, -5], &[3, -7, 8, -5, 8, 9], &[3, -9, 12, -9, 6, 15]]);
        let reduction = reduce(original.clone());
        let solution = classify(&reduction.matrix);
        let form = ParametricForm::from_solution(&solution, &reduction.matrix, &original).unwrap();

        assert_eq!(form.free_vars().collect::<Vec<_>>(), vec![2, 3]);
        let x = form.evaluate(&[q(1, 1), q(-3, 2)]);
        assert!(original.residual(&x).iter().all(Zero::is_zero));
    }

    #[test]
    fn test_pivots_are_unit_columns() {
        let reduction = reduce(m(&[&[2, 1, -1, 8], &[-3, -1, 2, -11], &[-2, 1, 2, -3]]));
        for (row, &col) in reduction.pivot_cols.iter().enumerate() {
            for other in 0..reduction.matrix.num_rows() {
                let entry = &reduction.matrix[(other, col)];
                if other == row {
                    assert!(entry.is_one());
                } else {
                    assert!(entry.is_zero());
                }
            }
        }
    }

    #[test]
    fn test_independence_of_coefficient_columns() {
        let system = m(&[&[1, 2, 3, 0], &[2, 4, 7, 0], &[0, 0, 1, 0]]);
        let report = check_independence(&system.coefficient_columns()).unwrap();
        assert!(!report.independent);
    }
}
