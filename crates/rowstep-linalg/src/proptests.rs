//! Property-based tests for elimination and classification.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use rowstep_integers::Rational;

    use crate::classify::{classify, PivotAnalysis, Solution};
    use crate::elimination::reduce;
    use crate::matrix::Matrix;
    use crate::parametric::ParametricForm;

    fn entry() -> impl Strategy<Value = Rational> {
        // Plenty of zeros so free columns and dependent rows show up.
        prop_oneof![
            2 => Just(Rational::zero()),
            5 => (-9i64..=9).prop_map(Rational::from),
            1 => (-9i64..=9, 1i64..=4).prop_map(|(n, d)| Rational::from_i64(n, d)),
        ]
    }

    fn augmented() -> impl Strategy<Value = Matrix> {
        (1usize..=4, 2usize..=5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(entry(), cols), rows)
                .prop_map(|rows| Matrix::from_rows(rows).unwrap())
        })
    }

    fn is_rref(m: &Matrix, pivot_cols: &[usize]) -> bool {
        pivot_cols.iter().enumerate().all(|(row, &col)| {
            (0..m.num_rows()).all(|other| {
                let e = &m[(other, col)];
                if other == row {
                    e.is_one()
                } else {
                    e.is_zero()
                }
            }) && (0..col).all(|left| m[(row, left)].is_zero())
        }) && (pivot_cols.len()..m.num_rows()).all(|row| m.is_zero_coefficient_row(row))
            && pivot_cols.windows(2).all(|w| w[0] < w[1])
    }

    proptest! {
        #[test]
        fn rref_is_idempotent(m in augmented()) {
            let once = reduce(m);
            let twice = reduce(once.matrix.clone());
            prop_assert!(twice.steps.is_empty());
            prop_assert_eq!(twice.matrix, once.matrix);
        }

        #[test]
        fn output_is_rref(m in augmented()) {
            let r = reduce(m);
            prop_assert!(is_rref(&r.matrix, &r.pivot_cols));
        }

        #[test]
        fn pivot_analysis_agrees_with_engine(m in augmented()) {
            let r = reduce(m);
            let pivots = PivotAnalysis::of(&r.matrix);
            let engine_vars: Vec<usize> = r
                .pivot_cols
                .iter()
                .copied()
                .filter(|&c| c < r.matrix.num_vars())
                .collect();
            prop_assert_eq!(pivots.pivot_cols, engine_vars);
        }

        #[test]
        fn last_snapshot_is_result(m in augmented()) {
            let r = reduce(m);
            if let Some(last) = r.steps.last() {
                prop_assert_eq!(&last.snapshot, &r.matrix);
            }
        }

        #[test]
        fn contradiction_row_is_inconsistent(m in augmented(), c in 1i64..50) {
            let mut rows = m.to_rows();
            let width = m.num_cols();
            let mut bad = vec![Rational::zero(); width];
            bad[width - 1] = Rational::from(c);
            rows.push(bad);
            let with_contradiction = Matrix::from_rows(rows).unwrap();
            let s = classify(&reduce(with_contradiction).matrix);
            prop_assert_eq!(s.tag(), "inconsistent");
        }

        #[test]
        fn solutions_satisfy_original(
            m in augmented(),
            params in prop::collection::vec(entry(), 5),
        ) {
            let r = reduce(m.clone());
            match classify(&r.matrix) {
                Solution::Inconsistent { .. } => {}
                Solution::Unique { values, .. } => {
                    prop_assert!(m.residual(&values).iter().all(Zero::is_zero));
                }
                solution @ Solution::Infinite { .. } => {
                    let form = ParametricForm::from_solution(&solution, &r.matrix, &m).unwrap();
                    let t: Vec<Rational> = params
                        .iter()
                        .take(form.directions.len())
                        .cloned()
                        .collect();
                    let x = form.evaluate(&t);
                    prop_assert!(m.residual(&x).iter().all(Zero::is_zero));

                    // The affine expressions describe the same point.
                    let exprs = solution.expressions();
                    for (j, e) in exprs.iter().enumerate() {
                        prop_assert_eq!(&e.evaluate(j, &x), &x[j]);
                    }
                }
            }
        }
    }
}
