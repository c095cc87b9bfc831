//! Checks a few vector sets for linear independence.
//!
//! Run with: `cargo run --example independence`

use rowstep::integers::Rational;
use rowstep::linalg::{check_independence, DimensionError};
use rowstep::render::matrix_lines;

fn vectors(rows: &[&[i64]]) -> Vec<Vec<Rational>> {
    rows.iter()
        .map(|r| r.iter().map(|&v| Rational::from(v)).collect())
        .collect()
}

fn main() -> Result<(), DimensionError> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let sets = [
        vectors(&[&[1, 2, 3]]),
        vectors(&[&[1, 2, 3], &[-2, -4, -6]]),
        vectors(&[&[1, 0, 0], &[1, 1, 0], &[1, 1, 1]]),
        vectors(&[&[1, 2, 3], &[4, 5, 6], &[5, 7, 9]]),
        vectors(&[&[1, 0], &[0, 1], &[1, 1]]),
    ];

    for set in &sets {
        let report = check_independence(set)?;
        println!(
            "{} vector(s): {}",
            set.len(),
            if report.independent { "independent" } else { "dependent" }
        );
        for rule in &report.rules {
            println!("  - {rule:?}");
        }
        if let Some(reduction) = &report.reduction {
            for line in matrix_lines(&reduction.matrix) {
                println!("    {line}");
            }
        }
        if let Some(c) = &report.dependency {
            let coeffs: Vec<String> = c.iter().map(ToString::to_string).collect();
            println!("  dependency: c = ({})", coeffs.join(", "));
        }
        println!();
    }
    Ok(())
}
