//! Solves a few systems and prints both views.
//!
//! Run with: `cargo run --example solve_system`

use rowstep::prelude::*;

fn main() -> Result<(), SolveError> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let config = RenderConfig::default();
    let systems = vec![
        vec![vec!["1", "2", "5"], vec!["3", "4", "6"]],
        vec![vec!["1", "1", "2"], vec!["2", "2", "4"]],
        vec![
            vec!["0", "3", "-6", "6", "4", "-5"],
            vec!["3", "-7", "8", "-5", "8", "9"],
            vec!["3", "-9", "12", "-9", "6", "15"],
        ],
        vec![vec!["1", "1", "1"], vec!["1", "1", "3"]],
    ];

    for cells in &systems {
        let mut result = solve_cells(cells)?;

        println!("{}", result.render(&config));
        println!();
        result.toggle_view();
        println!("{}", result.render(&config));
        println!("{}", "=".repeat(config.rule_width));
        println!();
    }

    // Errors carry the cell position.
    if let Err(e) = solve_cells(&[vec!["1", "1/0", "2"]]) {
        println!("rejected: {e}");
    }
    Ok(())
}
