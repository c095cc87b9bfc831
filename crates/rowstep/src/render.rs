//! Plain-text rendering of a solve.
//!
//! Everything here is a pure function from engine output to lines of text.
//! Matrices are printed with every entry right-aligned to the widest one,
//! row combinations are worked out vertically next to the snapshot they
//! produce, and parametric solutions are drawn as bracketed column vectors
//! placed side by side.

use num_traits::Zero;
use rowstep_integers::Rational;
use rowstep_linalg::{
    EliminationStep, Matrix, ParametricForm, RowOperation, Solution, SolutionExpression,
};

const HEADER: &str = "===== FINAL SOLUTION =====";

/// Labels and spacing used by the renderer.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Prefix for variable names (`x` gives `x1`, `x2`, …).
    pub variable_prefix: String,
    /// Prefix for row labels (`F` gives `F1`, `F2`, …).
    pub row_prefix: String,
    /// Spaces between side-by-side column vectors.
    pub vector_gap: usize,
    /// Separator between a worked row combination and its snapshot.
    pub side_separator: String,
    /// Length of the rule printed between steps.
    pub rule_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variable_prefix: "x".to_owned(),
            row_prefix: "F".to_owned(),
            vector_gap: 4,
            side_separator: "   |   ".to_owned(),
            rule_width: 110,
        }
    }
}

impl RenderConfig {
    /// Returns the one-based name of variable `index`.
    #[must_use]
    pub fn variable(&self, index: usize) -> String {
        format!("{}{}", self.variable_prefix, index + 1)
    }

    /// Returns the one-based label of row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> String {
        format!("{}{}", self.row_prefix, index + 1)
    }
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn join_padded(cells: &[String], width: usize) -> String {
    cells
        .iter()
        .map(|c| format!("{c:>width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a matrix one line per row, entries right-aligned to the widest.
#[must_use]
pub fn matrix_lines(matrix: &Matrix) -> Vec<String> {
    let cells: Vec<String> = matrix.rows().flatten().map(ToString::to_string).collect();
    let width = cells.iter().map(|c| text_width(c)).max().unwrap_or(0);
    cells
        .chunks(matrix.num_cols())
        .map(|row| join_padded(row, width))
        .collect()
}

/// Works out a row combination vertically.
///
/// For `Ft → Ft - (k)Fp` this prints the scaled pivot row, the target row
/// before the step, a dashed rule and the target row after it. Returns an
/// empty list for any other kind of step.
#[must_use]
pub fn combine_lines(step: &EliminationStep, config: &RenderConfig) -> Vec<String> {
    let RowOperation::Combine {
        target,
        pivot_row,
        ref factor,
    } = step.operation
    else {
        return Vec::new();
    };
    let Some(before) = step.combine_source_row() else {
        return Vec::new();
    };

    let scaled: Vec<String> = step
        .snapshot
        .row(pivot_row)
        .iter()
        .map(|v| (-(factor * v)).to_string())
        .collect();
    let before: Vec<String> = before.iter().map(ToString::to_string).collect();
    let after: Vec<String> = step.snapshot.row(target).iter().map(ToString::to_string).collect();

    let width = scaled
        .iter()
        .chain(&before)
        .chain(&after)
        .map(|c| text_width(c))
        .max()
        .unwrap_or(0);

    let multiplier = if factor.is_negative() {
        format!("+{}", factor.abs())
    } else {
        format!("-{factor}")
    };
    let labels = [
        format!("{multiplier}{}", config.row(pivot_row)),
        format!("+{}", config.row(target)),
        format!("={}", config.row(target)),
    ];
    let label_width = labels.iter().map(|l| text_width(l)).max().unwrap_or(0);

    let cols = after.len();
    let rule = format!(
        "{}{}",
        " ".repeat(label_width + 3),
        "-".repeat(width * cols + cols.saturating_sub(1))
    );

    vec![
        format!("{:<label_width$} : {}", labels[0], join_padded(&scaled, width)),
        format!("{:<label_width$} : {}", labels[1], join_padded(&before, width)),
        rule,
        format!("{:<label_width$} : {}", labels[2], join_padded(&after, width)),
    ]
}

/// Places `left` and `right` side by side, joined by `separator`.
///
/// Left lines are padded to the widest; lines with nothing on the right are
/// printed without the separator.
#[must_use]
pub fn side_by_side(left: &[String], right: &[String], separator: &str) -> Vec<String> {
    if left.is_empty() {
        return right.to_vec();
    }
    let width = left.iter().map(|l| text_width(l)).max().unwrap_or(0);
    (0..left.len().max(right.len()))
        .map(|i| {
            let l = left.get(i).map_or("", String::as_str);
            match right.get(i) {
                Some(r) if !r.is_empty() => format!("{l:<width$}{separator}{r}"),
                _ => l.trim_end().to_owned(),
            }
        })
        .collect()
}

/// Renders one step: its title and rationale, then the worked combination
/// (if any) next to the matrix snapshot, then a rule.
#[must_use]
pub fn step_block(step: &EliminationStep, config: &RenderConfig) -> String {
    let mut lines = vec![
        format!(
            "Operation: {}  \u{2014}  {}",
            step.operation.title_with_prefix(&config.row_prefix),
            step.rationale()
        ),
        String::new(),
    ];
    lines.extend(side_by_side(
        &combine_lines(step, config),
        &matrix_lines(&step.snapshot),
        &config.side_separator,
    ));
    lines.push(String::new());
    lines.push("-".repeat(config.rule_width));
    lines.push(String::new());
    lines.join("\n")
}

/// Renders a free-variable-aware expression, e.g. `2 + (-1)*x2`.
///
/// The constant is left out when it is zero and the result is `0` when
/// nothing remains. [`SolutionExpression::Free`] renders as the variable
/// itself.
#[must_use]
pub fn expression_text(
    index: usize,
    expression: &SolutionExpression,
    config: &RenderConfig,
) -> String {
    match expression {
        SolutionExpression::Fixed(value) => value.to_string(),
        SolutionExpression::Free => config.variable(index),
        SolutionExpression::Affine { constant, terms } => {
            let mut parts = Vec::with_capacity(terms.len() + 1);
            if !constant.is_zero() {
                parts.push(constant.to_string());
            }
            parts.extend(
                terms
                    .iter()
                    .map(|(coef, var)| format!("({coef})*{}", config.variable(*var))),
            );
            if parts.is_empty() {
                "0".to_owned()
            } else {
                parts.join(" + ")
            }
        }
    }
}

/// Renders the line describing one variable.
#[must_use]
pub fn variable_line(
    index: usize,
    expression: &SolutionExpression,
    config: &RenderConfig,
) -> String {
    match expression {
        SolutionExpression::Free => format!("{} is a free variable", config.variable(index)),
        _ => format!(
            "{} = {}",
            config.variable(index),
            expression_text(index, expression, config)
        ),
    }
}

/// Draws column vectors next to each other with tall brackets.
///
/// The first vector is labelled `names[0]`, every later one `+ names[k]`.
/// Labels sit on the first line, right-aligned to the widest label.
///
/// # Panics
///
/// Panics if `names` is shorter than `vectors`.
#[must_use]
pub fn vector_columns(vectors: &[&[Rational]], names: &[String], gap: usize) -> Vec<String> {
    let Some(height) = vectors.first().map(|v| v.len()) else {
        return Vec::new();
    };
    let headers: Vec<String> = names[..vectors.len()]
        .iter()
        .enumerate()
        .map(|(k, name)| if k == 0 { name.clone() } else { format!("+ {name}") })
        .collect();
    let header_width = headers.iter().map(|h| text_width(h)).max().unwrap_or(0);
    let cells: Vec<Vec<String>> = vectors
        .iter()
        .map(|v| v.iter().map(ToString::to_string).collect())
        .collect();
    let value_width = cells
        .iter()
        .flatten()
        .map(|c| text_width(c))
        .max()
        .unwrap_or(0)
        .max(1);
    let spacer = " ".repeat(gap);

    (0..height)
        .map(|row| {
            let (left, right) = match row {
                0 => ('\u{23a1}', '\u{23a4}'),
                r if r + 1 == height => ('\u{23a3}', '\u{23a6}'),
                _ => ('\u{23a2}', '\u{23a5}'),
            };
            cells
                .iter()
                .zip(&headers)
                .map(|(column, header)| {
                    let label = if row == 0 { header.as_str() } else { "" };
                    format!(
                        "{label:>header_width$} {left} {:>value_width$} {right}",
                        column[row]
                    )
                })
                .collect::<Vec<_>>()
                .join(&spacer)
                .trim_end()
                .to_owned()
        })
        .collect()
}

/// Prefixes a block of vector lines with `x = `, indenting the rest to match.
#[must_use]
pub fn with_assignment(lines: Vec<String>, config: &RenderConfig) -> Vec<String> {
    let prefix = format!("{} = ", config.variable_prefix);
    let indent = " ".repeat(text_width(&prefix));
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{prefix}{line}")
            } else {
                format!("{indent}{line}")
            }
        })
        .collect()
}

/// Renders the parametric vector form, or nothing for a form with no free
/// variables.
///
/// Homogeneous systems drop the (zero) particular vector.
#[must_use]
pub fn parametric_lines(form: &ParametricForm, config: &RenderConfig) -> Vec<String> {
    let free: Vec<usize> = form.free_vars().collect();
    if free.is_empty() {
        return Vec::new();
    }

    let mut vectors: Vec<&[Rational]> = Vec::with_capacity(free.len() + 1);
    let mut names = Vec::with_capacity(free.len() + 1);
    if !form.homogeneous {
        vectors.push(&form.particular);
        names.push(String::new());
    }
    for (index, direction) in &form.directions {
        vectors.push(direction);
        names.push(config.variable(*index));
    }

    let mut lines = with_assignment(vector_columns(&vectors, &names, config.vector_gap), config);
    let params = free
        .iter()
        .map(|&i| config.variable(i))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(String::new());
    lines.push(format!("where {params} \u{2208} \u{211d} are free parameters."));
    lines
}

/// Renders the classification sentence and one line per variable.
#[must_use]
pub fn solution_lines(solution: &Solution, rref: &Matrix, config: &RenderConfig) -> Vec<String> {
    match solution {
        Solution::Inconsistent { row } => {
            let constant = rref
                .get(*row, rref.num_cols() - 1)
                .map_or_else(Rational::zero, Clone::clone);
            vec![format!(
                "The system is inconsistent: row {} reads 0 = {constant}.",
                config.row(*row)
            )]
        }
        Solution::Unique { .. } | Solution::Infinite { .. } => {
            let mut lines = vec![
                if matches!(solution, Solution::Unique { .. }) {
                    "The system has a unique solution:".to_owned()
                } else {
                    "The system has infinitely many solutions:".to_owned()
                },
                String::new(),
            ];
            lines.extend(
                solution
                    .expressions()
                    .iter()
                    .enumerate()
                    .map(|(i, e)| variable_line(i, e, config)),
            );
            lines
        }
    }
}

/// Renders the summary view.
#[must_use]
pub fn summary(
    solution: &Solution,
    rref: &Matrix,
    parametric: Option<&ParametricForm>,
    config: &RenderConfig,
) -> String {
    let mut lines = vec![HEADER.to_owned(), String::new()];
    lines.extend(solution_lines(solution, rref, config));
    if let Some(form) = parametric {
        let vectors = parametric_lines(form, config);
        if !vectors.is_empty() {
            lines.push(String::new());
            lines.push("Solution set:".to_owned());
            lines.push(String::new());
            lines.extend(vectors);
        }
    }
    lines.join("\n")
}

/// Renders the detailed view: every step, then the final solution.
#[must_use]
pub fn detailed(
    steps: &[EliminationStep],
    solution: &Solution,
    rref: &Matrix,
    config: &RenderConfig,
) -> String {
    let mut out = String::new();
    if steps.is_empty() {
        out.push_str("No row operations needed: the matrix is already in reduced row-echelon form.");
        out.push_str("\n\n");
        for line in matrix_lines(rref) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    for step in steps {
        out.push_str(&step_block(step, config));
        out.push('\n');
    }
    out.push_str(HEADER);
    out.push_str("\n\n");
    out.push_str(&solution_lines(solution, rref, config).join("\n"));
    out
}
