//! Errors raised while building rationals.

use thiserror::Error;

/// Errors that can occur when constructing a [`Rational`](crate::Rational).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// The text is not an integer, decimal or fraction literal.
    #[error("invalid rational literal `{0}`")]
    InvalidLiteral(String),

    /// A fraction literal or a checked division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}
