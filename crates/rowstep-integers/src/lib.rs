//! # rowstep-integers
//!
//! Arbitrary precision integer and rational arithmetic for rowstep.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals (`Rational`) that are always kept in lowest terms
//! - Parsing of the literals users type into matrix cells
//!
//! Every elimination step downstream runs on `Rational`, so no rounding
//! error can enter a step.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod parse;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::Rational;
