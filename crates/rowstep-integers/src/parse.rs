//! Parsing of rational literals typed into matrix cells.
//!
//! Accepted forms, with optional surrounding whitespace and a leading sign:
//!
//! ```text
//! 42      -7      +3
//! 2/3     -10/4
//! 0.25    .5      3.      1,5
//! 1e3     2.5E-2
//! ```
//!
//! A comma is read as a decimal point. Fractions take unsigned integer parts
//! on both sides of the slash.

use num_traits::Zero;

use crate::{Integer, Rational, RationalError};

/// Largest accepted exponent magnitude in scientific notation.
pub const MAX_EXPONENT: u32 = 4096;

/// Parses a rational literal.
///
/// # Errors
///
/// - [`RationalError::InvalidLiteral`] if the text matches none of the forms
///   above (this includes the empty string).
/// - [`RationalError::DivisionByZero`] for fractions such as `1/0`.
pub fn parse_rational(text: &str) -> Result<Rational, RationalError> {
    let invalid = || RationalError::InvalidLiteral(text.to_owned());

    let normalized = text.trim().replace(',', ".");
    let (negative, body) = split_sign(&normalized);
    if body.is_empty() {
        return Err(invalid());
    }

    let magnitude = if let Some((num, den)) = body.split_once('/') {
        let num = Integer::from_decimal_digits(num).map_err(|_| invalid())?;
        let den = Integer::from_decimal_digits(den).map_err(|_| invalid())?;
        Rational::try_new(num, den)?
    } else {
        parse_decimal(body).ok_or_else(invalid)?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Parses `digits[.digits][e[+-]digits]` with at least one mantissa digit.
fn parse_decimal(body: &str) -> Option<Rational> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let digits = format!("{int_part}{frac_part}");
    let scaled = Integer::from_decimal_digits(&digits).ok()?;
    let frac_len = u32::try_from(frac_part.len()).ok()?;

    let exp = match exponent {
        Some(e) => parse_exponent(e)?,
        None => 0,
    };
    let shift = exp - i64::from(frac_len);

    let value = if shift >= 0 {
        let shift = u32::try_from(shift).ok()?;
        Rational::from_integer(scaled * Integer::power_of_ten(shift))
    } else {
        let shift = u32::try_from(-shift).ok()?;
        Rational::try_new(scaled, Integer::power_of_ten(shift)).ok()?
    };
    Some(value)
}

fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: u32 = digits.parse().ok()?;
    if magnitude > MAX_EXPONENT {
        return None;
    }
    let magnitude = i64::from(magnitude);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a cell, treating blank text as zero.
///
/// # Errors
///
/// Same as [`parse_rational`] for non-blank text.
pub fn parse_cell(text: &str) -> Result<Rational, RationalError> {
    if text.trim().is_empty() {
        Ok(Rational::zero())
    } else {
        parse_rational(text)
    }
}
