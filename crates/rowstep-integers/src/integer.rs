//! Arbitrary precision integers.
//!
//! A thin wrapper around `dashu::IBig` used for the numerator and
//! denominator of [`Rational`](crate::Rational) values and by the literal
//! parser.

use dashu::base::Signed as DashuSigned;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::RationalError;

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an unsigned run of ASCII decimal digits.
    ///
    /// Signs, separators and whitespace are rejected; the literal parser
    /// strips those before calling in.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidLiteral`] if `digits` is empty or
    /// contains anything other than `0-9`.
    pub fn from_decimal_digits(digits: &str) -> Result<Self, RationalError> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RationalError::InvalidLiteral(digits.to_owned()));
        }
        IBig::from_str_radix(digits, 10)
            .map(Self)
            .map_err(|_| RationalError::InvalidLiteral(digits.to_owned()))
    }

    /// Returns `10^exp`.
    #[must_use]
    pub fn power_of_ten(exp: u32) -> Self {
        Self::new(10).pow(exp)
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self(self.0.$method(&rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - &b).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((-a).to_i64(), Some(-10));
    }

    #[test]
    fn test_decimal_digits() {
        let a = Integer::from_decimal_digits("123456789012345678901234567890").unwrap();
        let b = Integer::from_decimal_digits("987654321098765432109876543210").unwrap();
        assert_eq!((a + b).to_string(), "1111111110111111111011111111100");

        assert!(Integer::from_decimal_digits("").is_err());
        assert!(Integer::from_decimal_digits("-5").is_err());
        assert!(Integer::from_decimal_digits("1_000").is_err());
    }

    #[test]
    fn test_power_of_ten() {
        assert_eq!(Integer::power_of_ten(0).to_i64(), Some(1));
        assert_eq!(Integer::power_of_ten(6).to_i64(), Some(1_000_000));
    }

    #[test]
    fn test_is_negative() {
        assert!(Integer::new(-1).is_negative());
        assert!(!Integer::new(0).is_negative());
        assert!(!Integer::new(9).is_negative());
    }
}
