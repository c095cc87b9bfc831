//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Rational, RationalError};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn sub_then_add_restores(a in rational(), b in rational()) {
            prop_assert_eq!((&a - &b) + b, a);
        }

        #[test]
        fn multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().expect("non-zero has an inverse");
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn checked_div_matches_operator(a in rational(), b in rational()) {
            if b.is_zero() {
                prop_assert_eq!(a.checked_div(&b), Err(RationalError::DivisionByZero));
            } else {
                prop_assert_eq!(a.checked_div(&b).unwrap(), a / b);
            }
        }

        // Scaling numerator and denominator by the same factor must yield a
        // bitwise identical value.
        #[test]
        fn canonical_representation(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            let a = Rational::from_i64(n, d);
            let b = Rational::from_i64(n * k, d * k);
            prop_assert_eq!(a.numerator(), b.numerator());
            prop_assert_eq!(a.denominator(), b.denominator());
            prop_assert!(!b.denominator().is_negative());
        }

        #[test]
        fn display_parses_back(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn decimal_literal_matches_fraction(int in 0i64..10_000, frac in 0i64..1000) {
            let text = format!("{int}.{frac:03}");
            let expected = Rational::from_i64(int * 1000 + frac, 1000);
            prop_assert_eq!(Rational::parse(&text).unwrap(), expected.clone());
            prop_assert_eq!(Rational::parse(&text.replace('.', ",")).unwrap(), expected);
        }
    }
}
