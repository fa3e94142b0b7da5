//! Property-based tests for exact scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Scalar;

    // Strategy for generating decimals with up to three fractional digits
    fn small_decimal() -> impl Strategy<Value = Scalar> {
        (-10_000i64..10_000i64).prop_map(|n| Scalar::from_ratio(n, 1000).unwrap())
    }

    // Strategy for generating non-zero decimals
    fn non_zero_decimal() -> impl Strategy<Value = Scalar> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
            .prop_map(|n| Scalar::from_ratio(n, 1000).unwrap())
    }

    proptest! {
        #[test]
        fn scalar_add_commutative(a in small_decimal(), b in small_decimal()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn scalar_add_sub_round_trip(a in small_decimal(), b in small_decimal()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn scalar_distributive(a in small_decimal(), b in small_decimal(), c in small_decimal()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn scalar_mul_div_round_trip(a in small_decimal(), b in non_zero_decimal()) {
            prop_assert_eq!(&(&a * &b) / &b, a);
        }

        #[test]
        fn scalar_multiplicative_inverse(a in non_zero_decimal()) {
            let inv = a.checked_recip().unwrap();
            prop_assert!((&a * &inv).is_one());
        }

        #[test]
        fn scalar_additive_inverse(a in small_decimal()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn scalar_decimal_text_round_trip(n in -10_000_000i64..10_000_000i64) {
            let a = Scalar::from_ratio(n, 1000).unwrap();
            let text = a.to_decimal_string(3);
            prop_assert_eq!(text.parse::<Scalar>().unwrap(), a);
        }

        #[test]
        fn scalar_f64_close(a in small_decimal()) {
            let back = Scalar::try_from_f64(a.to_f64()).unwrap();
            prop_assert!((&back - &a).is_near_zero(&Scalar::epsilon(12)));
        }
    }
}
