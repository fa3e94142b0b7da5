//! Property-based tests for vector arithmetic.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use hyperplanes_scalar::Scalar;
    use proptest::prelude::*;

    use crate::Vector;

    fn coordinate() -> impl Strategy<Value = Scalar> {
        (-100_000i64..100_000i64).prop_map(|n| Scalar::from_ratio(n, 1000).unwrap())
    }

    // Pairs of vectors sharing a dimension between 1 and 6
    fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1usize..=6).prop_flat_map(|dim| {
            (
                prop::collection::vec(coordinate(), dim),
                prop::collection::vec(coordinate(), dim),
            )
                .prop_map(|(a, b)| (Vector::new(a).unwrap(), Vector::new(b).unwrap()))
        })
    }

    proptest! {
        #[test]
        fn add_sub_round_trip((a, b) in vector_pair()) {
            let back = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn dot_product_symmetric((a, b) in vector_pair()) {
            prop_assert_eq!(a.dot_product(&b).unwrap(), b.dot_product(&a).unwrap());
        }

        #[test]
        fn orthogonal_iff_dot_near_zero((a, b) in vector_pair()) {
            let dot = a.dot_product(&b).unwrap();
            prop_assert_eq!(
                a.is_orthogonal_to(&b).unwrap(),
                dot.is_near_zero(&crate::zero_tolerance())
            );
        }

        #[test]
        fn unit_vector_has_unit_magnitude((a, _b) in vector_pair()) {
            prop_assume!(!a.is_zero());
            assert_relative_eq!(a.unit_vector().unwrap().magnitude(), 1.0, epsilon = 1e-9);
        }

        #[test]
        fn orthogonal_component_is_orthogonal((a, b) in vector_pair()) {
            prop_assume!(!b.is_zero());
            let component = a.orthogonal_component(&b).unwrap();
            prop_assert!(component.is_orthogonal_to(&b).unwrap());
        }

        #[test]
        fn planar_cross_product_matches_embedding(
            x in prop::collection::vec(coordinate(), 2),
            y in prop::collection::vec(coordinate(), 2),
        ) {
            let a = Vector::new(x.clone()).unwrap();
            let b = Vector::new(y.clone()).unwrap();
            let mut x3 = x;
            x3.push(Scalar::from(0));
            let mut y3 = y;
            y3.push(Scalar::from(0));
            let embedded = Vector::new(x3).unwrap().cross_product(&Vector::new(y3).unwrap()).unwrap();
            prop_assert_eq!(a.cross_product(&b).unwrap(), embedded);
        }
    }
}
