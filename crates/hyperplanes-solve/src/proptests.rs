//! Property-based tests for elimination and classification.

#[cfg(test)]
mod tests {
    use hyperplanes_geometry::{Hyperplane, Vector};
    use hyperplanes_scalar::Scalar;
    use proptest::prelude::*;

    use crate::{LinearSystem, Solution, SolverConfig};

    // Systems of 1 to 4 equations in 1 to 4 variables with small integer
    // coefficients, so every exact nonzero intermediate stays far above the
    // default tolerance.
    fn small_system() -> impl Strategy<Value = LinearSystem> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, dim)| {
            prop::collection::vec(
                (prop::collection::vec(-5i64..=5, dim), -9i64..=9),
                rows,
            )
            .prop_map(|equations| {
                let rows = equations
                    .into_iter()
                    .map(|(normal, constant)| {
                        Hyperplane::new(Vector::from_i64s(&normal).unwrap(), Scalar::from(constant))
                    })
                    .collect();
                LinearSystem::new(rows).unwrap()
            })
        })
    }

    fn satisfies(system: &LinearSystem, point: &Vector) -> bool {
        system
            .iter()
            .all(|row| &row.normal_vector().dot_product(point).unwrap() == row.constant_term())
    }

    proptest! {
        #[test]
        fn rref_is_idempotent(system in small_system()) {
            let config = SolverConfig::default();
            let once = system.rref(&config).unwrap();
            let twice = once.rref(&config).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rref_pivots_are_one(system in small_system()) {
            let config = SolverConfig::default();
            let reduced = system.rref(&config).unwrap();
            for (row, col) in reduced.iter().zip(reduced.leading_indices(&config.epsilon)) {
                if let Some(col) = col {
                    prop_assert_eq!(&row.normal_vector()[col], &Scalar::from(1));
                }
            }
        }

        #[test]
        fn solutions_satisfy_the_equations(system in small_system()) {
            let solution = system.solve().unwrap();
            match &solution {
                Solution::Unique { point, .. } => {
                    prop_assert!(satisfies(&system, point));
                    prop_assert_eq!(&solution.point().unwrap(), point);
                }
                Solution::Infinite(p) => {
                    prop_assert!(satisfies(&system, p.basepoint()));
                    for direction in p.direction_vectors() {
                        let shifted = p.basepoint().checked_add(direction).unwrap();
                        prop_assert!(satisfies(&system, &shifted));
                    }
                }
                Solution::NoSolution => {
                    let config = SolverConfig::default();
                    let reduced = system.rref(&config).unwrap();
                    let has_inconsistent_row = reduced.iter().any(|row| {
                        row.has_zero_normal(&config.epsilon)
                            && !row.constant_term().is_near_zero(&config.epsilon)
                    });
                    prop_assert!(has_inconsistent_row);
                }
            }
        }
    }
}
