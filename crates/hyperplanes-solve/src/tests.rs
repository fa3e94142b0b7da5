//! Integration tests for hyperplanes-solve.

#[cfg(test)]
mod integration_tests {
    use approx::assert_relative_eq;
    use hyperplanes_geometry::{Hyperplane, Parameterization, Vector};
    use hyperplanes_scalar::Scalar;

    use crate::{LinearSystem, Solution, SolveError, SolverConfig};

    fn h(normal: &[&str], constant: &str) -> Hyperplane {
        Hyperplane::parse(normal, constant).unwrap()
    }

    fn system(rows: Vec<Hyperplane>) -> LinearSystem {
        LinearSystem::new(rows).unwrap()
    }

    // Every point of the family must satisfy every input equation exactly.
    fn assert_family_satisfies(p: &Parameterization, s: &LinearSystem) {
        let mut samples = vec![vec![Scalar::from(0); p.direction_vectors().len()]];
        for i in 0..p.direction_vectors().len() {
            let mut params = vec![Scalar::from(0); p.direction_vectors().len()];
            params[i] = Scalar::from_ratio(7, 3).unwrap();
            samples.push(params);
        }
        for params in samples {
            let point = p.point_at(&params).unwrap();
            for row in s {
                assert_eq!(
                    &row.normal_vector().dot_product(&point).unwrap(),
                    row.constant_term()
                );
            }
        }
    }

    #[test]
    fn test_parallel_planes_no_solution() {
        let s = system(vec![
            h(&["5.862", "1.178", "-10.366"], "-8.15"),
            h(&["-2.931", "-0.589", "5.183"], "-4.075"),
        ]);
        assert_eq!(s.solve().unwrap(), Solution::NoSolution);
    }

    #[test]
    fn test_three_planes_through_a_line() {
        let s = system(vec![
            h(&["8.631", "5.112", "-1.816"], "-5.113"),
            h(&["4.315", "11.132", "-5.27"], "-6.775"),
            h(&["-2.158", "3.01", "-1.727"], "-0.831"),
        ]);
        let solution = s.solve().unwrap();
        let p = solution.parameterization().unwrap();
        assert_eq!(p.direction_vectors().len(), 1);
        assert_eq!(p.free_variables(), &[Some(2)]);
        assert_family_satisfies(p, &s);
    }

    #[test]
    fn test_three_planes_meet_at_a_point() {
        let s = system(vec![
            h(&["5.262", "2.739", "-9.878"], "-3.441"),
            h(&["5.111", "6.358", "7.638"], "-2.152"),
            h(&["2.016", "-9.924", "-1.367"], "-9.278"),
        ]);
        let solution = s.solve().unwrap();
        assert!(solution.is_unique());

        let point = solution.point().unwrap();
        assert_relative_eq!(point[0].to_f64(), -1.1772, epsilon = 1e-3);
        assert_relative_eq!(point[1].to_f64(), 0.70715, epsilon = 1e-3);
        assert_relative_eq!(point[2].to_f64(), -0.08266, epsilon = 1e-3);
        for row in &s {
            assert_eq!(&row.normal_vector().dot_product(&point).unwrap(), row.constant_term());
        }
    }

    #[test]
    fn test_pivot_skips_a_column() {
        let s = system(vec![
            h(&["0.786", "0.786", "0.588"], "-0.714"),
            h(&["-0.138", "-0.138", "0.244"], "0.319"),
        ]);
        let solution = s.solve().unwrap();
        let Solution::Infinite(p) = &solution else {
            panic!("expected infinitely many solutions, got {solution}");
        };
        assert_eq!(p.free_variables(), &[Some(1)]);
        assert_eq!(p.direction_vectors(), &[Vector::from_i64s(&[-1, 1, 0]).unwrap()]);
        assert_eq!(p.basepoint()[1], Scalar::from(0));
        assert_family_satisfies(p, &s);
    }

    #[test]
    fn test_four_parallel_planes_coincide() {
        let s = system(vec![
            h(&["0.935", "1.76", "-9.365"], "-9.955"),
            h(&["0.187", "0.352", "-1.873"], "-1.991"),
            h(&["0.374", "0.704", "-3.746"], "-3.982"),
            h(&["-0.561", "-1.056", "5.619"], "5.973"),
        ]);
        let solution = s.solve().unwrap();
        let p = solution.parameterization().unwrap();
        assert_eq!(p.free_variables(), &[Some(1), Some(2)]);
        assert_eq!(solution.point(), Err(SolveError::Underdetermined { free: 2 }));
        assert_family_satisfies(p, &s);
    }

    #[test]
    fn test_five_dimensional_family() {
        let s = system(vec![
            h(&["0.786", "0.786", "8.123", "1.111", "-8.363"], "-9.955"),
            h(&["-0.131", "0.131", "7.05", "-2.813", "1.19"], "-1.991"),
            h(&["9.015", "-5.873", "-1.105", "2.013", "-2.802"], "-3.982"),
        ]);
        let solution = s.solve().unwrap();
        let p = solution.parameterization().unwrap();
        assert_eq!(p.dimension(), 5);
        assert_eq!(p.free_variables(), &[Some(3), Some(4)]);
        assert_family_satisfies(p, &s);
        assert!(p.to_string().starts_with("[x_1, x_2, x_3, x_4, x_5] = ["));
    }

    #[test]
    fn test_solve_leaves_input_untouched() {
        let s = system(vec![h(&["0", "1"], "1"), h(&["1", "1"], "3")]);
        let before = s.clone();
        let reduced = s.rref(&SolverConfig::default()).unwrap();
        assert_eq!(s.rows(), before.rows());
        assert_eq!(reduced.rref(&SolverConfig::default()).unwrap(), reduced);
        assert_eq!(
            s.solve().unwrap().point().unwrap(),
            Vector::from_i64s(&[2, 1]).unwrap()
        );
    }
}
