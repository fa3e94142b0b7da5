//! Classifying a reduced system into its solution set.

use std::fmt;

use hyperplanes_geometry::{Parameterization, Vector};
use hyperplanes_scalar::Scalar;
use log::debug;
use num_traits::{One, Zero};

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::system::LinearSystem;

/// The solution set of a linear system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Exactly one point.
    Unique {
        /// The system in reduced row echelon form. Each pivot row reads
        /// `x_i = value`.
        system: LinearSystem,
        /// The solution, read off the pivots found with the solve tolerance.
        point: Vector,
    },
    /// Some equation reduced to `0 = k` with `k` nonzero.
    NoSolution,
    /// Infinitely many points, one parameter per free variable.
    Infinite(Parameterization),
}

impl Solution {
    /// Returns true for a single solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique { .. })
    }

    /// Returns true if the system has no solution.
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Solution::NoSolution)
    }

    /// Returns the parameterization of an underdetermined system.
    #[must_use]
    pub fn parameterization(&self) -> Option<&Parameterization> {
        match self {
            Solution::Infinite(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the single solution point.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InconsistentSystem`] when there is no solution
    /// and [`SolveError::Underdetermined`] when there are infinitely many.
    pub fn point(&self) -> Result<Vector, SolveError> {
        match self {
            Solution::Unique { point, .. } => Ok(point.clone()),
            Solution::NoSolution => Err(SolveError::InconsistentSystem),
            Solution::Infinite(p) => Err(SolveError::Underdetermined {
                free: p.direction_vectors().len(),
            }),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique { system, .. } => fmt::Display::fmt(system, f),
            Solution::NoSolution => f.write_str("No solutions"),
            Solution::Infinite(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl LinearSystem {
    /// Solves the system with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`solve_with`](Self::solve_with).
    pub fn solve(&self) -> Result<Solution, SolveError> {
        self.solve_with(&SolverConfig::default())
    }

    /// Reduces a copy of the system and classifies its solution set.
    ///
    /// A row whose coefficients are all within `epsilon` of zero but whose
    /// constant is not makes the system inconsistent. Otherwise the system
    /// is underdetermined when there are fewer pivots than variables, and
    /// has a unique solution when every variable has a pivot.
    ///
    /// # Errors
    ///
    /// Fails only if elimination does, which cannot happen for a well-formed
    /// system. Inconsistency is reported as [`Solution::NoSolution`], not as
    /// an error.
    pub fn solve_with(&self, config: &SolverConfig) -> Result<Solution, SolveError> {
        let eps = &config.epsilon;
        let reduced = self.rref(config)?;
        let leading = reduced.leading_indices(eps);

        let contradiction = reduced
            .iter()
            .zip(&leading)
            .rposition(|(row, col)| col.is_none() && !row.constant_term().is_near_zero(eps));
        if let Some(row) = contradiction {
            debug!("row {row} reduces to 0 = {}", reduced[row].constant_term());
            return Ok(Solution::NoSolution);
        }

        let pivots = leading.iter().flatten().count();
        if pivots < reduced.dimension() {
            debug!(
                "{pivots} pivots for {} variables: underdetermined",
                reduced.dimension()
            );
            return Ok(Solution::Infinite(parameterize(&reduced, &leading)?));
        }

        debug!("{pivots} pivots: unique solution");
        let point = pivot_values(&reduced, &leading)?;
        Ok(Solution::Unique {
            system: reduced,
            point,
        })
    }
}

// Pivot variables take their row's constant, free variables zero.
fn pivot_values(
    reduced: &LinearSystem,
    leading: &[Option<usize>],
) -> Result<Vector, SolveError> {
    let mut coordinates = vec![Scalar::zero(); reduced.dimension()];
    for (row, col) in reduced.iter().zip(leading) {
        if let Some(col) = *col {
            coordinates[col] = row.constant_term().clone();
        }
    }
    Ok(Vector::new(coordinates)?)
}

// One direction per free variable, starting from the pivot values.
fn parameterize(
    reduced: &LinearSystem,
    leading: &[Option<usize>],
) -> Result<Parameterization, SolveError> {
    let dimension = reduced.dimension();
    let basepoint = pivot_values(reduced, leading)?;

    let free_variables: Vec<usize> = (0..dimension)
        .filter(|&var| !leading.contains(&Some(var)))
        .collect();
    debug!("free variables {free_variables:?}");

    let mut directions = Vec::with_capacity(free_variables.len());
    for &free in &free_variables {
        let mut direction = vec![Scalar::zero(); dimension];
        for (row, col) in reduced.iter().zip(leading) {
            if let Some(col) = *col {
                direction[col] = -&row.normal_vector()[free];
            }
        }
        direction[free] = Scalar::one();
        directions.push(Vector::new(direction)?);
    }

    Ok(Parameterization::with_free_variables(
        basepoint,
        directions,
        free_variables,
    )?)
}
