//! Parametric descriptions of solution sets.

use std::fmt;

use hyperplanes_scalar::Scalar;
use num_traits::One;

use crate::error::{check_dimension, GeometryError};
use crate::render;
use crate::vector::{zero_tolerance, Vector};

/// The set `{ basepoint + Σ tᵢ · directionᵢ }`.
///
/// Each direction vector is weighted by one free variable. When the
/// parameterization comes out of a solver the free variable indices are
/// known and stored; otherwise they are inferred from the direction vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameterization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
    free_variables: Vec<Option<usize>>,
}

impl Parameterization {
    /// Creates a parameterization, inferring the free variable of each
    /// direction vector.
    ///
    /// A direction's free variable is the first coordinate that is one in
    /// that direction and zero in every other direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if a direction vector
    /// does not share the basepoint's dimension.
    pub fn new(basepoint: Vector, direction_vectors: Vec<Vector>) -> Result<Self, GeometryError> {
        for direction in &direction_vectors {
            check_dimension(basepoint.dimension(), direction.dimension())?;
        }
        let free_variables = (0..direction_vectors.len())
            .map(|i| infer_free_variable(&direction_vectors, i))
            .collect();
        Ok(Self {
            basepoint,
            direction_vectors,
            free_variables,
        })
    }

    /// Creates a parameterization with known free variables.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if a direction vector
    /// does not share the basepoint's dimension, if the number of free
    /// variables differs from the number of directions, or if a free variable
    /// index is out of range.
    pub fn with_free_variables(
        basepoint: Vector,
        direction_vectors: Vec<Vector>,
        free_variables: Vec<usize>,
    ) -> Result<Self, GeometryError> {
        check_dimension(direction_vectors.len(), free_variables.len())?;
        for direction in &direction_vectors {
            check_dimension(basepoint.dimension(), direction.dimension())?;
        }
        if let Some(&index) = free_variables.iter().find(|&&i| i >= basepoint.dimension()) {
            return Err(GeometryError::DimensionMismatch {
                expected: basepoint.dimension(),
                got: index + 1,
            });
        }
        Ok(Self {
            basepoint,
            direction_vectors,
            free_variables: free_variables.into_iter().map(Some).collect(),
        })
    }

    /// Returns the dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Returns the point reached with every parameter at zero.
    #[must_use]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    /// Returns the direction vectors, one per free variable.
    #[must_use]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// Returns the free variable weighting each direction vector.
    #[must_use]
    pub fn free_variables(&self) -> &[Option<usize>] {
        &self.free_variables
    }

    /// Evaluates `basepoint + Σ tᵢ · directionᵢ`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the number of
    /// parameters differs from the number of direction vectors.
    pub fn point_at(&self, parameters: &[Scalar]) -> Result<Vector, GeometryError> {
        check_dimension(self.direction_vectors.len(), parameters.len())?;
        self.direction_vectors
            .iter()
            .zip(parameters)
            .try_fold(self.basepoint.clone(), |point, (direction, t)| {
                point.checked_add(&direction.scale(t))
            })
    }
}

fn infer_free_variable(directions: &[Vector], which: usize) -> Option<usize> {
    let eps = zero_tolerance();
    let one = Scalar::one();
    (0..directions[which].dimension()).find(|&k| {
        (&directions[which][k] - &one).is_near_zero(&eps)
            && directions
                .iter()
                .enumerate()
                .all(|(i, d)| i == which || d[k].is_near_zero(&eps))
    })
}

impl fmt::Display for Parameterization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eps = zero_tolerance();
        let variables: Vec<String> = (0..self.dimension()).map(render::variable_name).collect();
        write!(
            f,
            "[{}] = {}",
            variables.join(", "),
            render::coordinate_list(self.basepoint.coordinates(), &eps)
        )?;
        for (i, (direction, free)) in self
            .direction_vectors
            .iter()
            .zip(&self.free_variables)
            .enumerate()
        {
            let weight = match free {
                Some(index) => render::variable_name(*index),
                None => format!("t_{}", i + 1),
            };
            write!(
                f,
                " + {weight}*{}",
                render::coordinate_list(direction.coordinates(), &eps)
            )?;
        }
        Ok(())
    }
}
