//! Hyperplanes: single linear equations `normal · x = constant`.

use std::fmt;

use hyperplanes_scalar::Scalar;
use num_traits::Zero;

use crate::error::GeometryError;
use crate::render;
use crate::vector::{zero_tolerance, Vector};

/// Returns the index of the first coordinate with `|c| >= eps`.
///
/// # Errors
///
/// Returns [`GeometryError::NoNonzeroElement`] if every coordinate is within
/// `eps` of zero.
pub fn first_nonzero_index(coordinates: &[Scalar], eps: &Scalar) -> Result<usize, GeometryError> {
    coordinates
        .iter()
        .position(|c| !c.is_near_zero(eps))
        .ok_or(GeometryError::NoNonzeroElement)
}

/// A linear equation in n-dimensional space.
///
/// The basepoint is derived once at construction; row operations build new
/// hyperplanes rather than mutating this one.
#[derive(Clone, Debug)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: Scalar,
    basepoint: Option<Vector>,
}

impl Hyperplane {
    /// Creates the hyperplane `normal_vector · x = constant_term`.
    #[must_use]
    pub fn new(normal_vector: Vector, constant_term: Scalar) -> Self {
        let basepoint = Self::compute_basepoint(&normal_vector, &constant_term);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Creates `normal_vector · x = 0`.
    #[must_use]
    pub fn from_normal(normal_vector: Vector) -> Self {
        Self::new(normal_vector, Scalar::zero())
    }

    /// Creates the degenerate equation `0 = 0` in `dimension` variables.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyVector`] for dimension 0.
    pub fn zero(dimension: usize) -> Result<Self, GeometryError> {
        Ok(Self::from_normal(Vector::zeros(dimension)?))
    }

    /// Creates a hyperplane from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parse`] for malformed numbers and
    /// [`GeometryError::EmptyVector`] for an empty normal.
    pub fn parse(normal: &[&str], constant: &str) -> Result<Self, GeometryError> {
        Ok(Self::new(Vector::parse(normal)?, constant.parse()?))
    }

    // Solve for the first usable coordinate with the others at zero.
    fn compute_basepoint(normal_vector: &Vector, constant_term: &Scalar) -> Option<Vector> {
        let n = normal_vector.coordinates();
        let initial_index = first_nonzero_index(n, &zero_tolerance()).ok()?;
        let mut coordinates = vec![Scalar::zero(); n.len()];
        coordinates[initial_index] = constant_term.checked_div(&n[initial_index])?;
        Vector::new(coordinates).ok()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    /// Returns the normal vector (the coefficients).
    #[must_use]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> &Scalar {
        &self.constant_term
    }

    /// Returns a point on the hyperplane, or `None` if the normal is zero.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Index of the first coefficient not within `eps` of zero.
    #[must_use]
    pub fn leading_index(&self, eps: &Scalar) -> Option<usize> {
        first_nonzero_index(self.normal_vector.coordinates(), eps).ok()
    }

    /// Returns true if every coefficient is within `eps` of zero.
    #[must_use]
    pub fn has_zero_normal(&self, eps: &Scalar) -> bool {
        self.leading_index(eps).is_none()
    }

    /// Returns the hyperplane with both sides multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: &Scalar) -> Self {
        Self::new(
            self.normal_vector.scale(factor),
            &self.constant_term * factor,
        )
    }

    /// Returns `self + factor * other`, equation by equation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn plus_scaled(&self, factor: &Scalar, other: &Hyperplane) -> Result<Self, GeometryError> {
        let normal_vector = self
            .normal_vector
            .checked_add(&other.normal_vector.scale(factor))?;
        let constant_term = &self.constant_term + &(&other.constant_term * factor);
        Ok(Self::new(normal_vector, constant_term))
    }

    /// Returns true if the normal vectors are parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel_to(&self, other: &Hyperplane) -> Result<bool, GeometryError> {
        self.normal_vector.is_parallel_to(&other.normal_vector)
    }

    /// Returns true if both equations describe the same set of points.
    ///
    /// Parallel hyperplanes coincide when the vector between their basepoints
    /// is orthogonal to the normal. Two equations with zero normals coincide
    /// when their constants agree (`0 = 0` with `0 = 0`, `0 = 1` with
    /// `0 = 1`).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn same_as(&self, other: &Hyperplane) -> Result<bool, GeometryError> {
        if !self.is_parallel_to(other)? {
            return Ok(false);
        }
        match (&self.basepoint, &other.basepoint) {
            (None, None) => {
                Ok((&self.constant_term - &other.constant_term).is_near_zero(&zero_tolerance()))
            }
            (Some(a), Some(b)) => a.checked_sub(b)?.is_orthogonal_to(&self.normal_vector),
            _ => Ok(false),
        }
    }
}

impl PartialEq for Hyperplane {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other).unwrap_or(false)
    }
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leading = self.leading_index(&zero_tolerance());
        f.write_str(&render::equation(
            self.normal_vector.coordinates(),
            &self.constant_term,
            leading,
        ))
    }
}
