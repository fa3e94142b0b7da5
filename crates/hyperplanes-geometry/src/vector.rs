//! Fixed-dimension vectors over exact scalars.
//!
//! Coordinates stay exact through every arithmetic operation. Quantities
//! that need a square root or a trigonometric function (magnitude, angle,
//! areas) are reduced to exact ratios first and only then converted to
//! `f64`, so coordinates far outside the `f64` range of their squares still
//! give finite answers.

use std::fmt;
use std::ops::{Index, Mul, Neg};

use hyperplanes_scalar::Scalar;
use num_traits::{One, Zero};

use crate::error::{check_dimension, GeometryError};

/// Decimal places of the tolerance used for zero and orthogonality tests.
pub const ZERO_TOLERANCE_DIGITS: u32 = 10;

/// Tolerance on angles, in radians, when testing for parallel vectors.
///
/// Compared against the sine of the angle, which is computed exactly up to
/// its final square root.
pub const PARALLEL_TOLERANCE: f64 = 1e-6;

/// Returns the scalar tolerance `1e-10`.
#[must_use]
pub fn zero_tolerance() -> Scalar {
    Scalar::epsilon(ZERO_TOLERANCE_DIGITS)
}

/// Unit in which [`Vector::angle`] reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians in `[0, π]`.
    #[default]
    Radians,
    /// Degrees in `[0, 180]`.
    Degrees,
}

/// An immutable vector with at least one coordinate.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Vector {
    coordinates: Vec<Scalar>,
}

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyVector`] if `coordinates` is empty.
    pub fn new(coordinates: Vec<Scalar>) -> Result<Self, GeometryError> {
        if coordinates.is_empty() {
            return Err(GeometryError::EmptyVector);
        }
        Ok(Self { coordinates })
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyVector`] for dimension 0.
    pub fn zeros(dimension: usize) -> Result<Self, GeometryError> {
        Self::new(vec![Scalar::zero(); dimension])
    }

    /// Creates a vector with integer coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyVector`] if `values` is empty.
    pub fn from_i64s(values: &[i64]) -> Result<Self, GeometryError> {
        Self::new(values.iter().map(|&v| Scalar::from(v)).collect())
    }

    /// Creates a vector from decimal text, e.g. `["5.862", "-0.131"]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Parse`] for malformed numbers and
    /// [`GeometryError::EmptyVector`] if `values` is empty.
    pub fn parse(values: &[&str]) -> Result<Self, GeometryError> {
        let coordinates = values
            .iter()
            .map(|v| v.parse::<Scalar>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coordinates)
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    /// Consumes the vector, returning its coordinates.
    #[must_use]
    pub fn into_coordinates(self) -> Vec<Scalar> {
        self.coordinates
    }

    /// Returns the coordinate at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.coordinates.get(index)
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coordinates.iter()
    }

    /// Computes `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Computes `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector, GeometryError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Vector,
        f: impl Fn(&Scalar, &Scalar) -> Scalar,
    ) -> Result<Vector, GeometryError> {
        check_dimension(self.dimension(), other.dimension())?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    /// Multiplies every coordinate by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Scalar) -> Vector {
        Self {
            coordinates: self.coordinates.iter().map(|x| x * factor).collect(),
        }
    }

    /// Divides every coordinate by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(&self, divisor: &Scalar) -> Result<Vector, GeometryError> {
        let inverse = divisor
            .checked_recip()
            .ok_or(GeometryError::DivisionByZero)?;
        Ok(self.scale(&inverse))
    }

    /// Returns the exact squared Euclidean norm.
    #[must_use]
    pub fn magnitude_squared(&self) -> Scalar {
        self.coordinates.iter().map(|x| x * x).sum()
    }

    /// Returns the Euclidean norm.
    ///
    /// Computed as `m * |v / m|` with `m` the largest absolute coordinate, so
    /// only `m` itself has to fit in an `f64`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        let largest = self.max_abs_coordinate();
        match largest.checked_recip() {
            Some(inverse) => {
                largest.to_f64() * self.scale(&inverse).magnitude_squared().to_f64().sqrt()
            }
            None => 0.0,
        }
    }

    fn max_abs_coordinate(&self) -> Scalar {
        self.coordinates
            .iter()
            .map(Scalar::abs)
            .max()
            .unwrap_or_default()
    }

    /// Returns the vector of magnitude one pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] for the zero vector.
    pub fn unit_vector(&self) -> Result<Vector, GeometryError> {
        if self.is_zero() {
            return Err(GeometryError::DivisionByZero);
        }
        // |v / m|² lies in [1, n] whatever the size of the coordinates
        let normalized = self.divide(&self.max_abs_coordinate())?;
        let magnitude = Scalar::try_from_f64(normalized.magnitude_squared().to_f64().sqrt())?;
        normalized.divide(&magnitude)
    }

    /// Computes the dot product.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn dot_product(&self, other: &Vector) -> Result<Scalar, GeometryError> {
        check_dimension(self.dimension(), other.dimension())?;
        Ok(self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Computes the angle between two vectors.
    ///
    /// The squared cosine `(a·b)² / (|a|² |b|²)` and squared sine are exact
    /// ratios in `[0, 1]`; the angle is `atan2` of their square roots, so it
    /// always lands in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UndefinedAngle`] if either vector is zero and
    /// [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> Result<f64, GeometryError> {
        let (dot, cosine_squared) = self.squared_cosine(other)?;
        let sine = (Scalar::one() - &cosine_squared).to_f64().sqrt();
        let cosine = f64::from(dot.signum()) * cosine_squared.to_f64().sqrt();
        let radians = sine.atan2(cosine);
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Returns `a·b` and the exact `(a·b)² / (|a|² |b|²)`.
    fn squared_cosine(&self, other: &Vector) -> Result<(Scalar, Scalar), GeometryError> {
        let dot = self.dot_product(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(GeometryError::UndefinedAngle);
        }
        let cosine_squared = (&dot * &dot)
            .checked_div(&(self.magnitude_squared() * other.magnitude_squared()))
            .ok_or(GeometryError::UndefinedAngle)?;
        Ok((dot, cosine_squared))
    }

    /// Returns true if the magnitude is below `1e-10`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        let tolerance = zero_tolerance();
        self.magnitude_squared() < &tolerance * &tolerance
    }

    /// Returns true if the dot product is within `1e-10` of zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool, GeometryError> {
        Ok(self.dot_product(other)?.is_near_zero(&zero_tolerance()))
    }

    /// Returns true if either vector is zero or the angle between them is
    /// within [`PARALLEL_TOLERANCE`] of `0` or `π`.
    ///
    /// Tested exactly as `1 - cos² θ < tolerance²`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool, GeometryError> {
        check_dimension(self.dimension(), other.dimension())?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let (_, cosine_squared) = self.squared_cosine(other)?;
        let tolerance = Scalar::try_from_f64(PARALLEL_TOLERANCE)?;
        Ok(Scalar::one() - cosine_squared < &tolerance * &tolerance)
    }

    /// Projects `self` onto the line spanned by `basis`.
    ///
    /// Computed as `basis * (self · basis) / |basis|²`, which is the scalar
    /// projection times the unit vector of `basis` without leaving exact
    /// arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `basis` is zero and
    /// [`GeometryError::DimensionMismatch`] if the dimensions differ.
    pub fn projection_on(&self, basis: &Vector) -> Result<Vector, GeometryError> {
        let dot = self.dot_product(basis)?;
        if basis.is_zero() {
            return Err(GeometryError::DivisionByZero);
        }
        let weight = dot
            .checked_div(&basis.magnitude_squared())
            .ok_or(GeometryError::DivisionByZero)?;
        Ok(basis.scale(&weight))
    }

    /// Returns the component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::projection_on`].
    pub fn orthogonal_component(&self, basis: &Vector) -> Result<Vector, GeometryError> {
        self.checked_sub(&self.projection_on(basis)?)
    }

    /// Computes the cross product.
    ///
    /// Two-dimensional vectors are embedded in three dimensions with a zero
    /// third coordinate first.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CrossProductDimension`] outside two and three
    /// dimensions and [`GeometryError::DimensionMismatch`] if the dimensions
    /// differ.
    pub fn cross_product(&self, other: &Vector) -> Result<Vector, GeometryError> {
        check_dimension(self.dimension(), other.dimension())?;
        match self.dimension() {
            3 => {
                let [x1, y1, z1] = [&self[0], &self[1], &self[2]];
                let [x2, y2, z2] = [&other[0], &other[1], &other[2]];
                Vector::new(vec![
                    y1 * z2 - y2 * z1,
                    -(x1 * z2 - x2 * z1),
                    x1 * y2 - x2 * y1,
                ])
            }
            2 => self
                .embed_in_three_dimensions()
                .cross_product(&other.embed_in_three_dimensions()),
            dimension => Err(GeometryError::CrossProductDimension { dimension }),
        }
    }

    fn embed_in_three_dimensions(&self) -> Vector {
        let mut coordinates = self.coordinates.clone();
        coordinates.push(Scalar::zero());
        Self { coordinates }
    }

    /// Area of the parallelogram spanned by the two vectors,
    /// `|a| |b| sin θ`, valid in any dimension.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::angle`].
    pub fn parallelogram_area(&self, other: &Vector) -> Result<f64, GeometryError> {
        let (_, cosine_squared) = self.squared_cosine(other)?;
        let sine = (Scalar::one() - cosine_squared).to_f64().sqrt();
        Ok(self.magnitude() * other.magnitude() * sine)
    }

    /// Area of the triangle spanned by the two vectors.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::angle`].
    pub fn triangle_area(&self, other: &Vector) -> Result<f64, GeometryError> {
        Ok(0.5 * self.parallelogram_area(other)?)
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.coordinates[index]
    }
}

impl Mul<&Scalar> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for &Scalar {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            coordinates: self.coordinates.iter().map(|x| -x).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
