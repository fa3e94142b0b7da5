//! Lines and planes: hyperplanes of a fixed dimension.

use std::fmt;
use std::ops::Deref;

use hyperplanes_scalar::Scalar;

use crate::error::{check_dimension, GeometryError};
use crate::hyperplane::Hyperplane;
use crate::vector::Vector;

/// How two lines in the plane meet.
#[derive(Clone, Debug, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at exactly one point.
    Point(Vector),
    /// Both equations describe the same line.
    Coincident,
    /// The lines are parallel and distinct.
    Parallel,
}

/// A line in two dimensions, `a·x_1 + b·x_2 = k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line(Hyperplane);

impl Line {
    /// Number of variables in a line equation.
    pub const DIMENSION: usize = 2;

    /// Creates a line from its normal vector and constant term.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless the normal has two
    /// coordinates.
    pub fn new(normal_vector: Vector, constant_term: Scalar) -> Result<Self, GeometryError> {
        Self::try_from(Hyperplane::new(normal_vector, constant_term))
    }

    /// Returns the underlying hyperplane.
    #[must_use]
    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }

    /// Intersects two lines by Cramer's rule.
    ///
    /// # Errors
    ///
    /// Only fails if the underlying vector operations do, which cannot happen
    /// for two well-formed lines.
    pub fn intersection_with(&self, other: &Line) -> Result<LineIntersection, GeometryError> {
        if self.0.same_as(&other.0)? {
            return Ok(LineIntersection::Coincident);
        }
        if self.0.is_parallel_to(&other.0)? {
            return Ok(LineIntersection::Parallel);
        }

        let (a, b) = (&self.normal_vector()[0], &self.normal_vector()[1]);
        let (c, d) = (&other.normal_vector()[0], &other.normal_vector()[1]);
        let (k1, k2) = (self.constant_term(), other.constant_term());

        let determinant = a * d - b * c;
        let x = (d * k1 - b * k2).checked_div(&determinant);
        let y = (a * k2 - c * k1).checked_div(&determinant);
        match (x, y) {
            (Some(x), Some(y)) => Ok(LineIntersection::Point(Vector::new(vec![x, y])?)),
            // nearly parallel normals that passed the angle test
            _ => Ok(LineIntersection::Parallel),
        }
    }
}

impl TryFrom<Hyperplane> for Line {
    type Error = GeometryError;

    fn try_from(hyperplane: Hyperplane) -> Result<Self, Self::Error> {
        check_dimension(Self::DIMENSION, hyperplane.dimension())?;
        Ok(Self(hyperplane))
    }
}

impl Deref for Line {
    type Target = Hyperplane;

    fn deref(&self) -> &Hyperplane {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A plane in three dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane(Hyperplane);

impl Plane {
    /// Number of variables in a plane equation.
    pub const DIMENSION: usize = 3;

    /// Creates a plane from its normal vector and constant term.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless the normal has
    /// three coordinates.
    pub fn new(normal_vector: Vector, constant_term: Scalar) -> Result<Self, GeometryError> {
        Self::try_from(Hyperplane::new(normal_vector, constant_term))
    }

    /// Returns the underlying hyperplane.
    #[must_use]
    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }
}

impl TryFrom<Hyperplane> for Plane {
    type Error = GeometryError;

    fn try_from(hyperplane: Hyperplane) -> Result<Self, Self::Error> {
        check_dimension(Self::DIMENSION, hyperplane.dimension())?;
        Ok(Self(hyperplane))
    }
}

impl Deref for Plane {
    type Target = Hyperplane;

    fn deref(&self) -> &Hyperplane {
        &self.0
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line(normal: &[&str], constant: &str) -> Line {
        Line::try_from(Hyperplane::parse(normal, constant).unwrap()).unwrap()
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let normal = Vector::from_i64s(&[1, 2, 3]).unwrap();
        assert_eq!(
            Line::new(normal.clone(), Scalar::from(1)),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
        assert!(Plane::new(normal, Scalar::from(1)).is_ok());
    }

    #[test]
    fn test_coincident_lines() {
        let l1 = line(&["4.046", "2.836"], "1.21");
        let l2 = line(&["10.115", "7.09"], "3.025");
        assert!(l1.is_parallel_to(&l2).unwrap());
        assert_eq!(l1.intersection_with(&l2), Ok(LineIntersection::Coincident));
    }

    #[test]
    fn test_crossing_lines() {
        let l1 = line(&["7.204", "3.182"], "8.68");
        let l2 = line(&["8.172", "4.114"], "9.883");
        let Ok(LineIntersection::Point(point)) = l1.intersection_with(&l2) else {
            panic!("expected a single intersection point");
        };
        assert_relative_eq!(point[0].to_f64(), 1.173, epsilon = 1e-3);
        assert_relative_eq!(point[1].to_f64(), 0.073, epsilon = 1e-3);
    }

    #[test]
    fn test_parallel_lines() {
        let l1 = line(&["1.182", "5.562"], "6.744");
        let l2 = line(&["1.773", "8.343"], "9.525");
        assert_eq!(l1.intersection_with(&l2), Ok(LineIntersection::Parallel));
    }

    #[test]
    fn test_display_delegates() {
        assert_eq!(line(&["1", "-1"], "0").to_string(), "x_1 - x_2 = 0");
    }
}
