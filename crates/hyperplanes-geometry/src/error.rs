//! Errors raised by geometric operations.

use hyperplanes_scalar::ParseScalarError;
use thiserror::Error;

/// Errors that can occur in vector and hyperplane operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// A vector was built from no coordinates.
    #[error("the coordinates must be nonempty")]
    EmptyVector,

    /// Two operands live in different dimensions.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        expected: usize,
        /// Dimension of the right operand.
        got: usize,
    },

    /// A division by a zero scalar or by the length of a zero vector.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// An angle was requested with a zero vector.
    #[error("angle is undefined for a zero vector")]
    UndefinedAngle,

    /// A cross product outside two or three dimensions.
    #[error("cross product is only defined in two and three dimensions, got {dimension}")]
    CrossProductDimension {
        /// Dimension of the operands.
        dimension: usize,
    },

    /// Every coordinate is zero.
    #[error("no nonzero elements found")]
    NoNonzeroElement,

    /// A coordinate could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseScalarError),
}

/// Fails with [`GeometryError::DimensionMismatch`] unless `got == expected`.
pub(crate) fn check_dimension(expected: usize, got: usize) -> Result<(), GeometryError> {
    if expected == got {
        Ok(())
    } else {
        Err(GeometryError::DimensionMismatch { expected, got })
    }
}
