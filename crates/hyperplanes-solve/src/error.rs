//! Errors raised by linear systems.

use hyperplanes_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while building, transforming or solving a system.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// A system was built from no equations.
    #[error("a linear system needs at least one equation")]
    EmptySystem,

    /// An equation disagrees with the system's dimension.
    #[error("all hyperplanes in the system should live in the same dimension: row {row} has dimension {got}, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending equation.
        row: usize,
        /// Dimension of the system.
        expected: usize,
        /// Dimension of the offending equation.
        got: usize,
    },

    /// A row index past the last equation.
    #[error("row {row} is out of bounds for a system of {len} equations")]
    RowOutOfBounds {
        /// The requested index.
        row: usize,
        /// Number of equations in the system.
        len: usize,
    },

    /// A row was scaled by exactly zero.
    #[error("a row can only be scaled by a nonzero multiplier")]
    ZeroMultiplier,

    /// Elimination produced `0 = k` with `k` nonzero.
    #[error("no solutions")]
    InconsistentSystem,

    /// A single point was requested from a family of solutions.
    #[error("infinitely many solutions ({free} free variables)")]
    Underdetermined {
        /// Number of free variables in the family.
        free: usize,
    },

    /// A vector or hyperplane operation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
