//! Systems of hyperplane equations and the primitive row operations.

use std::fmt;
use std::ops::Index;

use hyperplanes_geometry::Hyperplane;
use hyperplanes_scalar::Scalar;
use log::trace;
use num_traits::Zero;

use crate::error::SolveError;

/// An ordered collection of equations sharing one dimension.
///
/// Rows are identified only by position. Row operations replace rows
/// wholesale with freshly built hyperplanes.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem {
    rows: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system from its equations.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptySystem`] without equations and
    /// [`SolveError::DimensionMismatch`] if the equations disagree in
    /// dimension.
    pub fn new(rows: Vec<Hyperplane>) -> Result<Self, SolveError> {
        let dimension = rows.first().ok_or(SolveError::EmptySystem)?.dimension();
        if let Some((row, hyperplane)) = rows
            .iter()
            .enumerate()
            .find(|(_, h)| h.dimension() != dimension)
        {
            return Err(SolveError::DimensionMismatch {
                row,
                expected: dimension,
                got: hyperplane.dimension(),
            });
        }
        Ok(Self { rows, dimension })
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a system holds at least one equation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the equations in order.
    #[must_use]
    pub fn rows(&self) -> &[Hyperplane] {
        &self.rows
    }

    /// Iterates over the equations.
    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.rows.iter()
    }

    /// Returns the equation at `row`, if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Hyperplane> {
        self.rows.get(row)
    }

    /// Replaces the equation at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::RowOutOfBounds`] for a bad index and
    /// [`SolveError::DimensionMismatch`] if `hyperplane` has a different
    /// dimension than the system.
    pub fn set(&mut self, row: usize, hyperplane: Hyperplane) -> Result<(), SolveError> {
        self.check_row(row)?;
        if hyperplane.dimension() != self.dimension {
            return Err(SolveError::DimensionMismatch {
                row,
                expected: self.dimension,
                got: hyperplane.dimension(),
            });
        }
        self.rows[row] = hyperplane;
        Ok(())
    }

    /// Exchanges two rows.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::RowOutOfBounds`] for a bad index.
    pub fn swap_rows(&mut self, first: usize, second: usize) -> Result<(), SolveError> {
        self.check_row(first)?;
        self.check_row(second)?;
        trace!("swap rows {first} and {second}");
        self.rows.swap(first, second);
        Ok(())
    }

    /// Multiplies both sides of `row` by `factor`.
    ///
    /// Only an exactly zero factor is rejected. Arithmetic is exact, so a
    /// tiny nonzero factor is still an invertible row operation.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ZeroMultiplier`] if `factor` is zero and
    /// [`SolveError::RowOutOfBounds`] for a bad index.
    pub fn scale_row(&mut self, factor: &Scalar, row: usize) -> Result<(), SolveError> {
        self.check_row(row)?;
        if factor.is_zero() {
            return Err(SolveError::ZeroMultiplier);
        }
        trace!("scale row {row} by {factor}");
        self.rows[row] = self.rows[row].scaled(factor);
        Ok(())
    }

    /// Adds `factor` times row `source` to row `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::RowOutOfBounds`] for a bad index.
    pub fn add_scaled_row(
        &mut self,
        factor: &Scalar,
        source: usize,
        target: usize,
    ) -> Result<(), SolveError> {
        self.check_row(source)?;
        self.check_row(target)?;
        trace!("add {factor} times row {source} to row {target}");
        self.rows[target] = self.rows[target].plus_scaled(factor, &self.rows[source])?;
        Ok(())
    }

    /// Returns, per row, the index of its first coefficient not within
    /// `eps` of zero (`None` for rows whose coefficients are all near zero).
    #[must_use]
    pub fn leading_indices(&self, eps: &Scalar) -> Vec<Option<usize>> {
        self.rows.iter().map(|row| row.leading_index(eps)).collect()
    }

    fn check_row(&self, row: usize) -> Result<(), SolveError> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(SolveError::RowOutOfBounds {
                row,
                len: self.rows.len(),
            })
        }
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, row: usize) -> &Hyperplane {
        &self.rows[row]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "\nEquation {}: {row}", i + 1)?;
        }
        Ok(())
    }
}
