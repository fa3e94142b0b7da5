//! Gaussian and Gauss-Jordan elimination over a [`LinearSystem`].

use hyperplanes_geometry::GeometryError;
use hyperplanes_scalar::Scalar;
use log::debug;
use num_traits::Zero;

use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::system::LinearSystem;

impl LinearSystem {
    /// Reduces the system to triangular (row echelon) form.
    ///
    /// Pivots are taken column by column. A column with no row able to
    /// supply a pivot is skipped without consuming a row, so leftover rows
    /// sink to the bottom as `0 = k` equations. Only swaps and linear
    /// combinations are used, so the solution set is unchanged. `self` is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Fails only if a row operation does, which cannot happen for a
    /// well-formed system.
    pub fn triangular_form(&self, config: &SolverConfig) -> Result<LinearSystem, SolveError> {
        let mut system = self.clone();
        let eps = &config.epsilon;
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < system.len() && pivot_col < system.dimension() {
            let leading = system.leading_indices(eps);

            // First row at or below the cursor that leads with this column
            let Some(candidate) = (pivot_row..system.len()).find(|&r| leading[r] == Some(pivot_col))
            else {
                debug!("no pivot for column {pivot_col}");
                pivot_col += 1;
                continue;
            };

            if candidate != pivot_row {
                debug!("swap row {candidate} into pivot position {pivot_row}");
                system.swap_rows(pivot_row, candidate)?;
            }
            debug!("pivot at row {pivot_row}, column {pivot_col}");

            system.clear_column_below(pivot_row, pivot_col)?;
            pivot_row += 1;
            pivot_col += 1;
        }

        Ok(system)
    }

    /// Reduces the system to reduced row echelon form.
    ///
    /// Starting from [`triangular_form`](Self::triangular_form), pivot rows
    /// are swept from last to first: each eliminates its leading variable
    /// from the rows above it and is then scaled so the leading coefficient
    /// is exactly one.
    ///
    /// # Errors
    ///
    /// Fails only if a row operation does, which cannot happen for a
    /// well-formed system.
    pub fn rref(&self, config: &SolverConfig) -> Result<LinearSystem, SolveError> {
        let mut system = self.triangular_form(config)?;
        let leading = system.leading_indices(&config.epsilon);

        for (row, col) in leading.iter().enumerate().rev() {
            let Some(col) = *col else { continue };
            system.clear_column_above(row, col)?;

            let inverse = system[row].normal_vector()[col]
                .checked_recip()
                .ok_or(GeometryError::DivisionByZero)?;
            system.scale_row(&inverse, row)?;
        }

        Ok(system)
    }

    fn clear_column_below(&mut self, pivot_row: usize, col: usize) -> Result<(), SolveError> {
        for row in pivot_row + 1..self.len() {
            let factor = self.elimination_factor(pivot_row, row, col)?;
            if let Some(factor) = factor {
                self.add_scaled_row(&factor, pivot_row, row)?;
            }
        }
        Ok(())
    }

    fn clear_column_above(&mut self, pivot_row: usize, col: usize) -> Result<(), SolveError> {
        for row in 0..pivot_row {
            let factor = self.elimination_factor(pivot_row, row, col)?;
            if let Some(factor) = factor {
                self.add_scaled_row(&factor, pivot_row, row)?;
            }
        }
        Ok(())
    }

    // Multiplier that cancels `col` in `target` using `pivot_row`, or None
    // when the entry is already zero.
    fn elimination_factor(
        &self,
        pivot_row: usize,
        target: usize,
        col: usize,
    ) -> Result<Option<Scalar>, SolveError> {
        let entry = &self[target].normal_vector()[col];
        if entry.is_zero() {
            return Ok(None);
        }
        let pivot = &self[pivot_row].normal_vector()[col];
        let ratio = entry
            .checked_div(pivot)
            .ok_or(GeometryError::DivisionByZero)?;
        Ok(Some(-ratio))
    }
}
