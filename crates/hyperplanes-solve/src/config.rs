//! Solver configuration.

use hyperplanes_scalar::Scalar;

/// Decimal places of the default near-zero tolerance.
pub const DEFAULT_EPSILON_DIGITS: u32 = 10;

/// Configuration for elimination and solution classification.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Coefficients and constants with `|x| < epsilon` count as zero when
    /// locating pivots and detecting contradictory rows.
    pub epsilon: Scalar,
}

impl SolverConfig {
    /// Replaces the near-zero tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Scalar) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: Scalar::epsilon(DEFAULT_EPSILON_DIGITS),
        }
    }
}
