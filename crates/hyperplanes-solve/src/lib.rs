//! # hyperplanes-solve
//!
//! Gaussian elimination over systems of hyperplane equations.
//!
//! This crate provides:
//! - `LinearSystem`: an ordered set of equations with the three elementary
//!   row operations
//! - Triangular form and reduced row echelon form
//! - `Solution`: classification into a unique point, no solution, or a
//!   `Parameterization` of infinitely many solutions
//!
//! All arithmetic is exact. The near-zero tolerance in `SolverConfig` only
//! decides which coefficients count as pivots and which rows read `0 = k`.
//!
//! ## Example
//!
//! ```
//! use hyperplanes_geometry::Hyperplane;
//! use hyperplanes_solve::LinearSystem;
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::parse(&["1", "1", "1"], "1").unwrap(),
//!     Hyperplane::parse(&["0", "1", "1"], "2").unwrap(),
//! ])
//! .unwrap();
//! let solution = system.solve().unwrap();
//! assert_eq!(
//!     solution.to_string(),
//!     "[x_1, x_2, x_3] = [-1, 2, 0] + x_3*[0, -1, 1]"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod solution;
pub mod system;

mod elimination;

pub use config::{SolverConfig, DEFAULT_EPSILON_DIGITS};
pub use error::SolveError;
pub use solution::Solution;
pub use system::LinearSystem;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
