//! # Hyperplanes
//!
//! Systems of linear equations solved by Gaussian elimination.
//!
//! Each equation is a hyperplane `a_1 x_1 + ... + a_n x_n = k` with exact
//! rational coefficients. A system either meets in a single point, has no
//! solution, or describes a whole family of points given as a basepoint plus
//! a combination of direction vectors.
//!
//! ## Crates
//!
//! - [`scalar`]: exact rational numbers with decimal parsing and rendering
//! - [`geometry`]: vectors, hyperplanes, lines, planes, parameterizations
//! - [`solve`]: linear systems, elimination and solution classification
//!
//! ## Quick Start
//!
//! ```rust
//! use hyperplanes::prelude::*;
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::parse(&["1", "1", "1"], "1").unwrap(),
//!     Hyperplane::parse(&["1", "1", "1"], "2").unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(system.solve().unwrap(), Solution::NoSolution);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use hyperplanes_geometry as geometry;
pub use hyperplanes_scalar as scalar;
pub use hyperplanes_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hyperplanes_geometry::{
        AngleUnit, GeometryError, Hyperplane, Line, LineIntersection, Parameterization, Plane,
        Vector,
    };
    pub use hyperplanes_scalar::Scalar;
    pub use hyperplanes_solve::{LinearSystem, Solution, SolveError, SolverConfig};
}
