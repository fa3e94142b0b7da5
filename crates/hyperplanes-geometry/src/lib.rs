//! # hyperplanes-geometry
//!
//! The value types consumed by the elimination engine.
//!
//! This crate provides:
//! - `Vector`: fixed-dimension tuples of exact scalars with the usual
//!   arithmetic, angles, projections and cross products
//! - `Hyperplane`: a single equation `normal · x = constant` with a derived
//!   basepoint, plus the `Line` and `Plane` specializations
//! - `Parameterization`: basepoint plus direction vectors, the shape of an
//!   underdetermined solution set
//! - `render`: the `x_1 + 2x_2 = 3` text form shared by all of the above

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hyperplane;
pub mod line;
pub mod parameterization;
pub mod render;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use error::GeometryError;
pub use hyperplane::{first_nonzero_index, Hyperplane};
pub use line::{Line, LineIntersection, Plane};
pub use parameterization::Parameterization;
pub use vector::{zero_tolerance, AngleUnit, Vector, PARALLEL_TOLERANCE, ZERO_TOLERANCE_DIGITS};
