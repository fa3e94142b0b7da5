//! # hyperplanes-scalar
//!
//! Exact arithmetic for the hyperplanes solver.
//!
//! This crate wraps `dashu` to provide a single `Scalar` type used for every
//! coordinate and constant term. Row reduction applies many subtractions of
//! scaled rows to one another, so the scalar is an arbitrary precision
//! rational rather than a float: decimal input such as `5.862` is stored as
//! `5862/1000` and no rounding happens until a value is converted to `f64`
//! or rendered.
//!
//! ## Tolerances
//!
//! Exact arithmetic still meets tolerances at the edges (values that came
//! from `f64` conversions, user-chosen epsilons). [`Scalar::epsilon`] builds
//! the power-of-ten tolerances and [`Scalar::is_near_zero`] compares against
//! them exactly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod scalar;

#[cfg(test)]
mod proptests;

pub use scalar::{ParseScalarError, Scalar, MAX_DECIMAL_SHIFT};
