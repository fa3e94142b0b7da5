//! Human-readable rendering of equations and solution sets.

use std::fmt::Write;

use hyperplanes_scalar::Scalar;
use num_traits::{One, Zero};

/// Decimal places kept when rendering equation coefficients.
pub const DISPLAY_PLACES: usize = 3;

/// Name of the variable at `index`, counting from `x_1`.
#[must_use]
pub fn variable_name(index: usize) -> String {
    format!("x_{}", index + 1)
}

/// Renders `coefficients · x = constant`.
///
/// `leading` is the index of the first coefficient that is not near zero;
/// that term carries only its sign, every later term is written as `+ c`
/// or `- c`. Coefficients that round to zero are omitted and unit
/// coefficients are written without the number. A row with no leading
/// coefficient renders its left side as `0`.
#[must_use]
pub fn equation(coefficients: &[Scalar], constant: &Scalar, leading: Option<usize>) -> String {
    let mut out = String::new();

    match leading {
        Some(initial) => {
            let terms: Vec<String> = coefficients
                .iter()
                .enumerate()
                .filter_map(|(i, c)| {
                    let rounded = c.round_to(DISPLAY_PLACES);
                    if rounded.is_zero() {
                        None
                    } else {
                        Some(format!("{}{}", coefficient(&rounded, i == initial), variable_name(i)))
                    }
                })
                .collect();
            out.push_str(&terms.join(" "));
        }
        None => out.push('0'),
    }

    let _ = write!(out, " = {}", constant.to_decimal_string(DISPLAY_PLACES));
    out
}

fn coefficient(rounded: &Scalar, is_initial_term: bool) -> String {
    let mut out = String::new();
    if rounded.is_negative() {
        out.push('-');
    } else if !is_initial_term {
        out.push('+');
    }
    if !is_initial_term {
        out.push(' ');
    }
    let magnitude = rounded.abs();
    if !magnitude.is_one() {
        out.push_str(&magnitude.to_decimal_string(DISPLAY_PLACES));
    }
    out
}

/// Renders a coordinate with values within `eps` of `0` or `±1` snapped.
#[must_use]
pub fn snapped(value: &Scalar, eps: &Scalar) -> String {
    if value.is_near_zero(eps) {
        "0".to_string()
    } else if (&value.abs() - &Scalar::one()).is_near_zero(eps) {
        let unit = if value.is_negative() { "-1" } else { "1" };
        unit.to_string()
    } else {
        value.to_string()
    }
}

/// Renders `[c_1, c_2, ...]` with [`snapped`] coordinates.
#[must_use]
pub fn coordinate_list(coordinates: &[Scalar], eps: &Scalar) -> String {
    let parts: Vec<String> = coordinates.iter().map(|c| snapped(c, eps)).collect();
    format!("[{}]", parts.join(", "))
}
