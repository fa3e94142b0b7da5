//! Arbitrary precision scalars.
//!
//! This module provides the exact number type shared by vectors, hyperplanes
//! and the elimination engine.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building a [`Scalar`] from text or a float.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseScalarError {
    /// The text was empty or only whitespace.
    #[error("cannot parse a scalar from empty text")]
    Empty,

    /// The mantissa is not a decimal number.
    #[error("invalid decimal digits in {0:?}")]
    InvalidDigits(String),

    /// The exponent is malformed or scales by more than
    /// [`MAX_DECIMAL_SHIFT`] places.
    #[error("invalid exponent in {0:?}")]
    InvalidExponent(String),

    /// The float was NaN or infinite.
    #[error("{0} is not a finite number")]
    NonFinite(f64),
}

/// An exact arbitrary precision number.
///
/// Values are stored as reduced fractions, so every decimal literal is
/// represented without error and row operations never accumulate rounding.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scalar(RBig);

impl Scalar {
    /// Creates a scalar from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Creates a scalar from a numerator and denominator.
    ///
    /// Returns `None` if the denominator is zero.
    #[must_use]
    pub fn from_ratio(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let denominator = IBig::from(denominator);
        let numerator = if DashuSigned::is_negative(&denominator) {
            -IBig::from(numerator)
        } else {
            IBig::from(numerator)
        };
        Some(Self(RBig::from_parts(numerator, denominator.unsigned_abs())))
    }

    /// Returns `10^(-exp)`, the tolerance with `exp` decimal places.
    #[must_use]
    pub fn epsilon(exp: u32) -> Self {
        Self(RBig::from_parts(IBig::ONE, pow10(exp as usize)))
    }

    /// Converts a float exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ParseScalarError::NonFinite`] for NaN and infinities.
    pub fn try_from_f64(value: f64) -> Result<Self, ParseScalarError> {
        RBig::try_from(value)
            .map(Self)
            .map_err(|_| ParseScalarError::NonFinite(value))
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns true if this scalar is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if `|self| < eps`.
    #[must_use]
    pub fn is_near_zero(&self, eps: &Scalar) -> bool {
        self.abs() < *eps
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn checked_recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    /// Divides by `rhs`, or returns `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Scalar) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self(&self.0 / &rhs.0))
        }
    }

    /// Rounds to `places` decimal places, halves away from zero.
    #[must_use]
    pub fn round_to(&self, places: usize) -> Self {
        let scale = pow10(places);
        let magnitude = self.0.numerator().clone().unsigned_abs() * &scale;
        let denominator = self.0.denominator().clone();
        let two = UBig::from(2u8);
        let rounded = (magnitude * &two + &denominator) / (denominator * two);
        let numerator = if self.is_negative() {
            -IBig::from(rounded)
        } else {
            IBig::from(rounded)
        };
        Self(RBig::from_parts(numerator, scale))
    }

    /// Renders as a decimal with at most `places` fractional digits.
    ///
    /// Trailing zeros are dropped, so `2.500` renders as `2.5` and `3.000`
    /// as `3`.
    #[must_use]
    pub fn to_decimal_string(&self, places: usize) -> String {
        let rounded = self.round_to(places);
        let factor = pow10(places) / rounded.0.denominator();
        let scaled = rounded.0.numerator().clone() * IBig::from(factor);
        let negative = DashuSigned::is_negative(&scaled);

        let mut digits = scaled.unsigned_abs().to_string();
        if digits.len() <= places {
            digits = "0".repeat(places + 1 - digits.len()) + &digits;
        }
        let (whole, fraction) = digits.split_at(digits.len() - places);
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::with_capacity(digits.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(whole);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

/// Largest power of ten a parsed literal may be scaled by, counting both the
/// exponent and the fractional digits.
pub const MAX_DECIMAL_SHIFT: usize = 10_000;

fn pow10(exp: usize) -> UBig {
    UBig::from(10u8).pow(exp)
}

impl FromStr for Scalar {
    type Err = ParseScalarError;

    /// Parses decimal text such as `-0.131`, `8` or `1e-10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseScalarError::Empty);
        }

        let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent = text[pos + 1..]
                    .parse::<i64>()
                    .map_err(|_| ParseScalarError::InvalidExponent(text.to_string()))?;
                (&text[..pos], exponent)
            }
            None => (text, 0),
        };

        let (negative, unsigned) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(ParseScalarError::InvalidDigits(text.to_string()));
        }

        let digits = format!("{whole}{fraction}");
        let magnitude = UBig::from_str_radix(&digits, 10)
            .map_err(|_| ParseScalarError::InvalidDigits(text.to_string()))?;

        let shift = i64::try_from(fraction.len())
            .ok()
            .and_then(|len| exponent.checked_sub(len))
            .ok_or_else(|| ParseScalarError::InvalidExponent(text.to_string()))?;
        let shift_len = usize::try_from(shift.unsigned_abs())
            .ok()
            .filter(|&len| len <= MAX_DECIMAL_SHIFT)
            .ok_or_else(|| ParseScalarError::InvalidExponent(text.to_string()))?;

        let (magnitude, denominator) = if shift >= 0 {
            (magnitude * pow10(shift_len), UBig::ONE)
        } else {
            (magnitude, pow10(shift_len))
        };
        let numerator = if negative {
            -IBig::from(magnitude)
        } else {
            IBig::from(magnitude)
        };
        Ok(Self(RBig::from_parts(numerator, denominator)))
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            f.write_str(&self.to_decimal_string(10))
        }
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Self;

    fn add(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 + &rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Self;

    fn sub(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 - &rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Self;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`Scalar::checked_div`] when the
/// divisor is not known to be nonzero.
impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Self;

    fn div(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 / &rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        Scalar(-self.0.clone())
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<RBig> for Scalar {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
