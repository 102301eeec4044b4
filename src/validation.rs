use std::{error::Error, fmt::Display};

use crate::point::Point2;

/// The error type returned when pre-validating predicate input.
///
/// The predicates themselves treat non-finite coordinates as a fatal
/// precondition violation and panic. Callers working with untrusted input
/// (e.g. user supplied data) can use [validate_point] beforehand to turn
/// that abort into a recoverable error.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum CoordinateError {
    /// A coordinate value was NaN.
    NAN,

    /// A coordinate value was positive or negative infinity.
    Infinite,
}

impl Display for CoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Debug>::fmt(self, f)
    }
}

impl Error for CoordinateError {}

/// Checks if a coordinate value is suitable for the predicates.
///
/// Only finiteness is required: the arithmetic filters escalate to the exact
/// path for magnitudes outside their guard thresholds, so arbitrarily large
/// or small finite values (including subnormals) are valid.
pub fn validate_coordinate(value: f64) -> Result<(), CoordinateError> {
    if value.is_nan() {
        Err(CoordinateError::NAN)
    } else if value.is_infinite() {
        Err(CoordinateError::Infinite)
    } else {
        Ok(())
    }
}

/// Checks if both coordinates of a point are suitable for the predicates.
///
/// See [validate_coordinate] for more information.
pub fn validate_point(point: Point2<f64>) -> Result<(), CoordinateError> {
    validate_coordinate(point.x)?;
    validate_coordinate(point.y)
}
