#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// A tolerance used to compare values which went through arithmetic on the same inputs.
pub const FLOAT_TOLERANCE: Float = 1E-9;

/// Compares floating point numbers placing NaN values after any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether two values are equal within [`FLOAT_TOLERANCE`].
#[inline]
pub fn is_close(a: Float, b: Float) -> bool {
    (a - b).abs() <= FLOAT_TOLERANCE
}
