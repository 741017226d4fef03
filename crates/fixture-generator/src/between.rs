//! Bounded integer mapping.
//!
//! This is the single place where a uniform double becomes a bounded integer.
//! All string and value generators in the crate draw through [`random_between`].

use crate::error::{GeneratorError, RangeError, Result};
use crate::source::RandomSource;
use tracing::debug;

/// Smallest supported bound.
pub const MIN_SUPPORTED: i64 = 0;

/// Largest supported bound. Below 2^53, so `d * (range + 1)` stays exact.
pub const MAX_SUPPORTED: i64 = 999_999_999_999_999;

/// Draw from `source` and reject values outside `[0, 1)`.
pub(crate) fn draw_unit<S: RandomSource + ?Sized>(source: &S) -> Result<f64> {
    let d = source.next_double();
    // Also rejects NaN.
    if (0.0..1.0).contains(&d) {
        Ok(d)
    } else {
        debug!("Rejected random value {d} outside [0, 1)");
        Err(GeneratorError::InvalidRandomValue(d))
    }
}

/// Validate an inclusive integer range against the supported span.
pub fn check_range(from: i64, to: i64) -> std::result::Result<(), RangeError> {
    if from > to {
        return Err(RangeError::Inverted { from, to });
    }
    if from < MIN_SUPPORTED {
        return Err(RangeError::BelowMinimum { from });
    }
    if to > MAX_SUPPORTED {
        return Err(RangeError::AboveMaximum { to });
    }
    Ok(())
}

/// Draw a uniform integer in `[from, to]`, inclusive on both ends.
///
/// One double is always drawn and validated, even when `from == to`, so the
/// number of draws per call does not depend on the bounds.
///
/// # Errors
///
/// * [`GeneratorError::InvalidRange`] if `from > to`, `from < MIN_SUPPORTED`
///   or `to > MAX_SUPPORTED`.
/// * [`GeneratorError::InvalidRandomValue`] if the source yields a value
///   outside `[0, 1)`.
pub fn random_between<S: RandomSource + ?Sized>(from: i64, to: i64, source: &S) -> Result<i64> {
    check_range(from, to).inspect_err(|e| debug!("Rejected range [{from}, {to}]: {e}"))?;

    let d = draw_unit(source)?;
    if from == to {
        return Ok(from);
    }

    let range = (to - from) as f64;
    let offset = (d * (range + 1.0)).floor() as i64;
    // d * (range + 1) can round up to range + 1 when d is the largest double below 1.
    Ok((from + offset).min(to))
}
