//! Floating-point range mapping.
//!
//! A word is turned into a unit value `u` in `[0, 1)` by keeping its top
//! `MANTISSA_DIGITS - 1` bits and multiplying by the type's machine epsilon,
//! so the granularity of `u` is exactly the type's precision. The result is
//! `u * |max - min| + min`.

use num_traits::Float;

use super::{private, SampleUniform};
use crate::error::RngError;

/// Scales a unit value onto the range.
///
/// An ordered range whose width overflows (e.g. `[MIN, MAX)`) falls back to
/// the convex blend of the bounds, which stays finite.
#[inline]
fn scale<F: Float>(unit: F, min: F, max: F) -> F {
    let range = (max - min).abs();
    if range.is_finite() {
        unit * range + min
    } else {
        unit * max + (F::one() - unit) * min
    }
}

#[inline]
fn validate<F: Float>(min: F, max: F) -> Result<(), RngError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RngError::NonFiniteBound);
    }
    // An inverted range spans `[min, min + (min - max))`; its top must exist.
    if min > max && !(min + (min - max)).is_finite() {
        return Err(RngError::RangeOverflow);
    }
    Ok(())
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl SampleUniform for $ty {
            #[inline]
            fn validate_range(min: Self, max: Self) -> Result<(), RngError> {
                validate(min, max)
            }

            #[inline]
            fn from_word(word: u64, min: Self, max: Self) -> Result<Self, RngError> {
                validate(min, max)?;
                const DISCARD: u32 = u64::BITS - (<$ty>::MANTISSA_DIGITS - 1);
                let unit = (word >> DISCARD) as $ty * <$ty>::EPSILON;
                let value = scale(unit, min, max);

                // Rounding in the scale step can land on `max` for very
                // narrow ranges; the upper bound stays exclusive.
                if min < max && value >= max {
                    Ok(max.next_below())
                } else {
                    Ok(value)
                }
            }
        }

        impl NextBelow for $ty {
            #[inline]
            fn next_below(self) -> Self {
                if self > 0.0 {
                    <$ty>::from_bits(self.to_bits() - 1)
                } else if self < 0.0 {
                    <$ty>::from_bits(self.to_bits() + 1)
                } else {
                    -<$ty>::from_bits(1)
                }
            }
        }
    )*};
}

/// Largest representable value strictly below a finite float.
trait NextBelow {
    fn next_below(self) -> Self;
}

impl_float!(f32, f64);
