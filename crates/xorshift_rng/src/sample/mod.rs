//! Mapping raw 64-bit words onto bounded values of a numeric type.
//!
//! Every sample consumes exactly one word. The mapping depends on the
//! category of the target type:
//!
//! - [`integral`]: the word is masked to the type's bit width and reduced
//!   modulo the range width (biased modulo, negligible when the range is
//!   much smaller than the type).
//! - [`float`]: the word's top `MANTISSA_DIGITS - 1` bits become a uniform
//!   value in `[0, 1)` with exactly the type's precision, then scaled.
//!
//! Both produce values in the half-open interval `[min, max)`.

mod float;
mod integral;

use std::fmt::Debug;

use num_traits::Bounded;

use crate::error::RngError;

mod private {
    pub trait Sealed {}
}

/// Numeric types the generator can sample uniformly.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`,
/// `i64`, `isize`, `f32` and `f64`. The trait is sealed, so asking for any
/// other type is rejected by the compiler:
///
/// ```compile_fail
/// use xorshift_rng::Xorshift1024;
///
/// let mut rng = Xorshift1024::new([1; 16]);
/// let _: bool = rng.get();
/// ```
pub trait SampleUniform: private::Sealed + Bounded + Copy + PartialOrd + Debug {
    /// Checks that `[min, max)` can be sampled.
    ///
    /// # Errors
    ///
    /// - Integral types: [`RngError::EmptyRange`] when `min == max`,
    ///   [`RngError::InvertedRange`] when `min > max`.
    /// - Floating-point types: [`RngError::NonFiniteBound`] for NaN or
    ///   infinite bounds, [`RngError::RangeOverflow`] for an inverted range
    ///   `[min, min + (min - max))` whose upper end is not finite.
    fn validate_range(min: Self, max: Self) -> Result<(), RngError>;

    /// Maps one word onto `[min, max)`.
    ///
    /// The range is checked first, so no bounds can produce a value
    /// outside them.
    ///
    /// # Errors
    ///
    /// Same as [`validate_range`](Self::validate_range).
    fn from_word(word: u64, min: Self, max: Self) -> Result<Self, RngError>;
}
