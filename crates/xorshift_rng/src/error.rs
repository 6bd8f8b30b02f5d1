//! Error types for generator construction and range sampling.

use thiserror::Error;

/// Errors raised by [`Xorshift1024`](crate::Xorshift1024) and its sampling API.
///
/// Type-category violations (sampling a type that is neither integral nor
/// floating-point) never reach this enum; they are rejected at compile time
/// by the sealed [`SampleUniform`](crate::SampleUniform) bound.
///
/// # Examples
///
/// ```
/// use xorshift_rng::RngError;
///
/// let err = RngError::EmptyRange;
/// assert_eq!(err.to_string(), "Empty range: integral sampling requires min < max");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// Integral sampling with `min == max`.
    #[error("Empty range: integral sampling requires min < max")]
    EmptyRange,

    /// Integral sampling with `min > max`.
    #[error("Inverted range: integral sampling requires min < max")]
    InvertedRange,

    /// A floating-point bound is NaN or infinite.
    #[error("Non-finite bound: floating-point sampling requires finite min and max")]
    NonFiniteBound,

    /// Inverted floating-point range whose width does not fit the type.
    #[error("Range overflow: |max - min| is not representable")]
    RangeOverflow,

    /// The entropy source failed while self-seeding.
    #[error("Entropy source failed: {0}")]
    Entropy(String),

    /// An all-zero seed was rejected; xorshift never leaves the zero state.
    #[error("Invalid seed: all 16 state words are zero")]
    ZeroSeed,

    /// Snapshot cursor outside `[0, 16)`.
    #[error("Invalid cursor {0}: must be in range [0, 16)")]
    InvalidCursor(usize),
}
