//! Integral range mapping.
//!
//! The range width is computed as an unsigned distance in the type's own
//! width (`max.wrapping_sub(min)` reinterpreted as unsigned), which never
//! overflows even for `[T::MIN, T::MAX)` on signed types. The offset is
//! added back with wrapping arithmetic; since `offset < max - min` the
//! result always lands in `[min, max)`.
//!
//! The word is masked to the full bit width of the type, signed types
//! included, so signed outputs deliberately differ from a `word & T::MAX`
//! mapping, which would drop the sign bit and only reach the lower half of
//! wide ranges.

use super::{private, SampleUniform};
use crate::error::RngError;

macro_rules! impl_integral {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl SampleUniform for $ty {
            #[inline]
            fn validate_range(min: Self, max: Self) -> Result<(), RngError> {
                if min == max {
                    Err(RngError::EmptyRange)
                } else if min > max {
                    Err(RngError::InvertedRange)
                } else {
                    Ok(())
                }
            }

            #[inline]
            fn from_word(word: u64, min: Self, max: Self) -> Result<Self, RngError> {
                Self::validate_range(min, max)?;
                let range = (max as $unsigned).wrapping_sub(min as $unsigned) as u64;
                let masked = word & (<$unsigned>::MAX as u64);
                let offset = (masked % range) as $unsigned;
                Ok((min as $unsigned).wrapping_add(offset) as $ty)
            }
        }
    )*};
}

impl_integral! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_inverted_ranges() {
        assert_eq!(u32::validate_range(5, 5), Err(RngError::EmptyRange));
        assert_eq!(i8::validate_range(3, -3), Err(RngError::InvertedRange));
        assert_eq!(i64::validate_range(i64::MIN, i64::MAX), Ok(()));
    }

    #[test]
    fn test_from_word_rejects_invalid_bounds() {
        assert_eq!(u8::from_word(7, 10, 5), Err(RngError::InvertedRange));
        assert_eq!(u8::from_word(7, 5, 5), Err(RngError::EmptyRange));
        assert_eq!(i64::from_word(u64::MAX, 0, i64::MIN), Err(RngError::InvertedRange));
    }

    #[test]
    fn test_masks_to_type_width() {
        // Only the low 8 bits of the word reach the modulo.
        assert_eq!(u8::from_word(0xffff_ff07, 0, 10).unwrap(), 7);
        assert_eq!(u16::from_word(0xabcd_0000_0000_0003, 0, 100).unwrap(), 3);
    }

    #[test]
    fn test_offset_added_to_min() {
        assert_eq!(u32::from_word(25, 100, 110).unwrap(), 105);
        assert_eq!(i32::from_word(25, -10, 10).unwrap(), 5 - 10);
    }

    #[test]
    fn test_full_signed_range_does_not_overflow() {
        // Range width is 255 for i8::MIN..i8::MAX; word 254 maps to the top.
        assert_eq!(i8::from_word(254, i8::MIN, i8::MAX).unwrap(), 126);
        assert_eq!(i8::from_word(255, i8::MIN, i8::MAX).unwrap(), i8::MIN);
        assert_eq!(i8::from_word(0, i8::MIN, i8::MAX).unwrap(), i8::MIN);

        let top = i64::from_word(u64::MAX - 1, i64::MIN, i64::MAX).unwrap();
        assert_eq!(top, i64::MAX - 1);
    }

    #[test]
    fn test_full_unsigned_range_excludes_max() {
        assert_eq!(u64::from_word(u64::MAX, 0, u64::MAX).unwrap(), 0);
        assert_eq!(u64::from_word(u64::MAX - 1, 0, u64::MAX).unwrap(), u64::MAX - 1);
    }
}
