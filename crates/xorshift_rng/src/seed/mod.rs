//! Self-seeding from an external entropy source.
//!
//! An entropy source yields unsigned integers of a fixed platform width
//! (16, 32 or 64 bits). Each 64-bit state word is assembled from as many
//! draws as that width requires, lowest chunk first:
//!
//! | Width | Draws | Layout                                   |
//! |-------|-------|------------------------------------------|
//! | 64    | 1     | `d0`                                     |
//! | 32    | 2     | `d0 & 0xffff_ffff \| d1 << 32`           |
//! | 16    | 4     | `d0 \| d1 << 16 \| d2 << 32 \| d3 << 48` (each masked to 16 bits) |
//!
//! The width is chosen once per source; [`EntropyWidth::NATIVE`] follows the
//! width of the platform's `unsigned int`.

mod os;

pub use os::OsEntropy;

use std::ffi::c_uint;

use crate::error::RngError;
use crate::generator::STATE_WORDS;

/// Bit width of the integers an [`EntropySource`] yields per draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntropyWidth {
    /// 16-bit draws; four per state word.
    Bits16,
    /// 32-bit draws; two per state word.
    Bits32,
    /// 64-bit draws; one per state word.
    Bits64,
}

impl EntropyWidth {
    /// Width of the platform's native `unsigned int`, fixed at build time.
    pub const NATIVE: Self = Self::from_bits(c_uint::BITS);

    /// Selects the assembly recipe for a source of the given bit width.
    ///
    /// Widths of at least 64 use one draw, at least 32 use two, anything
    /// narrower is treated as 16-bit capable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::seed::EntropyWidth;
    ///
    /// assert_eq!(EntropyWidth::from_bits(64), EntropyWidth::Bits64);
    /// assert_eq!(EntropyWidth::from_bits(48), EntropyWidth::Bits32);
    /// assert_eq!(EntropyWidth::from_bits(16), EntropyWidth::Bits16);
    /// ```
    pub const fn from_bits(bits: u32) -> Self {
        if bits >= 64 {
            Self::Bits64
        } else if bits >= 32 {
            Self::Bits32
        } else {
            Self::Bits16
        }
    }

    /// Number of meaningful bits per draw.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Number of draws needed to fill one 64-bit word.
    #[inline]
    pub const fn draws_per_word(self) -> usize {
        (64 / self.bits()) as usize
    }
}

impl Default for EntropyWidth {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// A non-deterministic source of seed material.
///
/// Implementors report their draw width once through [`width`](Self::width);
/// every call to [`next_chunk`](Self::next_chunk) returns one draw in the
/// low bits of a `u64`. Bits above the reported width are ignored by the
/// assembly recipes.
pub trait EntropySource {
    /// Width of each draw.
    fn width(&self) -> EntropyWidth;

    /// Draws one chunk of entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::Entropy`] when the underlying source is
    /// unavailable. Callers propagate the failure rather than falling back
    /// to a fixed seed.
    fn next_chunk(&mut self) -> Result<u64, RngError>;
}

/// Assembles one 64-bit state word from `source`, lowest chunk first.
///
/// # Errors
///
/// Propagates the first failing draw.
pub fn assemble_word<S: EntropySource + ?Sized>(source: &mut S) -> Result<u64, RngError> {
    match source.width() {
        EntropyWidth::Bits64 => source.next_chunk(),
        EntropyWidth::Bits32 => {
            let low = source.next_chunk()? & 0xffff_ffff;
            let high = source.next_chunk()? << 32;
            Ok(low | high)
        }
        EntropyWidth::Bits16 => {
            let mut word = 0u64;
            for shift in [0u32, 16, 32, 48] {
                word |= (source.next_chunk()? & 0xffff) << shift;
            }
            Ok(word)
        }
    }
}

/// Draws a full 16-word seed from `source`.
///
/// # Errors
///
/// Propagates the first failing draw; no partial seed is returned.
pub fn seed_words<S: EntropySource + ?Sized>(
    source: &mut S,
) -> Result<[u64; STATE_WORDS], RngError> {
    let mut words = [0u64; STATE_WORDS];
    for word in words.iter_mut() {
        *word = assemble_word(source)?;
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source yielding 1, 2, 3, ... with every bit above the
    /// width set, so masking mistakes show up in the assembled word.
    struct CountingSource {
        width: EntropyWidth,
        next: u64,
        draws: usize,
    }

    impl CountingSource {
        fn new(width: EntropyWidth) -> Self {
            Self {
                width,
                next: 1,
                draws: 0,
            }
        }
    }

    impl EntropySource for CountingSource {
        fn width(&self) -> EntropyWidth {
            self.width
        }

        fn next_chunk(&mut self) -> Result<u64, RngError> {
            let value = self.next;
            self.next += 1;
            self.draws += 1;
            let noise = match self.width {
                EntropyWidth::Bits64 => 0,
                _ => u64::MAX << self.width.bits(),
            };
            Ok(value | noise)
        }
    }

    struct FailingSource {
        remaining: usize,
    }

    impl EntropySource for FailingSource {
        fn width(&self) -> EntropyWidth {
            EntropyWidth::Bits64
        }

        fn next_chunk(&mut self) -> Result<u64, RngError> {
            if self.remaining == 0 {
                return Err(RngError::Entropy("exhausted".to_string()));
            }
            self.remaining -= 1;
            Ok(42)
        }
    }

    #[test]
    fn test_native_width_matches_c_uint() {
        assert_eq!(EntropyWidth::NATIVE, EntropyWidth::from_bits(c_uint::BITS));
        assert_eq!(EntropyWidth::default(), EntropyWidth::NATIVE);
    }

    #[test]
    fn test_draws_per_word() {
        assert_eq!(EntropyWidth::Bits64.draws_per_word(), 1);
        assert_eq!(EntropyWidth::Bits32.draws_per_word(), 2);
        assert_eq!(EntropyWidth::Bits16.draws_per_word(), 4);
    }

    #[test]
    fn test_assemble_64_bit() {
        let mut source = CountingSource::new(EntropyWidth::Bits64);
        assert_eq!(assemble_word(&mut source).unwrap(), 1);
        assert_eq!(source.draws, 1);
    }

    #[test]
    fn test_assemble_32_bit_low_chunk_first() {
        let mut source = CountingSource::new(EntropyWidth::Bits32);
        let word = assemble_word(&mut source).unwrap();
        // Second draw carries noise above bit 32, which the shift discards.
        assert_eq!(word, 1 | (2 << 32));
        assert_eq!(source.draws, 2);
    }

    #[test]
    fn test_assemble_16_bit_low_chunk_first() {
        let mut source = CountingSource::new(EntropyWidth::Bits16);
        let word = assemble_word(&mut source).unwrap();
        assert_eq!(word, 1 | (2 << 16) | (3 << 32) | (4 << 48));
        assert_eq!(source.draws, 4);
    }

    #[test]
    fn test_seed_words_draw_count() {
        for width in [EntropyWidth::Bits16, EntropyWidth::Bits32, EntropyWidth::Bits64] {
            let mut source = CountingSource::new(width);
            seed_words(&mut source).unwrap();
            assert_eq!(source.draws, STATE_WORDS * width.draws_per_word());
        }
    }

    #[test]
    fn test_seed_words_propagates_failure() {
        let mut source = FailingSource { remaining: 5 };
        let result = seed_words(&mut source);
        assert_eq!(result, Err(RngError::Entropy("exhausted".to_string())));
    }
}
