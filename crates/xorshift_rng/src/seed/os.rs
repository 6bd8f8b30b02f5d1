//! Operating-system entropy via `rand::rngs::OsRng`.

use rand::rngs::OsRng;
use rand::RngCore;

use super::{EntropySource, EntropyWidth};
use crate::error::RngError;

/// Entropy source backed by the operating system's random device.
///
/// Each draw requests exactly `width / 8` bytes from the OS, so a 16-bit
/// source performs four small requests per state word, mirroring a
/// platform whose native entropy primitive is narrower than 64 bits.
///
/// # Examples
///
/// ```rust
/// use xorshift_rng::seed::{EntropySource, EntropyWidth, OsEntropy};
///
/// let mut source = OsEntropy::with_width(EntropyWidth::Bits32);
/// let chunk = source.next_chunk().expect("OS entropy available");
/// assert!(chunk <= u64::from(u32::MAX));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy {
    width: EntropyWidth,
}

impl OsEntropy {
    /// Creates a source drawing at the platform's native width.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source drawing at an explicit width.
    #[inline]
    pub fn with_width(width: EntropyWidth) -> Self {
        Self { width }
    }
}

impl EntropySource for OsEntropy {
    #[inline]
    fn width(&self) -> EntropyWidth {
        self.width
    }

    fn next_chunk(&mut self) -> Result<u64, RngError> {
        let mut bytes = [0u8; 8];
        let len = (self.width.bits() / 8) as usize;
        OsRng
            .try_fill_bytes(&mut bytes[..len])
            .map_err(|e| RngError::Entropy(e.to_string()))?;
        Ok(u64::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_words;

    #[test]
    fn test_chunk_fits_width() {
        let mut narrow = OsEntropy::with_width(EntropyWidth::Bits16);
        for _ in 0..64 {
            assert!(narrow.next_chunk().unwrap() <= u64::from(u16::MAX));
        }
    }

    #[test]
    fn test_seed_words_not_all_zero() {
        for width in [EntropyWidth::Bits16, EntropyWidth::Bits32, EntropyWidth::Bits64] {
            let words = seed_words(&mut OsEntropy::with_width(width)).unwrap();
            assert!(words.iter().any(|&w| w != 0), "width {:?}", width);
        }
    }
}
