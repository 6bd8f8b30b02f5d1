//! Integration with the `rand` ecosystem.
//!
//! [`Xorshift1024`] implements [`RngCore`] and [`SeedableRng`], so any
//! `rand`/`rand_distr` distribution can sample from it. It deliberately
//! does not implement `CryptoRng`.

use rand::{Error, RngCore, SeedableRng};

use super::{Xorshift1024, STATE_WORDS};

/// Byte length of a full seed.
const SEED_BYTES: usize = STATE_WORDS * 8;

/// 128-byte seed for [`SeedableRng`], read as 16 little-endian words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seed1024(pub [u8; SEED_BYTES]);

impl Default for Seed1024 {
    fn default() -> Self {
        Self([0; SEED_BYTES])
    }
}

impl AsRef<[u8]> for Seed1024 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Seed1024 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<[u64; STATE_WORDS]> for Seed1024 {
    fn from(words: [u64; STATE_WORDS]) -> Self {
        let mut bytes = [0; SEED_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(bytes)
    }
}

impl RngCore for Xorshift1024 {
    /// Upper half of the next word; the high bits of xorshift1024* output
    /// are its strongest.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Xorshift1024::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xorshift1024::next_u64(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift1024 {
    type Seed = Seed1024;

    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(seed.0.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        Xorshift1024::new(words)
    }
}
