//! Iterator view over the raw word stream.

use std::iter::FusedIterator;

use super::Xorshift1024;

/// Lazy, infinite iterator over the generator's 64-bit output words.
///
/// Borrowing the generator mutably means every word pulled from the
/// iterator advances the generator itself; dropping the iterator leaves
/// the generator positioned after the last word taken.
///
/// # Examples
///
/// ```rust
/// use xorshift_rng::Xorshift1024;
///
/// let mut rng = Xorshift1024::new([1; 16]);
/// let first: Vec<u64> = rng.words().take(4).collect();
/// assert_eq!(first.len(), 4);
/// ```
#[derive(Debug)]
pub struct Words<'a> {
    rng: &'a mut Xorshift1024,
}

impl<'a> Words<'a> {
    #[inline]
    pub(super) fn new(rng: &'a mut Xorshift1024) -> Self {
        Self { rng }
    }
}

impl Iterator for Words<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.rng.next_u64())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Words<'_> {}
