//! The xorshift1024* generator and its sampling API.
//!
//! This module provides [`Xorshift1024`], a seeded PRNG with a 1024-bit
//! state, plus [`GeneratorSnapshot`] for checkpointing a sequence and
//! [`Words`] for iterating over raw output.

mod rand_compat;
mod state;
mod words;

pub use rand_compat::Seed1024;
pub use state::{MULTIPLIER, STATE_WORDS};
pub use words::Words;

use tracing::{debug, trace, warn};

use crate::error::RngError;
use crate::sample::SampleUniform;
use crate::seed::{self, EntropySource, OsEntropy};
use state::State;

/// Fast, non-cryptographic pseudo-random number generator (xorshift1024*).
///
/// The generator owns 16 state words and a cursor; every draw rewrites one
/// word and advances the cursor. It has no internal synchronisation: draws
/// take `&mut self`, so one instance per thread (or caller-side locking) is
/// enforced by the borrow checker. Cloning forks the sequence.
///
/// # Examples
///
/// ```rust
/// use xorshift_rng::Xorshift1024;
///
/// let mut rng = Xorshift1024::new([0x9e37_79b9_7f4a_7c15; 16]);
///
/// let die: u8 = rng.get_range(1, 7);
/// assert!((1..7).contains(&die));
///
/// let unit: f64 = rng.get_range(0.0, 1.0);
/// assert!((0.0..1.0).contains(&unit));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift1024 {
    state: State,
}

/// Complete generator state, including the cursor.
///
/// [`Xorshift1024::state`] only exposes the 16 words; a snapshot also records
/// the cursor so a sequence can be resumed at any draw, not only at draws
/// that are a multiple of 16.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorSnapshot {
    /// The 16 state words.
    pub words: [u64; STATE_WORDS],
    /// Index of the next word to advance, in `[0, 16)`.
    pub cursor: usize,
}

impl Xorshift1024 {
    /// Creates a generator from an explicit seed, with the cursor at 0.
    ///
    /// Identical seeds always produce identical sequences. An all-zero seed
    /// is accepted but yields zeros forever; use [`try_new`](Self::try_new)
    /// to reject it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::Xorshift1024;
    ///
    /// let mut a = Xorshift1024::new([7; 16]);
    /// let mut b = Xorshift1024::new([7; 16]);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn new(seed: [u64; STATE_WORDS]) -> Self {
        if is_zero_seed(&seed) {
            warn!("xorshift1024* seeded with all-zero state; output will be constant zero");
        }
        Self {
            state: State::new(seed),
        }
    }

    /// Creates a generator from an explicit seed, rejecting the all-zero seed.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ZeroSeed`] if every word of `seed` is zero.
    pub fn try_new(seed: [u64; STATE_WORDS]) -> Result<Self, RngError> {
        if is_zero_seed(&seed) {
            return Err(RngError::ZeroSeed);
        }
        Ok(Self::new(seed))
    }

    /// Creates a self-seeded generator from operating-system entropy.
    ///
    /// Draws are made at the platform's native width
    /// ([`EntropyWidth::NATIVE`](crate::seed::EntropyWidth::NATIVE)).
    ///
    /// # Errors
    ///
    /// Returns [`RngError::Entropy`] if the OS random device is unavailable.
    pub fn from_os_entropy() -> Result<Self, RngError> {
        Self::from_entropy_source(&mut OsEntropy::new())
    }

    /// Creates a self-seeded generator from an arbitrary entropy source.
    ///
    /// # Errors
    ///
    /// Propagates the first failing draw from `source`.
    pub fn from_entropy_source<S: EntropySource + ?Sized>(
        source: &mut S,
    ) -> Result<Self, RngError> {
        let words = seed::seed_words(source)?;
        debug!(
            width = source.width().bits(),
            draws = STATE_WORDS * source.width().draws_per_word(),
            "self-seeded xorshift1024* state"
        );
        Ok(Self {
            state: State::new(words),
        })
    }

    /// Restores a generator from a snapshot, cursor included.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidCursor`] if `snapshot.cursor >= 16`.
    pub fn from_snapshot(snapshot: GeneratorSnapshot) -> Result<Self, RngError> {
        let state = State::with_cursor(snapshot.words, snapshot.cursor)
            .ok_or(RngError::InvalidCursor(snapshot.cursor))?;
        trace!(cursor = snapshot.cursor, "restored xorshift1024* snapshot");
        Ok(Self { state })
    }

    /// Overwrites all 16 state words.
    ///
    /// The cursor is left where it is: re-seeding mid-sequence continues
    /// from the current word position of the new state. Build a fresh
    /// generator with [`new`](Self::new) to start at word 0.
    pub fn set_seed(&mut self, seed: [u64; STATE_WORDS]) {
        if is_zero_seed(&seed) {
            warn!("xorshift1024* re-seeded with all-zero state; output will be constant zero");
        }
        trace!(cursor = self.state.cursor(), "re-seeded xorshift1024* state");
        self.state.replace_words(seed);
    }

    /// Returns a read-only view of the 16 state words.
    ///
    /// The cursor is not part of this view. Feeding the words back through
    /// [`new`](Self::new) reproduces the continuation exactly when the
    /// cursor is 0 (after a multiple of 16 draws); use
    /// [`snapshot`](Self::snapshot) to checkpoint at any point.
    #[inline]
    pub fn state(&self) -> &[u64; STATE_WORDS] {
        self.state.words()
    }

    /// Index of the next state word to advance.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Captures the full state, cursor included.
    #[inline]
    pub fn snapshot(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            words: *self.state.words(),
            cursor: self.state.cursor(),
        }
    }

    /// Advances the generator and returns the next 64-bit word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state.step()
    }

    /// Returns an infinite iterator over raw output words.
    #[inline]
    pub fn words(&mut self) -> Words<'_> {
        Words::new(self)
    }

    /// Samples `T` over its full range `[T::MIN, T::MAX)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::Xorshift1024;
    ///
    /// let mut rng = Xorshift1024::new([3; 16]);
    /// let byte: u8 = rng.get();
    /// assert!(byte < u8::MAX);
    /// ```
    #[inline]
    pub fn get<T: SampleUniform>(&mut self) -> T {
        self.get_range(T::min_value(), T::max_value())
    }

    /// Samples `T` uniformly from the half-open interval `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics when the range is invalid for `T`: for integral types when
    /// `min >= max`, for floating-point types when a bound is not finite or
    /// an inverted range reaches past the largest finite value.
    /// Use [`try_get_range`](Self::try_get_range) to handle these as errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::Xorshift1024;
    ///
    /// let mut rng = Xorshift1024::new([11; 16]);
    /// assert_eq!(rng.get_range(5.0, 5.0), 5.0);
    /// ```
    #[inline]
    pub fn get_range<T: SampleUniform>(&mut self, min: T, max: T) -> T {
        match self.try_get_range(min, max) {
            Ok(value) => value,
            Err(err) => panic!("get_range({:?}, {:?}): {}", min, max, err),
        }
    }

    /// Samples `T` uniformly from `[min, max)`, reporting invalid ranges.
    ///
    /// No word is drawn when the range is rejected.
    ///
    /// # Errors
    ///
    /// See [`SampleUniform::validate_range`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::{RngError, Xorshift1024};
    ///
    /// let mut rng = Xorshift1024::new([11; 16]);
    /// assert_eq!(rng.try_get_range(5, 5), Err(RngError::EmptyRange));
    /// ```
    #[inline]
    pub fn try_get_range<T: SampleUniform>(&mut self, min: T, max: T) -> Result<T, RngError> {
        T::validate_range(min, max)?;
        T::from_word(self.next_u64(), min, max)
    }

    /// Fills the buffer with samples from `[min, max)`.
    ///
    /// The range is validated once; an empty buffer draws nothing. This is a
    /// zero-allocation operation.
    ///
    /// # Errors
    ///
    /// See [`SampleUniform::validate_range`]. The buffer is untouched on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xorshift_rng::Xorshift1024;
    ///
    /// let mut rng = Xorshift1024::new([5; 16]);
    /// let mut buffer = [0i32; 64];
    /// rng.fill_range(&mut buffer, -3, 3).unwrap();
    /// assert!(buffer.iter().all(|v| (-3..3).contains(v)));
    /// ```
    pub fn fill_range<T: SampleUniform>(
        &mut self,
        buffer: &mut [T],
        min: T,
        max: T,
    ) -> Result<(), RngError> {
        T::validate_range(min, max)?;
        for value in buffer.iter_mut() {
            *value = T::from_word(self.next_u64(), min, max)?;
        }
        Ok(())
    }
}

#[inline]
fn is_zero_seed(seed: &[u64; STATE_WORDS]) -> bool {
    seed.iter().all(|&word| word == 0)
}
