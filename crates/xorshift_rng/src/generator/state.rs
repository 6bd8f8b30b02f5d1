//! The 1024-bit state array and the xorshift1024* transition.

/// Number of 64-bit words in the generator state.
pub const STATE_WORDS: usize = 16;

/// Output multiplier of xorshift1024* (odd, applied modulo 2^64).
pub const MULTIPLIER: u64 = 1_181_783_497_276_652_981;

/// Fixed-size generator state: 16 words plus the cursor of the next word
/// to advance.
///
/// The cursor is kept in `[0, 16)` by every method that writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
    words: [u64; STATE_WORDS],
    cursor: usize,
}

impl State {
    /// Creates a state positioned at word 0.
    #[inline]
    pub(crate) fn new(words: [u64; STATE_WORDS]) -> Self {
        Self { words, cursor: 0 }
    }

    /// Creates a state at an arbitrary cursor.
    ///
    /// Returns `None` when `cursor >= 16`.
    #[inline]
    pub(crate) fn with_cursor(words: [u64; STATE_WORDS], cursor: usize) -> Option<Self> {
        (cursor < STATE_WORDS).then_some(Self { words, cursor })
    }

    #[inline]
    pub(crate) fn words(&self) -> &[u64; STATE_WORDS] {
        &self.words
    }

    #[inline]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces all 16 words; the cursor stays where it was.
    #[inline]
    pub(crate) fn replace_words(&mut self, words: [u64; STATE_WORDS]) {
        self.words = words;
    }

    /// Advances the state by one step and returns the output word.
    ///
    /// The cursor moves before mixing: the word under the old cursor is
    /// `s0`, the word under the new cursor is `s1` and is overwritten.
    #[inline]
    pub(crate) fn step(&mut self) -> u64 {
        let mut s0 = self.words[self.cursor];
        self.cursor = (self.cursor + 1) % STATE_WORDS;
        let mut s1 = self.words[self.cursor];

        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        s0 ^= s0 >> 30;

        self.words[self.cursor] = s0 ^ s1;
        self.words[self.cursor].wrapping_mul(MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_advances_cursor_and_wraps() {
        let mut state = State::new([1; STATE_WORDS]);
        for expected in 1..STATE_WORDS {
            state.step();
            assert_eq!(state.cursor(), expected);
        }
        state.step();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_step_writes_only_new_cursor_slot() {
        let mut words = [0u64; STATE_WORDS];
        words[0] = 1 << 40;
        words[1] = 3;
        let mut state = State::new(words);

        let out = state.step();

        // s0 = 2^40 ^ (2^40 >> 30)
        let mut s1: u64 = 3;
        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        let expected_word = ((1u64 << 40) | (1 << 10)) ^ s1;

        assert_eq!(state.words()[0], 1 << 40);
        assert_eq!(state.words()[1], expected_word);
        assert!(state.words()[2..].iter().all(|&w| w == 0));
        assert_eq!(out, expected_word.wrapping_mul(MULTIPLIER));
    }

    #[test]
    fn test_replace_words_keeps_cursor() {
        let mut state = State::new([7; STATE_WORDS]);
        state.step();
        state.step();
        state.replace_words([9; STATE_WORDS]);
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.words(), &[9; STATE_WORDS]);
    }

    #[test]
    fn test_with_cursor_rejects_out_of_range() {
        assert!(State::with_cursor([1; STATE_WORDS], 15).is_some());
        assert!(State::with_cursor([1; STATE_WORDS], STATE_WORDS).is_none());
    }
}
