//! Letter multiset used for the composition check
//!
//! A `LetterPool` holds the letters of a root word with their multiplicities.
//! Spelling a candidate draws one letter from the pool per character; a letter
//! can never be drawn more often than it appears in the root.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word, counted by multiplicity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut remaining = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }
        Self { counts, remaining }
    }

    /// How many copies of `letter` are still available
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Works on a copy; the pool itself is not consumed.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut pool = self.clone();
        candidate.chars().all(|ch| pool.take(ch))
    }
}

/// Check that `candidate` is a sub-multiset of the letters of `root`
///
/// Fails on the first candidate letter with no remaining match in the root.
///
/// # Examples
/// ```
/// use word_scramble::core::is_constructible;
///
/// assert!(is_constructible("eel", "sleep"));
/// assert!(!is_constructible("sleeps", "sleep"));
/// ```
#[must_use]
pub fn is_constructible(candidate: &str, root: &str) -> bool {
    LetterPool::from_word(root).can_spell(candidate)
}
