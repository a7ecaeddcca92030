//! Per-round game state
//!
//! A `RoundState` is created when a round starts and replaced wholesale when the
//! next one begins. The only way to change it is `record`, which produces a new
//! state with the accepted word and recomputed counters.

use super::word::{letter_count, normalize};
use log::{info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Root word used when the word list has no usable entries
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Error type for starting a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The word-list resource could not be loaded
    ResourceUnavailable { resource: String, reason: String },
    /// A round was requested with a blank root word
    EmptyRootWord,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable { resource, reason } => {
                write!(f, "Could not load word list '{resource}': {reason}")
            }
            Self::EmptyRootWord => write!(f, "Root word must not be empty"),
        }
    }
}

impl std::error::Error for RoundError {}

/// State of the round in progress
///
/// `word_count` and `letter_total` are caches of values derivable from
/// `used_words`; they are only ever updated together with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    word_count: usize,
    letter_total: usize,
}

impl RoundState {
    /// Create a fresh round for a specific root word
    ///
    /// The root word is normalized the same way submissions are.
    ///
    /// # Errors
    /// Returns `RoundError::EmptyRootWord` if the root word is blank.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RoundState;
    ///
    /// let round = RoundState::new(" SilkWorm ").unwrap();
    /// assert_eq!(round.root_word(), "silkworm");
    /// assert_eq!(round.word_count(), 0);
    ///
    /// assert!(RoundState::new("   ").is_err());
    /// ```
    pub fn new(root_word: &str) -> Result<Self, RoundError> {
        let root_word = normalize(root_word);
        if root_word.is_empty() {
            return Err(RoundError::EmptyRootWord);
        }

        Ok(Self::fresh(root_word))
    }

    fn fresh(root_word: String) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            word_count: 0,
            letter_total: 0,
        }
    }

    /// Start a round with a root word picked uniformly at random from `word_list`
    ///
    /// Blank entries are skipped. If no usable entry remains, the round starts
    /// with `FALLBACK_ROOT_WORD`.
    pub fn start<S, R>(word_list: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let usable: Vec<String> = word_list
            .iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|entry| !entry.is_empty())
            .collect();

        let root_word = if let Some(word) = usable.choose(rng) {
            word.clone()
        } else {
            warn!("Word list has no usable entries, falling back to '{FALLBACK_ROOT_WORD}'");
            FALLBACK_ROOT_WORD.to_string()
        };

        info!(
            "Round started with root word '{root_word}' ({} candidates)",
            usable.len()
        );
        Self::fresh(root_word)
    }

    /// Return a new state with `word` admitted
    ///
    /// The word becomes the most recent entry and both counters move with it.
    /// No legality check happens here; only record words the validator accepted.
    #[must_use]
    pub fn record(&self, word: impl Into<String>) -> Self {
        let word = word.into();
        let letters = letter_count(&word);

        let mut used_words = Vec::with_capacity(self.used_words.len() + 1);
        used_words.push(word);
        used_words.extend(self.used_words.iter().cloned());

        Self {
            root_word: self.root_word.clone(),
            used_words,
            word_count: self.word_count + 1,
            letter_total: self.letter_total + letters,
        }
    }

    /// The word all submissions draw their letters from
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Total letters across accepted words
    #[inline]
    #[must_use]
    pub const fn letter_total(&self) -> usize {
        self.letter_total
    }

    /// Whether `word` was already accepted this round (exact match)
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// True until the first word is accepted
    #[inline]
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.used_words.is_empty()
    }
}
