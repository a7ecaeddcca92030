//! Word-list backed dictionary
//!
//! The bundled `RealWordChecker`: an in-memory set of known words for a single
//! locale. Words are stored normalized, so lookups are exact matches.

use super::checker::{DEFAULT_LOCALE, RealWordChecker, same_language};
use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    Unavailable { resource: String, reason: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { resource, reason } => {
                write!(f, "Could not load dictionary '{resource}': {reason}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Set of known words for one locale
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: String,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::{Dictionary, RealWordChecker};
    ///
    /// let dictionary = Dictionary::from_words("en", ["Silk", "worm", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_real_word("silk", "en_US"));
    /// assert!(!dictionary.is_real_word("silk", "fr"));
    /// ```
    pub fn from_words<I, S>(locale: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        debug!("Dictionary for '{locale}' built with {} words", words.len());
        Self {
            locale: locale.trim().to_string(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DEFAULT_LOCALE, DICTIONARY)
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, locale: &str) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::Unavailable {
            resource: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let dictionary = Self::from_words(locale, content.lines());
        info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Locale this dictionary answers for
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of known words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact lookup, ignoring locale
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over known words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl RealWordChecker for Dictionary {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        same_language(&self.locale, locale) && self.contains(word)
    }
}
