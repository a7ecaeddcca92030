//! Word legality pipeline
//!
//! Judges one submission against the current round. Checks run in a fixed order
//! and stop at the first failure:
//!
//! 1. normalize (lowercase + trim)
//! 2. length / same-as-root (silent)
//! 3. originality
//! 4. composition
//! 5. realness (dictionary lookup, the only expensive step)

use super::checker::{DEFAULT_LOCALE, RealWordChecker};
use crate::core::{
    MIN_WORD_LENGTH, RoundState, Rejection, ValidationOutcome, is_constructible, letter_count,
    normalize,
};
use log::debug;

/// Validates submissions for a given dictionary locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordValidator {
    locale: String,
}

impl WordValidator {
    /// Create a validator that asks the dictionary about `locale`
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// Locale passed to the dictionary
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Judge `raw` against `state`
    ///
    /// Never mutates anything: calling it twice with the same arguments gives the
    /// same outcome. Recording an accepted word is the caller's job.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RoundState, ValidationOutcome};
    /// use word_scramble::validator::WordValidator;
    ///
    /// let round = RoundState::new("sleep").unwrap();
    /// let dictionary = |word: &str, _locale: &str| word == "eel";
    ///
    /// let outcome = WordValidator::default().validate(" EEL\n", &round, &dictionary);
    /// assert_eq!(outcome, ValidationOutcome::Accepted("eel".to_string()));
    /// ```
    pub fn validate<C>(&self, raw: &str, state: &RoundState, dictionary: &C) -> ValidationOutcome
    where
        C: RealWordChecker + ?Sized,
    {
        let candidate = normalize(raw);

        let outcome = match self.first_failure(&candidate, state, dictionary) {
            Some(rejection) => ValidationOutcome::Rejected(rejection),
            None => ValidationOutcome::Accepted(candidate),
        };

        debug!("Validated {raw:?} against '{}': {outcome:?}", state.root_word());
        outcome
    }

    fn first_failure<C>(&self, candidate: &str, state: &RoundState, dictionary: &C) -> Option<Rejection>
    where
        C: RealWordChecker + ?Sized,
    {
        if letter_count(candidate) < MIN_WORD_LENGTH {
            return Some(Rejection::TooShort);
        }

        if candidate == state.root_word() {
            return Some(Rejection::SameAsRoot);
        }

        if state.has_used(candidate) {
            return Some(Rejection::AlreadyUsed);
        }

        if !is_constructible(candidate, state.root_word()) {
            return Some(Rejection::NotConstructible {
                root_word: state.root_word().to_string(),
            });
        }

        if !dictionary.is_real_word(candidate, &self.locale) {
            return Some(Rejection::NotARealWord);
        }

        None
    }
}

impl Default for WordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

/// Validate with the default (English) locale
pub fn validate<C>(raw: &str, state: &RoundState, dictionary: &C) -> ValidationOutcome
where
    C: RealWordChecker + ?Sized,
{
    WordValidator::default().validate(raw, state, dictionary)
}
