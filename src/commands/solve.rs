//! Word finding command
//!
//! Lists every dictionary word a root word can produce, i.e. the perfect round.

use crate::core::{RoundState, letter_count};
use crate::validator::{Dictionary, WordValidator};
use rayon::prelude::*;

/// Every playable word for one root
pub struct SolveResult {
    pub root_word: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score of a round that finds every word
    pub max_letters: usize,
}

impl SolveResult {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Longest playable word, if any
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Find every dictionary word the validator would accept on a fresh round
///
/// Candidates are judged in parallel; each one goes through the same pipeline a
/// player submission does.
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn playable_words(
    root_word: &str,
    dictionary: &Dictionary,
    validator: &WordValidator,
) -> Result<SolveResult, String> {
    let round = RoundState::new(root_word).map_err(|e| format!("Invalid root word: {e}"))?;

    let candidates: Vec<&str> = dictionary.words().collect();
    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| validator.validate(word, &round, dictionary).is_accepted())
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    let max_letters = words.iter().map(|w| letter_count(w)).sum();

    Ok(SolveResult {
        root_word: round.root_word().to_string(),
        words,
        max_letters,
    })
}
