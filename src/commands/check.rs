//! Word checking command
//!
//! Plays a scripted round: submits words in order against a fixed root word,
//! recording the accepted ones exactly as an interactive round would.

use crate::core::{RoundState, ValidationOutcome};
use crate::validator::{RealWordChecker, WordValidator};

/// Verdict for one submitted word
pub struct CheckedWord {
    pub input: String,
    pub outcome: ValidationOutcome,
}

/// Result of checking a list of words
pub struct CheckResult {
    pub verdicts: Vec<CheckedWord>,
    pub round: RoundState,
}

impl CheckResult {
    /// Number of submissions that were accepted
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| v.outcome.is_accepted())
            .count()
    }
}

/// Submit `words` in order against `root_word`
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn check_words<C, S>(
    root_word: &str,
    words: &[S],
    dictionary: &C,
    validator: &WordValidator,
) -> Result<CheckResult, String>
where
    C: RealWordChecker + ?Sized,
    S: AsRef<str>,
{
    let mut round = RoundState::new(root_word).map_err(|e| format!("Invalid root word: {e}"))?;
    let mut verdicts = Vec::with_capacity(words.len());

    for input in words {
        let input = input.as_ref();
        let outcome = validator.validate(input, &round, dictionary);
        if let ValidationOutcome::Accepted(word) = &outcome {
            round = round.record(word.as_str());
        }
        verdicts.push(CheckedWord {
            input: input.to_string(),
            outcome,
        });
    }

    Ok(CheckResult { verdicts, round })
}
