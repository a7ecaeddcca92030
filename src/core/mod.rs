//! Core domain types for Word Scramble
//!
//! This module contains the fundamental game types with zero external dependencies
//! beyond hashing and randomness. Everything here is pure and directly testable.

mod letters;
mod outcome;
mod round;
mod word;

pub use letters::{LetterPool, is_constructible};
pub use outcome::{Alert, Rejection, ValidationOutcome};
pub use round::{FALLBACK_ROOT_WORD, RoundError, RoundState};
pub use word::{MIN_WORD_LENGTH, letter_count, normalize};
