//! Formatting utilities for terminal output

use crate::core::{RoundState, letter_count};

/// Length marker shown next to each accepted word
///
/// Uses circled digits for 1-20 and falls back to `(n)` beyond that.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let length = letter_count(word);
    match length {
        // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// One-line score summary for a round
#[must_use]
pub fn score_line(round: &RoundState) -> String {
    format!(
        "Number of words: {} | Total of letters: {}",
        round.word_count(),
        round.letter_total()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
