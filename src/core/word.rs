//! Candidate word normalization
//!
//! Every submission is normalized once, and the normalized form is what gets
//! checked and recorded.

/// Shortest submission that counts as an attempt
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw player input
///
/// Lowercases the input and trims leading/trailing whitespace, newlines included.
/// Normalizing an already-normalized word returns it unchanged.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Worm\n"), "worm");
/// assert_eq!(normalize(&normalize("\tSILK ")), normalize("\tSILK "));
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a word
///
/// Counts characters rather than bytes so non-ASCII letters score one each.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
