//! Word list loading utilities
//!
//! A `WordListSource` supplies the candidate root words for a new round, either
//! from the embedded list or from a newline-delimited file.

use super::ROOT_WORDS;
use crate::core::{RoundError, normalize};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Somewhere root words can be loaded from
pub trait WordListSource {
    /// Load every candidate root word
    ///
    /// # Errors
    ///
    /// Returns `RoundError::ResourceUnavailable` if the source cannot be read.
    fn load_word_list(&self) -> Result<Vec<String>, RoundError>;

    /// Human-readable name of the source for logs and messages
    fn describe(&self) -> String;
}

impl<S: WordListSource + ?Sized> WordListSource for Box<S> {
    fn load_word_list(&self) -> Result<Vec<String>, RoundError> {
        (**self).load_word_list()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Split newline-delimited text into normalized, non-blank entries
///
/// # Examples
/// ```
/// use word_scramble::wordlists::parse_word_list;
///
/// let words = parse_word_list("Silkworm\r\n\ntreasure\n");
/// assert_eq!(words, vec!["silkworm", "treasure"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Root words compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordList;

impl WordListSource for EmbeddedWordList {
    fn load_word_list(&self) -> Result<Vec<String>, RoundError> {
        Ok(ROOT_WORDS.iter().map(ToString::to_string).collect())
    }

    fn describe(&self) -> String {
        "embedded start.txt".to_string()
    }
}

/// Root words read from a file on every round start
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordListSource for FileWordList {
    fn load_word_list(&self) -> Result<Vec<String>, RoundError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| RoundError::ResourceUnavailable {
                resource: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let words = parse_word_list(&content);
        info!("Loaded {} root words from {}", words.len(), self.path.display());
        Ok(words)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word_scramble_{}_{name}", std::process::id()))
    }

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("\n\nsilkworm\n   \ntreasure\n\n");
        assert_eq!(words, vec!["silkworm", "treasure"]);
    }

    #[test]
    fn parse_trailing_newline_adds_no_entry() {
        assert_eq!(parse_word_list("silkworm\n"), vec!["silkworm"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n \n").is_empty());
    }

    #[test]
    fn embedded_source_loads_all_root_words() {
        let words = EmbeddedWordList.load_word_list().unwrap();
        assert_eq!(words.len(), ROOT_WORDS.len());
    }

    #[test]
    fn file_source_missing_is_resource_unavailable() {
        let source = FileWordList::new("/definitely/not/here/start.txt");
        let result = source.load_word_list();
        assert!(matches!(
            result,
            Err(RoundError::ResourceUnavailable { ref resource, .. })
                if resource == "/definitely/not/here/start.txt"
        ));
    }

    #[test]
    fn file_source_reads_entries() {
        let path = temp_path("loader_start.txt");
        fs::write(&path, "Sunshine\nmidnight\n\n").unwrap();

        let words = FileWordList::new(&path).load_word_list().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["sunshine", "midnight"]);
    }

    #[test]
    fn file_source_empty_file_loads_empty_list() {
        let path = temp_path("loader_empty.txt");
        fs::write(&path, "").unwrap();

        let words = FileWordList::new(&path).load_word_list().unwrap();
        fs::remove_file(&path).unwrap();

        assert!(words.is_empty());
    }
}
