//! Word lists for Word Scramble
//!
//! Root words and the default dictionary are embedded in the binary; a custom
//! root-word list can be loaded from disk through a `WordListSource`.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::{EmbeddedWordList, FileWordList, WordListSource, parse_word_list};
