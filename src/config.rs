//! Game configuration
//!
//! Collects the options that decide where root words and dictionary words come
//! from, which locale the dictionary answers for, and how root words are drawn.

use crate::game::Game;
use crate::validator::{DEFAULT_LOCALE, Dictionary, DictionaryError, WordValidator};
use crate::wordlists::{EmbeddedWordList, FileWordList, WordListSource};
use anyhow::{Context, Result};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Game session as wired up by the binary
pub type ConfiguredGame = Game<Dictionary, Box<dyn WordListSource>, StdRng>;

/// Options for building a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Root-word list file; the embedded list when `None`
    pub wordlist: Option<PathBuf>,
    /// Dictionary file; the embedded dictionary when `None`
    pub dictionary: Option<PathBuf>,
    /// Locale passed to the dictionary
    pub locale: String,
    /// Seed for root-word selection; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: None,
            dictionary: None,
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Where root words are loaded from
    #[must_use]
    pub fn word_list_source(&self) -> Box<dyn WordListSource> {
        match &self.wordlist {
            Some(path) => Box::new(FileWordList::new(path)),
            None => Box::new(EmbeddedWordList),
        }
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` if a dictionary file was given but
    /// cannot be read.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.dictionary {
            Some(path) => Dictionary::from_file(path, &self.locale),
            None => Ok(Dictionary::embedded()),
        }
    }

    /// Random source for root-word selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                debug!("Using seeded RNG ({seed})");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn validator(&self) -> WordValidator {
        WordValidator::new(self.locale.clone())
    }

    /// Build a game session and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary or the root-word list cannot be loaded.
    pub fn build_game(&self) -> Result<ConfiguredGame> {
        let dictionary = self.load_dictionary()?;
        let source = self.word_list_source();
        let description = source.describe();

        Game::new(self.validator(), dictionary, source, self.rng())
            .with_context(|| format!("Could not start a round from {description}"))
    }
}
