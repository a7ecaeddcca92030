//! Main game session interface

use crate::core::{Alert, RoundError, RoundState, ValidationOutcome};
use crate::validator::{RealWordChecker, WordValidator};
use crate::wordlists::WordListSource;
use log::{debug, info};
use rand::Rng;

/// Load the word list and start a new round from it
///
/// # Errors
///
/// Returns `RoundError::ResourceUnavailable` if the word list cannot be loaded.
/// A list that loads but has no usable entries starts a round with the
/// fallback root word instead.
pub fn start_round<S, R>(source: &S, rng: &mut R) -> Result<RoundState, RoundError>
where
    S: WordListSource + ?Sized,
    R: Rng + ?Sized,
{
    let words = source.load_word_list()?;
    Ok(RoundState::start(&words, rng))
}

/// Main game session
///
/// Holds the round in progress and everything needed to judge submissions and
/// start new rounds. Front-ends drive the game exclusively through `submit` and
/// `restart`.
pub struct Game<C, S, R> {
    validator: WordValidator,
    dictionary: C,
    source: S,
    rng: R,
    round: RoundState,
    last_alert: Option<Alert>,
    rounds_played: usize,
}

impl<C, S, R> Game<C, S, R>
where
    C: RealWordChecker,
    S: WordListSource,
    R: Rng,
{
    /// Create a session and start its first round
    ///
    /// # Errors
    ///
    /// Returns `RoundError::ResourceUnavailable` if the word list cannot be loaded.
    pub fn new(
        validator: WordValidator,
        dictionary: C,
        source: S,
        mut rng: R,
    ) -> Result<Self, RoundError> {
        let round = start_round(&source, &mut rng)?;

        Ok(Self {
            validator,
            dictionary,
            source,
            rng,
            round,
            last_alert: None,
            rounds_played: 1,
        })
    }

    /// Judge a raw submission and record it if accepted
    ///
    /// Accepted words are committed to the round in one step. Rejections with a
    /// user-facing message are kept as the current alert until dismissed or
    /// replaced; silent rejections leave the alert alone.
    pub fn submit(&mut self, raw: &str) -> ValidationOutcome {
        let outcome = self.validator.validate(raw, &self.round, &self.dictionary);

        match &outcome {
            ValidationOutcome::Accepted(word) => {
                self.round = self.round.record(word.as_str());
                self.last_alert = None;
                debug!(
                    "Accepted '{word}' ({} words, {} letters)",
                    self.round.word_count(),
                    self.round.letter_total()
                );
            }
            ValidationOutcome::Rejected(rejection) => {
                if let Some(alert) = rejection.alert() {
                    self.last_alert = Some(alert);
                }
            }
        }

        outcome
    }

    /// Throw the current round away and start a new one
    ///
    /// # Errors
    ///
    /// Returns `RoundError::ResourceUnavailable` if the word list cannot be
    /// reloaded; the current round is kept in that case.
    pub fn restart(&mut self) -> Result<&RoundState, RoundError> {
        let round = start_round(&self.source, &mut self.rng)?;
        info!(
            "Round {} ended with {} words / {} letters",
            self.rounds_played,
            self.round.word_count(),
            self.round.letter_total()
        );

        self.round = round;
        self.last_alert = None;
        self.rounds_played += 1;
        Ok(&self.round)
    }

    /// Snapshot of the round in progress
    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Most recent user-facing rejection, if not yet dismissed
    #[inline]
    #[must_use]
    pub const fn last_alert(&self) -> Option<&Alert> {
        self.last_alert.as_ref()
    }

    /// Clear the current alert once the player has seen it
    pub fn dismiss_alert(&mut self) {
        self.last_alert = None;
    }

    /// Rounds started in this session, the current one included
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Checker consulted for the realness step
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &C {
        &self.dictionary
    }

    /// Pipeline judging submissions
    #[inline]
    #[must_use]
    pub const fn validator(&self) -> &WordValidator {
        &self.validator
    }

    /// Where new root words come from, for display
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FALLBACK_ROOT_WORD, Rejection};
    use crate::validator::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Word list that always yields the given words
    struct FixedList(Vec<&'static str>);

    impl WordListSource for FixedList {
        fn load_word_list(&self) -> Result<Vec<String>, RoundError> {
            Ok(self.0.iter().map(ToString::to_string).collect())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    /// Word list that can never be loaded
    struct MissingList;

    impl WordListSource for MissingList {
        fn load_word_list(&self) -> Result<Vec<String>, RoundError> {
            Err(RoundError::ResourceUnavailable {
                resource: "start.txt".to_string(),
                reason: "not bundled".to_string(),
            })
        }

        fn describe(&self) -> String {
            "missing".to_string()
        }
    }

    fn silkworm_game() -> Game<Dictionary, FixedList, StdRng> {
        let dictionary = Dictionary::from_words("en", ["silk", "worm", "milk", "work", "skim"]);
        Game::new(
            WordValidator::default(),
            dictionary,
            FixedList(vec!["silkworm"]),
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    #[test]
    fn new_game_starts_a_round() {
        let game = silkworm_game();
        assert_eq!(game.round().root_word(), "silkworm");
        assert!(game.round().is_fresh());
        assert_eq!(game.rounds_played(), 1);
        assert!(game.last_alert().is_none());
    }

    #[test]
    fn source_description_names_the_word_list() {
        assert_eq!(silkworm_game().source_description(), "fixed");
    }

    #[test]
    fn new_game_with_missing_list_fails() {
        let result = Game::new(
            WordValidator::default(),
            Dictionary::embedded(),
            MissingList,
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(RoundError::ResourceUnavailable { .. })));
    }

    #[test]
    fn new_game_with_empty_list_uses_fallback() {
        let game = Game::new(
            WordValidator::default(),
            Dictionary::embedded(),
            FixedList(vec![]),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(game.round().root_word(), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn accepted_words_are_recorded() {
        let mut game = silkworm_game();

        assert_eq!(
            game.submit("Silk\n"),
            ValidationOutcome::Accepted("silk".to_string())
        );
        assert_eq!(
            game.submit("worm"),
            ValidationOutcome::Accepted("worm".to_string())
        );

        assert_eq!(game.round().used_words(), &["worm", "silk"]);
        assert_eq!(game.round().word_count(), 2);
        assert_eq!(game.round().letter_total(), 8);
    }

    #[test]
    fn rejected_words_are_not_recorded() {
        let mut game = silkworm_game();
        game.submit("silk");

        let before = game.round().clone();
        game.submit("silk");
        game.submit("zzzz");
        game.submit("wors");
        game.submit("at");
        game.submit("silkworm");

        assert_eq!(game.round(), &before);
    }

    #[test]
    fn loud_rejection_sets_alert() {
        let mut game = silkworm_game();
        game.submit("zzzz");

        let alert = game.last_alert().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You can't spell that word from 'silkworm'!");

        game.dismiss_alert();
        assert!(game.last_alert().is_none());
    }

    #[test]
    fn silent_rejection_keeps_existing_alert() {
        let mut game = silkworm_game();
        game.submit("wors");
        let outcome = game.submit("at");

        assert_eq!(outcome, ValidationOutcome::Rejected(Rejection::TooShort));
        assert_eq!(game.last_alert().unwrap().title, "Word not recognized");
    }

    #[test]
    fn acceptance_clears_alert() {
        let mut game = silkworm_game();
        game.submit("wors");
        game.submit("milk");
        assert!(game.last_alert().is_none());
    }

    #[test]
    fn restart_resets_round() {
        let mut game = silkworm_game();
        game.submit("silk");
        game.submit("wors");

        let round = game.restart().unwrap();
        assert!(round.is_fresh());
        assert_eq!(round.letter_total(), 0);
        assert!(game.last_alert().is_none());
        assert_eq!(game.rounds_played(), 2);
    }

    #[test]
    fn start_round_propagates_missing_resource() {
        let result = start_round(&MissingList, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(RoundError::ResourceUnavailable { .. })));
    }
}
