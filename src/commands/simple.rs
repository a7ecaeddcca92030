//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. Reads one submission per line.

use crate::core::ValidationOutcome;
use crate::game::Game;
use crate::output::formatters::{length_badge, score_line};
use crate::validator::RealWordChecker;
use crate::wordlists::WordListSource;
use colored::Colorize;
use log::warn;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Lines starting with ':' are commands: `:restart`, `:words`, `:quit`.
/// End of input ends the game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. A failed
/// `:restart` is reported and the current round continues.
pub fn run_simple<C, S, R, I, O>(
    game: &mut Game<C, S, R>,
    mut input: I,
    mut output: O,
) -> Result<(), String>
where
    C: RealWordChecker,
    S: WordListSource,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let io_err = |e: std::io::Error| e.to_string();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗").map_err(io_err)?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║").map_err(io_err)?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n").map_err(io_err)?;
    writeln!(output, "Make words of 3+ letters from the letters of the root word.").map_err(io_err)?;
    writeln!(output, "Commands: ':restart' for a new word, ':words' to list your words, ':quit' to exit\n").map_err(io_err)?;
    announce_round(game, &mut output).map_err(io_err)?;

    loop {
        write!(output, "{}: ", "Word".bright_cyan()).map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            writeln!(output).map_err(io_err)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":restart" | ":new" => match game.restart().map(|_| ()) {
                Ok(()) => {
                    writeln!(output, "\n🔄 New round started!").map_err(io_err)?;
                    announce_round(game, &mut output).map_err(io_err)?;
                }
                // The current round stays playable
                Err(e) => {
                    warn!("Restart failed: {e}");
                    writeln!(output, "  {} {e}", "✗".red().bold()).map_err(io_err)?;
                }
            },
            ":words" => {
                for word in game.round().used_words() {
                    writeln!(output, "  {} {word}", length_badge(word)).map_err(io_err)?;
                }
                writeln!(output, "  {}", score_line(game.round())).map_err(io_err)?;
            }
            _ => match game.submit(&line) {
                ValidationOutcome::Accepted(word) => {
                    writeln!(
                        output,
                        "  {} {} {}",
                        "✓".green().bold(),
                        length_badge(&word),
                        word.bright_white().bold()
                    )
                    .map_err(io_err)?;
                    writeln!(output, "  {}", score_line(game.round())).map_err(io_err)?;
                }
                ValidationOutcome::Rejected(rejection) => {
                    if let Some(alert) = rejection.alert() {
                        writeln!(
                            output,
                            "  {} {}: {}",
                            "✗".red().bold(),
                            alert.title.red().bold(),
                            alert.message
                        )
                        .map_err(io_err)?;
                        game.dismiss_alert();
                    }
                }
            },
        }
    }

    writeln!(output, "\n👋 Final {}", score_line(game.round())).map_err(io_err)?;
    Ok(())
}

fn announce_round<C, S, R, O>(game: &Game<C, S, R>, output: &mut O) -> std::io::Result<()>
where
    C: RealWordChecker,
    S: WordListSource,
    R: Rng,
    O: Write,
{
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        game.round().root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(
        output,
        "{}",
        format!("Root words from {}", game.source_description()).bright_black()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{Dictionary, WordValidator};
    use crate::wordlists::FileWordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use std::path::PathBuf;

    struct SilkwormOnly;

    impl WordListSource for SilkwormOnly {
        fn load_word_list(&self) -> Result<Vec<String>, crate::core::RoundError> {
            Ok(vec!["silkworm".to_string()])
        }

        fn describe(&self) -> String {
            "silkworm only".to_string()
        }
    }

    fn game() -> Game<Dictionary, SilkwormOnly, StdRng> {
        Game::new(
            WordValidator::default(),
            Dictionary::from_words("en", ["silk", "worm", "milk"]),
            SilkwormOnly,
            StdRng::seed_from_u64(3),
        )
        .unwrap()
    }

    fn play(game: &mut Game<Dictionary, SilkwormOnly, StdRng>, script: &str) -> String {
        let mut output = Vec::new();
        run_simple(game, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_a_scripted_round() {
        let mut game = game();
        let transcript = play(&mut game, "silk\nWorm\nworm\nzzz\nwors\nat\n:quit\n");

        assert_eq!(game.round().used_words(), &["worm", "silk"]);
        assert!(transcript.contains("SILKWORM"));
        assert!(transcript.contains("Word used already"));
        assert!(transcript.contains("You can't spell that word from 'silkworm'!"));
        assert!(transcript.contains("Word not recognized"));
    }

    #[test]
    fn silent_rejections_print_nothing() {
        let mut game = game();
        let transcript = play(&mut game, "at\nsilkworm\n");

        assert!(!transcript.contains('✗'));
        assert!(game.round().is_fresh());
    }

    #[test]
    fn end_of_input_ends_game() {
        let mut game = game();
        let transcript = play(&mut game, "milk");
        assert_eq!(game.round().word_count(), 1);
        assert!(transcript.contains("Final"));
    }

    #[test]
    fn restart_starts_fresh_round() {
        let mut game = game();
        play(&mut game, "silk\n:restart\nworm\n");

        assert_eq!(game.round().used_words(), &["worm"]);
        assert_eq!(game.rounds_played(), 2);
    }

    #[test]
    fn failed_restart_keeps_current_round() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_simple_restart.txt",
            std::process::id()
        ));
        std::fs::write(&path, "silkworm\n").unwrap();

        let mut game = Game::new(
            WordValidator::default(),
            Dictionary::from_words("en", ["silk"]),
            FileWordList::new(PathBuf::from(&path)),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut output = Vec::new();
        run_simple(&mut game, Cursor::new(":restart\nsilk\n:quit\n"), &mut output).unwrap();
        let transcript = String::from_utf8(output).unwrap();

        assert!(transcript.contains("Could not load word list"));
        assert_eq!(game.round().root_word(), "silkworm");
        assert_eq!(game.round().used_words(), &["silk"]);
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn announces_word_list_source() {
        let mut game = game();
        let transcript = play(&mut game, ":quit\n");
        assert!(transcript.contains("Root words from silkworm only"));
    }
}
