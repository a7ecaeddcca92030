//! Word Scramble - CLI
//!
//! Make as many words as you can from the letters of a random root word.
//! TUI and line-based modes, plus batch tools for checking, solving and
//! surveying root words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use word_scramble::{
    commands::{check_words, playable_words, print_survey_statistics, run_simple, run_survey},
    config::GameConfig,
    output::{print_check_result, print_solve_result},
    validator::DEFAULT_LOCALE,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word game: build words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root-word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary file, one word per line (default: embedded dictionary)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language tag for the dictionary lookup
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Seed for picking root words, for repeatable rounds
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Submit words in order against a fixed root word
    Check {
        /// The root word to play against
        #[arg(short, long)]
        root: String,

        /// Words to submit
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word playable against a root word
    Solve {
        /// The root word
        root: String,

        /// List all playable words
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Solve every root word in the word list
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            wordlist: self.wordlist.clone(),
            dictionary: self.dictionary.clone(),
            locale: self.locale.clone(),
            seed: self.seed,
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.game_config();
    info!("Starting with {config:?}");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words } => run_check_command(&config, &root, &words),
        Commands::Solve { root, all } => run_solve_command(&config, &root, all),
        Commands::Survey { limit } => run_survey_command(&config, limit),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = config.build_game()?;
    run_tui(App::new(game))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = config.build_game()?;
    let stdin = io::stdin();
    run_simple(&mut game, stdin.lock(), io::stdout()).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String]) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let validator = config.validator();

    let result =
        check_words(root, words, &dictionary, &validator).map_err(|e| anyhow::anyhow!(e))?;
    let perfect =
        playable_words(root, &dictionary, &validator).map_err(|e| anyhow::anyhow!(e))?;

    print_check_result(&result, Some(&perfect));
    Ok(())
}

fn run_solve_command(config: &GameConfig, root: &str, show_all: bool) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let result =
        playable_words(root, &dictionary, &config.validator()).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, show_all);
    Ok(())
}

fn run_survey_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let source = config.word_list_source();
    let roots = source
        .load_word_list()
        .with_context(|| format!("Could not load root words from {}", source.describe()))?;

    println!("\n{}", "═".repeat(70));
    println!(" Word List Survey ");
    println!("{}", "═".repeat(70));
    println!("\nRoot words from {}", source.describe());
    println!("Dictionary: {} words ({})\n", dictionary.len(), dictionary.locale());

    let stats = run_survey(&roots, &dictionary, &config.validator(), limit);
    print_survey_statistics(&stats);
    Ok(())
}
