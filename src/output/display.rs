//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, score_line};
use crate::commands::{CheckResult, SolveResult};
use crate::core::ValidationOutcome;
use colored::Colorize;

/// Print the verdicts of a checked word list
///
/// When `perfect` is given, also shows how much of the best possible round the
/// accepted words cover.
pub fn print_check_result(result: &CheckResult, perfect: Option<&SolveResult>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.round.root_word().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for verdict in &result.verdicts {
        match &verdict.outcome {
            ValidationOutcome::Accepted(word) => {
                println!(
                    "  {} {} {}",
                    "✓".green().bold(),
                    length_badge(word),
                    word.bright_white().bold()
                );
            }
            ValidationOutcome::Rejected(rejection) if rejection.is_silent() => {
                println!(
                    "  {} {:?} {}",
                    "·".bright_black(),
                    verdict.input,
                    format!("ignored ({rejection})").bright_black()
                );
            }
            ValidationOutcome::Rejected(rejection) => {
                let title = rejection.title().unwrap_or_default();
                let message = rejection.message().unwrap_or_default();
                println!(
                    "  {} {:?} {}: {}",
                    "✗".red().bold(),
                    verdict.input,
                    title.red(),
                    message
                );
            }
        }
    }

    println!("\n{}", score_line(&result.round).bright_cyan().bold());

    if let Some(perfect) = perfect {
        let found = result.round.word_count();
        let possible = perfect.word_count();
        println!(
            "Coverage:  [{}] {found}/{possible} words, {}/{} letters",
            create_progress_bar(found as f64, possible as f64, 30).green(),
            result.round.letter_total(),
            perfect.max_letters
        );
    }
}

/// Print every playable word for a root
pub fn print_solve_result(result: &SolveResult, show_all: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PLAYABLE WORDS:".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n❌ {}", "No playable words in the dictionary".red().bold());
        return;
    }

    println!(
        "\n📊 {} words, {} letters in a perfect round",
        result.word_count().to_string().bright_yellow().bold(),
        result.max_letters.to_string().bright_yellow()
    );
    if let Some(longest) = result.longest() {
        println!("   Longest:  {}", longest.to_uppercase().green().bold());
    }

    if show_all {
        println!();
        for word in &result.words {
            println!("  {} {word}", length_badge(word));
        }
    } else {
        let preview: Vec<&str> = result.words.iter().take(12).map(String::as_str).collect();
        println!("   Words:    {}", preview.join(", "));
        if result.words.len() > preview.len() {
            println!(
                "             ...and {} more (use --all to list them)",
                result.words.len() - preview.len()
            );
        }
    }
}
