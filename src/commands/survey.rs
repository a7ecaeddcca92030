//! Survey all root words - word list evaluation
//!
//! Solves every root word in the word list and reports how much each one
//! offers, so weak roots can be spotted and pruned.

use super::solve::playable_words;
use crate::core::letter_count;
use crate::validator::{Dictionary, WordValidator};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Playable-word totals for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root_word: String,
    pub words: usize,
    pub max_letters: usize,
}

/// Statistics from surveying the word list
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub average_max_letters: f64,
    /// Playable word length -> occurrences across all roots
    pub length_distribution: FxHashMap<usize, usize>,
    /// Roots offering the most words, best first
    pub richest: Vec<RootSummary>,
    /// Roots offering the fewest words, worst first
    pub poorest: Vec<RootSummary>,
    /// Roots with nothing to play at all
    pub dead_roots: Vec<String>,
    pub total_time: Duration,
}

/// Solve every root word (or the first `limit` of them)
pub fn run_survey(
    root_words: &[String],
    dictionary: &Dictionary,
    validator: &WordValidator,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = root_words
        .iter()
        .take(limit.unwrap_or(root_words.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();
    let mut summaries: Vec<RootSummary> = Vec::with_capacity(roots.len());
    let mut length_distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for root in roots {
        pb.set_message(root.clone());
        // Blank roots never reach here; loaders drop them
        if let Ok(result) = playable_words(root, dictionary, validator) {
            for word in &result.words {
                *length_distribution.entry(letter_count(word)).or_insert(0) += 1;
            }
            summaries.push(RootSummary {
                root_word: result.root_word.clone(),
                words: result.word_count(),
                max_letters: result.max_letters,
            });
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(summaries, length_distribution, total_start.elapsed())
}

fn summarize(
    summaries: Vec<RootSummary>,
    length_distribution: FxHashMap<usize, usize>,
    total_time: Duration,
) -> SurveyStatistics {
    let total_roots = summaries.len();
    let total_words: usize = summaries.iter().map(|s| s.words).sum();
    let total_letters: usize = summaries.iter().map(|s| s.max_letters).sum();

    let (average_words, average_max_letters) = if total_roots > 0 {
        (
            total_words as f64 / total_roots as f64,
            total_letters as f64 / total_roots as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let dead_roots = summaries
        .iter()
        .filter(|s| s.words == 0)
        .map(|s| s.root_word.clone())
        .collect();

    let mut richest = summaries.clone();
    richest.sort_by_key(|s| (Reverse(s.words), s.root_word.clone()));
    richest.truncate(5);

    let mut poorest = summaries;
    poorest.sort_by_key(|s| (s.words, s.root_word.clone()));
    poorest.truncate(5);

    SurveyStatistics {
        total_roots,
        total_words,
        average_words,
        average_max_letters,
        length_distribution,
        richest,
        poorest,
        dead_roots,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Root words surveyed:  {}", stats.total_roots);
    println!("  Playable words:       {}", stats.total_words);
    println!(
        "  Words per root:       {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!(
        "  Letters per root:     {}",
        format!("{:.1}", stats.average_max_letters).bright_yellow()
    );
    println!("  Total time:           {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Word Lengths".bright_cyan().bold());
    let max_count = *stats.length_distribution.values().max().unwrap_or(&1);
    let mut lengths: Vec<usize> = stats.length_distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = stats.length_distribution.get(&length).copied().unwrap_or(0);
        let percentage = count as f64 / stats.total_words.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {length:2} letters: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for summary in &stats.richest {
            println!(
                "  {} {} words, {} letters",
                summary.root_word.to_uppercase().bright_green(),
                summary.words,
                summary.max_letters
            );
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for summary in &stats.poorest {
            println!(
                "  {} {} words, {} letters",
                summary.root_word.to_uppercase().yellow(),
                summary.words,
                summary.max_letters
            );
        }
    }

    if !stats.dead_roots.is_empty() {
        println!("\n❌ {}", "Unplayable Roots".red().bold());
        for root in &stats.dead_roots {
            println!("  {}", root.to_uppercase().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn survey_counts_playable_words() {
        let dictionary = Dictionary::from_words("en", ["silk", "worm", "sun", "shine"]);
        let stats = run_survey(
            &roots(&["silkworm", "sunshine", "zzzzzzzz"]),
            &dictionary,
            &WordValidator::default(),
            None,
        );

        assert_eq!(stats.total_roots, 3);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.dead_roots, vec!["zzzzzzzz".to_string()]);
        assert_eq!(stats.length_distribution.get(&4), Some(&2));
        assert_eq!(stats.length_distribution.get(&3), Some(&1));
        assert_eq!(stats.length_distribution.get(&5), Some(&1));
    }

    #[test]
    fn survey_respects_limit() {
        let dictionary = Dictionary::from_words("en", ["silk"]);
        let stats = run_survey(
            &roots(&["silkworm", "sunshine", "treasure"]),
            &dictionary,
            &WordValidator::default(),
            Some(2),
        );
        assert_eq!(stats.total_roots, 2);
    }

    #[test]
    fn richest_and_poorest_are_ordered() {
        let summaries = vec![
            RootSummary { root_word: "b".into(), words: 3, max_letters: 10 },
            RootSummary { root_word: "a".into(), words: 3, max_letters: 9 },
            RootSummary { root_word: "c".into(), words: 0, max_letters: 0 },
            RootSummary { root_word: "d".into(), words: 7, max_letters: 30 },
        ];
        let stats = summarize(summaries, FxHashMap::default(), Duration::ZERO);

        let richest: Vec<&str> = stats.richest.iter().map(|s| s.root_word.as_str()).collect();
        let poorest: Vec<&str> = stats.poorest.iter().map(|s| s.root_word.as_str()).collect();
        assert_eq!(richest, vec!["d", "a", "b", "c"]);
        assert_eq!(poorest, vec!["c", "a", "b", "d"]);
        assert!((stats.average_words - 13.0 / 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_survey_has_zero_averages() {
        let stats = summarize(Vec::new(), FxHashMap::default(), Duration::ZERO);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.average_words.abs() < f64::EPSILON);
        assert!(stats.richest.is_empty());
    }
}
