//! Solve every answer word and summarise how the solver did

use crate::bank::Dictionary;
use crate::core::Word;
use crate::output::formatters::create_progress_bar;
use crate::solver::{SessionOutcome, SolverConfig, solve};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: Word,
    pub guesses: Vec<Word>,
    pub outcome: SessionOutcome,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub worst_words: Vec<(Word, usize)>,
    pub failures: Vec<Word>,
    pub first_guess_used: HashMap<Word, usize>,
}

/// Run the solver on every answer word (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if the progress bar template is malformed.
pub fn run_test_all(
    dictionary: &Dictionary,
    config: SolverConfig,
    limit: Option<usize>,
) -> Result<TestAllStatistics> {
    let answers = dictionary.answers();
    let test_words = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(test_words.len());

    for (idx, &secret) in test_words.iter().enumerate() {
        let summary = solve(dictionary, secret, config);
        results.push(WordTestResult {
            word: secret,
            guesses: summary.rounds.iter().map(|r| r.guess).collect(),
            outcome: summary.outcome,
        });

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", average_found(&results)));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(collect_statistics(&results, total_start.elapsed()))
}

fn average_found(results: &[WordTestResult]) -> f64 {
    let (count, total) = results
        .iter()
        .filter_map(|r| match r.outcome {
            SessionOutcome::Found { rounds } => Some(rounds),
            SessionOutcome::RoundLimitReached { .. } => None,
        })
        .fold((0_usize, 0_usize), |(n, sum), rounds| (n + 1, sum + rounds));
    if count > 0 {
        total as f64 / count as f64
    } else {
        0.0
    }
}

/// Summarise individual results
#[must_use]
pub fn collect_statistics(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    let mut first_guess_used: HashMap<Word, usize> = HashMap::new();

    for result in results {
        if let Some(&first) = result.guesses.first() {
            *first_guess_used.entry(first).or_insert(0) += 1;
        }
        match result.outcome {
            SessionOutcome::Found { rounds } => {
                *guess_distribution.entry(rounds).or_insert(0) += 1;
            }
            SessionOutcome::RoundLimitReached { .. } => failures.push(result.word),
        }
    }

    let solved = results.len() - failures.len();
    let max_guesses = guess_distribution.keys().copied().max().unwrap_or(0);

    let mut worst_words: Vec<(Word, usize)> = results
        .iter()
        .filter(|r| r.outcome.is_found())
        .map(|r| (r.word, r.outcome.rounds()))
        .filter(|&(_, rounds)| rounds >= 5)
        .collect();
    worst_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: failures.len(),
        guess_distribution,
        total_time,
        average_guesses: average_found(results),
        max_guesses,
        worst_words,
        failures,
        first_guess_used,
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", "Results".bright_cyan().bold());
    println!("{}", "═".repeat(70));

    println!("\n  Words tested:    {}", stats.total_words);
    println!(
        "  Found:           {} ({})",
        stats.solved,
        format!("{:.1}%", percent(stats.solved, stats.total_words)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Gave up:         {} ({})",
            stats.failed,
            format!("{:.1}%", percent(stats.failed, stats.total_words)).red()
        );
    }
    println!(
        "  Mean guesses:    {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Elapsed:         {:.2}s", stats.total_time.as_secs_f64());

    if stats.solved > 0 {
        println!("\n  {}", "Guesses needed".bright_cyan());
        let peak = stats.guess_distribution.values().copied().max().unwrap_or(0);
        for rounds in 1..=stats.max_guesses {
            let count = stats.guess_distribution.get(&rounds).copied().unwrap_or(0);
            println!(
                "  {rounds:3} {} {count:4} ({:5.1}%)",
                create_progress_bar(count as f64, peak as f64, 40).green(),
                percent(count, stats.solved)
            );
        }
    }

    let mut openers: Vec<(Word, usize)> = stats
        .first_guess_used
        .iter()
        .map(|(&word, &count)| (word, count))
        .collect();
    openers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (word, count) in openers.iter().take(3) {
        println!(
            "  Opened with {}: {count} times",
            word.as_str().to_uppercase().bright_yellow()
        );
    }

    if !stats.worst_words.is_empty() {
        let words: Vec<String> = stats
            .worst_words
            .iter()
            .map(|(word, rounds)| format!("{} ({rounds})", word.as_str().to_uppercase()))
            .collect();
        println!("\n  {} {}", "Slowest:".yellow().bold(), words.join(", "));
    }

    if !stats.failures.is_empty() {
        let words: Vec<String> = stats
            .failures
            .iter()
            .map(|w| w.as_str().to_uppercase())
            .collect();
        println!("\n  {} {}", "Not found:".red().bold(), words.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &["salet"]).unwrap()
    }

    #[test]
    fn every_small_answer_is_found() {
        let stats = run_test_all(&dictionary(), SolverConfig::default(), None).unwrap();

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 4);
        // dread is always the opener
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.get(&Word::new("dread").unwrap()), Some(&4));
    }

    #[test]
    fn limit_restricts_words() {
        let stats = run_test_all(&dictionary(), SolverConfig::default(), Some(2)).unwrap();
        assert_eq!(stats.total_words, 2);
    }

    #[test]
    fn limit_past_end_is_clamped() {
        let stats = run_test_all(&dictionary(), SolverConfig::default(), Some(99)).unwrap();
        assert_eq!(stats.total_words, 4);
    }

    #[test]
    fn failures_are_collected() {
        let dictionary = Dictionary::from_tokens(&["zaaaa", "ayaaa"], &["aaaaa"]).unwrap();
        // AAAAA cannot tell the two answers apart, and one round allows nothing else
        let stats = run_test_all(&dictionary, SolverConfig::new(1), None).unwrap();

        assert_eq!(stats.solved, 0);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.first_guess_used.get(&Word::new("aaaaa").unwrap()), Some(&2));
        assert_eq!(stats.average_guesses, 0.0);
        assert_eq!(stats.max_guesses, 0);
    }

    #[test]
    fn statistics_from_results() {
        let w = |s: &str| Word::new(s).unwrap();
        let results = vec![
            WordTestResult {
                word: w("dream"),
                guesses: vec![w("dread"), w("dream")],
                outcome: SessionOutcome::Found { rounds: 2 },
            },
            WordTestResult {
                word: w("react"),
                guesses: vec![w("salet"), w("dread"), w("debar"), w("dream"), w("react")],
                outcome: SessionOutcome::Found { rounds: 5 },
            },
            WordTestResult {
                word: w("zebra"),
                guesses: vec![w("dread"), w("salet")],
                outcome: SessionOutcome::RoundLimitReached { rounds: 2 },
            },
        ];

        let stats = collect_statistics(&results, Duration::ZERO);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failures, vec![w("zebra")]);
        assert!((stats.average_guesses - 3.5).abs() < f64::EPSILON);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.worst_words, vec![(w("react"), 5)]);
        assert_eq!(stats.first_guess_used.get(&w("dread")), Some(&2));
        assert_eq!(stats.first_guess_used.get(&w("salet")), Some(&1));
    }
}
