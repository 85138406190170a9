//! Display functions for command results

use super::formatters::{feedback_to_emoji, guess_line, marker_line, spaced};
use crate::solver::{Opener, SessionOutcome, SessionSummary};
use colored::Colorize;

/// Print the board of a finished session
pub fn print_session(summary: &SessionSummary, verbose: bool) {
    println!("Trying to find secret word:");
    println!("       {}", spaced(&summary.secret).bright_yellow().bold());
    println!();

    for report in &summary.rounds {
        let line = guess_line(report.round, &report.guess, &report.feedback);
        if verbose {
            println!(
                "{line}   {}  score {:2}  candidates {} → {}",
                feedback_to_emoji(&report.feedback),
                report.feedback.score(),
                report.candidates_before,
                report.candidates_after
            );
        } else {
            println!("{line}");
        }
        println!("{}", marker_line(&report.feedback).yellow());
    }

    println!();
    match summary.outcome {
        SessionOutcome::Found { rounds } => {
            println!(
                "{}",
                format!(
                    "Got it in {rounds} {}!",
                    if rounds == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        SessionOutcome::RoundLimitReached { rounds } => {
            println!(
                "{}",
                format!("Solver gave up after {rounds} guesses").red().bold()
            );
        }
    }
}

/// Print the best first words and their best second words
pub fn print_openers(openers: &[Opener]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if openers.is_empty() {
        println!("\n  No words to rank.");
        return;
    }

    for opener in openers {
        println!(
            "\n  {} {}",
            opener.first.word.as_str().to_uppercase().bright_yellow().bold(),
            opener.first.score
        );
        let seconds: Vec<String> = opener
            .seconds
            .iter()
            .map(|s| format!("{} {}", s.word.as_str().to_uppercase(), s.score))
            .collect();
        println!("     then: {}", seconds.join("   "));
    }
}
