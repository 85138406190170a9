//! Word Scorer - CLI
//!
//! Heuristic solver for the five-letter word game, scoring 3 points per exact letter and
//! 1 per misplaced letter.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use word_scorer::{
    bank::Dictionary,
    commands::{print_test_all_statistics, run_play, run_test_all, solve_word},
    output::{print_openers, print_session},
    solver::{SolverConfig, best_openers},
    wordlists::{embedded_dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_scorer",
    about = "Points-based solver for the five-letter word guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file (default: embedded list)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Extra guess-only words file (default: embedded list, or none with --answers)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Give up after this many guesses
    #[arg(short, long, global = true, default_value = "6")]
    max_rounds: usize,

    /// Rank guesses by primary score alone
    #[arg(long, global = true)]
    no_letter_bonus: bool,

    /// Seed for random secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play several games, choosing each secret interactively (default)
    Play {
        /// Number of games
        #[arg(short = 'n', long, default_value = "3")]
        games: usize,
    },

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show scores and candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the best first words and their best second words
    Openers,

    /// Test the solver on every answer word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary from the `--answers` / `--guesses` flags
///
/// - no flags: embedded answers and guesses
/// - `--answers` only: that file, with no guess-only words
/// - `--guesses` only: embedded answers with that file as guesses
fn load_dictionary(answers: Option<&PathBuf>, guesses: Option<&PathBuf>) -> Result<Dictionary> {
    let dictionary = match (answers, guesses) {
        (None, None) => embedded_dictionary()?,
        (answers, guesses) => {
            let answer_words = match answers {
                Some(path) => load_from_file(path)?,
                None => embedded_dictionary()?.answers().to_vec(),
            };
            let guess_words = match guesses {
                Some(path) => load_from_file(path)?,
                None => Vec::new(),
            };
            Dictionary::new(answer_words, guess_words)?
        }
    };
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.answers.as_ref(), cli.guesses.as_ref())
        .context("failed to load word lists")?;
    let config = SolverConfig {
        max_rounds: cli.max_rounds,
        letter_bonus: !cli.no_letter_bonus,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { games: 3 });

    match command {
        Commands::Play { games } => run_play_command(&dictionary, config, games, cli.seed),
        Commands::Solve { word, verbose } => run_solve_command(&dictionary, config, &word, verbose),
        Commands::Openers => {
            print_openers(&best_openers(&dictionary));
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(&dictionary, config, limit),
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: SolverConfig,
    games: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut input = io::stdin().lock();
    run_play(dictionary, config, games, &mut input, &mut rng)?;
    Ok(())
}

fn run_solve_command(
    dictionary: &Dictionary,
    config: SolverConfig,
    word: &str,
    verbose: bool,
) -> Result<()> {
    let summary = solve_word(dictionary, word, config)?;
    print_session(&summary, verbose);
    Ok(())
}

fn run_test_all_command(
    dictionary: &Dictionary,
    config: SolverConfig,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible answers ({} guessable words)",
        dictionary.answers().len(),
        dictionary.bank().len()
    );
    println!(
        "Max rounds: {}, letter bonus: {}",
        config.max_rounds,
        if config.letter_bonus { "on" } else { "off" }
    );
    println!();

    let stats = run_test_all(dictionary, config, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_scorer::core::Word;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn embedded_lists_by_default() {
        let dictionary = load_dictionary(None, None).unwrap();
        assert!(dictionary.contains(&Word::new("dream").unwrap()));
        assert!(!dictionary.guesses().is_empty());
    }

    #[test]
    fn empty_guesses_file_keeps_embedded_answers() {
        let path = std::env::temp_dir().join(format!("word_scorer_cli_{}.txt", std::process::id()));
        std::fs::write(&path, "").unwrap();
        let dictionary = load_dictionary(None, Some(&path));
        std::fs::remove_file(&path).unwrap();

        let dictionary = dictionary.unwrap();
        assert!(dictionary.guesses().is_empty());
        assert!(dictionary.contains(&Word::new("dream").unwrap()));
    }
}
