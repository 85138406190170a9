//! Interactive play mode
//!
//! Runs several independent games in a row. Each game asks for a secret word (or `r` for
//! a random answer), lets the solver find it, and prints the board.

use crate::bank::Dictionary;
use crate::core::Word;
use crate::output::print_session;
use crate::solver::{SessionSummary, SolverConfig, solve};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How the player chose a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretChoice {
    Random,
    Word(Word),
}

/// Interpret one line of player input
///
/// Anything of length 0 or 1 (such as `r`) asks for a random answer.
///
/// # Errors
///
/// Returns an error if the input is not a word in the dictionary.
pub fn parse_secret(input: &str, dictionary: &Dictionary) -> Result<SecretChoice> {
    let input = input.trim();
    if input.chars().count() <= 1 {
        return Ok(SecretChoice::Random);
    }
    let word = Word::new(input)?;
    anyhow::ensure!(
        dictionary.contains(&word),
        "\"{word}\" is not in the loaded word list"
    );
    Ok(SecretChoice::Word(word))
}

/// Play `games` games, reading secrets from `input`
///
/// Stops early if `input` runs out.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or flushing stdout.
pub fn run_play<R: BufRead, G: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: SolverConfig,
    games: usize,
    input: &mut R,
    rng: &mut G,
) -> Result<Vec<SessionSummary>> {
    let mut summaries = Vec::with_capacity(games);

    for _ in 0..games {
        println!("{}", "-".repeat(59));
        println!();
        let Some(secret) = prompt_secret(dictionary, input, rng)? else {
            break;
        };

        let summary = solve(dictionary, secret, config);
        print_session(&summary, false);
        summaries.push(summary);
    }

    println!("Done");
    Ok(summaries)
}

fn prompt_secret<R: BufRead, G: Rng + ?Sized>(
    dictionary: &Dictionary,
    input: &mut R,
    rng: &mut G,
) -> Result<Option<Word>> {
    loop {
        print!("Enter a secret word or just r to choose one at random: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            return Ok(None);
        }

        match parse_secret(&line, dictionary) {
            Ok(SecretChoice::Word(word)) => return Ok(Some(word)),
            Ok(SecretChoice::Random) => return Ok(Some(*dictionary.random_answer(rng)?)),
            Err(e) => println!("{} {e}", "✗".red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &["salet"]).unwrap()
    }

    #[test]
    fn parse_secret_random_shortcuts() {
        let dictionary = dictionary();
        assert_eq!(parse_secret("r\n", &dictionary).unwrap(), SecretChoice::Random);
        assert_eq!(parse_secret("", &dictionary).unwrap(), SecretChoice::Random);
    }

    #[test]
    fn parse_secret_word() {
        let dictionary = dictionary();
        assert_eq!(
            parse_secret("Dream\n", &dictionary).unwrap(),
            SecretChoice::Word(Word::new("dream").unwrap())
        );
    }

    #[test]
    fn parse_secret_rejects_unknown_and_malformed() {
        let dictionary = dictionary();
        assert!(parse_secret("zebra", &dictionary).is_err());
        assert!(parse_secret("dre4m", &dictionary).is_err());
    }

    #[test]
    fn three_games_are_independent() {
        let dictionary = dictionary();
        let mut input = Cursor::new("dream\nr\ndream\n");
        let mut rng = StdRng::seed_from_u64(3);

        let summaries = run_play(&dictionary, SolverConfig::default(), 3, &mut input, &mut rng)
            .unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0], summaries[2]);
        assert!(dictionary.answers().contains(&summaries[1].secret));
        assert!(summaries.iter().all(|s| s.outcome.is_found()));
    }

    #[test]
    fn bad_input_reprompts() {
        let dictionary = dictionary();
        let mut input = Cursor::new("nope!\ndebar\n");
        let mut rng = StdRng::seed_from_u64(3);

        let summaries = run_play(&dictionary, SolverConfig::default(), 1, &mut input, &mut rng)
            .unwrap();
        assert_eq!(summaries[0].secret.as_str(), "debar");
    }

    #[test]
    fn stops_when_input_ends() {
        let dictionary = dictionary();
        let mut input = Cursor::new("dread\n");
        let mut rng = StdRng::seed_from_u64(3);

        let summaries = run_play(&dictionary, SolverConfig::default(), 3, &mut input, &mut rng)
            .unwrap();
        assert_eq!(summaries.len(), 1);
    }
}
