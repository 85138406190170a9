//! Word solving command
//!
//! Solves a specific secret word and returns the full session record.

use crate::bank::Dictionary;
use crate::core::Word;
use crate::solver::{SessionSummary, SolverConfig, solve};
use anyhow::{Context, Result, bail};

/// Solve `target` with a fresh session
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid 5-letter word
/// - The target is not in the loaded word lists
pub fn solve_word(
    dictionary: &Dictionary,
    target: &str,
    config: SolverConfig,
) -> Result<SessionSummary> {
    let secret = Word::new(target).context("invalid secret word")?;
    if !dictionary.contains(&secret) {
        bail!("\"{secret}\" is not in the loaded word list");
    }
    Ok(solve(dictionary, secret, config))
}
