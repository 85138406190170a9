//! Aggregate scoring of bank words against reference words
//!
//! A word's score is the sum of its grades against every reference word. A high sum
//! means the word shares many letters and positions with the surviving candidates.

use crate::bank::WordBank;
use crate::core::{Feedback, Remnant, Word};
use rayon::prelude::*;

/// Score every bank entry against the reference words, then re-rank the bank
///
/// # Examples
/// ```
/// use word_scorer::bank::WordBank;
/// use word_scorer::core::Word;
/// use word_scorer::solver::compute_scores;
///
/// let words: Vec<Word> = ["react", "dream", "debar", "dread"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut bank = WordBank::from_words(words.clone()).unwrap();
///
/// compute_scores(&mut bank, &words);
/// let top = bank.top().unwrap();
/// assert_eq!(top.word.as_str(), "dread");
/// assert_eq!(top.score, 38);
/// ```
pub fn compute_scores(bank: &mut WordBank, references: &[Word]) {
    let remnants: Vec<Remnant> = references.iter().map(Remnant::from).collect();
    score_against(bank, &remnants);
}

/// Score every bank entry against the references with `first` struck out of each
///
/// Approximates how informative each word would be as a second guess once `first` has
/// already been played. The references themselves are left untouched.
pub fn compute_second_scores(bank: &mut WordBank, references: &[Word], first: &Word) {
    let remnants: Vec<Remnant> = references
        .iter()
        .map(|reference| Remnant::struck(reference, first))
        .collect();
    score_against(bank, &remnants);
}

fn score_against(bank: &mut WordBank, remnants: &[Remnant]) {
    bank.entries_mut().par_iter_mut().for_each(|entry| {
        entry.score = remnants
            .iter()
            .map(|remnant| i32::from(Feedback::against(remnant, &entry.word).score()))
            .sum();
    });
    bank.sort();
}
