//! Scored word bank
//!
//! The bank holds every dictionary word together with its current score. Scores are
//! overwritten each round; the words themselves never change after load.

mod dictionary;

pub use dictionary::Dictionary;

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised while building a bank or dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("invalid dictionary entry #{index}: {source}")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },
    #[error("dictionary contains no words")]
    EmptyDictionary,
}

/// A word paired with its score for the current round
///
/// `Ord` is the ranking order: higher scores first, equal scores in
/// ascending word order. Sorting a slice of these yields the ranked view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredWord {
    pub word: Word,
    pub score: i32,
}

impl ScoredWord {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word, score: 0 }
    }

    /// Negative scores mark a word as excluded from letter tallies and bonuses
    #[inline]
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.score >= 0
    }
}

impl Ord for ScoredWord {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for ScoredWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed set of scored words, kept in ranking order after every rescoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    entries: Vec<ScoredWord>,
}

impl WordBank {
    /// Build a bank from raw tokens
    ///
    /// # Errors
    /// - `BankError::InvalidWord` on the first token that is not 5 ASCII letters;
    ///   nothing is loaded in that case
    /// - `BankError::EmptyDictionary` if no tokens were supplied
    ///
    /// # Examples
    /// ```
    /// use word_scorer::bank::{BankError, WordBank};
    ///
    /// let bank = WordBank::load(["react", "dream"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    ///
    /// assert!(matches!(
    ///     WordBank::load(["react", "oops"]),
    ///     Err(BankError::InvalidWord { index: 1, .. })
    /// ));
    /// ```
    pub fn load<I, S>(tokens: I) -> Result<Self, BankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = parse_words(tokens)?;
        Self::from_words(words)
    }

    /// Build a bank from already validated words
    ///
    /// # Errors
    /// Returns `BankError::EmptyDictionary` if `words` is empty.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, BankError> {
        let mut entries: Vec<ScoredWord> = words.into_iter().map(ScoredWord::new).collect();
        if entries.is_empty() {
            return Err(BankError::EmptyDictionary);
        }
        entries.sort_unstable();
        Ok(Self { entries })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their current order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ScoredWord] {
        &self.entries
    }

    #[inline]
    pub(crate) fn entries_mut(&mut self) -> &mut [ScoredWord] {
        &mut self.entries
    }

    /// Set every score back to 0 and restore ranking order
    pub fn reset_scores(&mut self) {
        for entry in &mut self.entries {
            entry.score = 0;
        }
        self.sort();
    }

    /// Re-sort into ranking order (descending score, ascending word)
    pub fn sort(&mut self) {
        // Total order, so an unstable sort is still deterministic
        self.entries.sort_unstable();
    }

    /// Entries in ranking order
    ///
    /// Every scoring operation re-sorts, so this is the stored order.
    #[inline]
    #[must_use]
    pub fn ranked(&self) -> &[ScoredWord] {
        &self.entries
    }

    /// Deep copy for use as an independent working bank
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Highest ranked entry
    #[must_use]
    pub fn top(&self) -> Option<&ScoredWord> {
        self.entries.first()
    }

    /// Every entry tied with the top score
    #[must_use]
    pub fn top_ties(&self) -> &[ScoredWord] {
        let Some(best) = self.top() else {
            return &[];
        };
        let end = self
            .entries
            .iter()
            .position(|entry| entry.score != best.score)
            .unwrap_or(self.entries.len());
        &self.entries[..end]
    }

    /// Look up the current score of a word
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.word == *word)
            .map(|entry| entry.score)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.word == *word)
    }

    /// Exclude a word from letter tallies and bonuses until the next rescoring
    ///
    /// Returns false if the word is not in the bank.
    pub fn mark_ineligible(&mut self, word: &Word) -> bool {
        match self.entries.iter_mut().find(|entry| entry.word == *word) {
            Some(entry) => {
                entry.score = -1;
                self.sort();
                true
            }
            None => false,
        }
    }

    /// Uniformly pick a word from the bank
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.entries.choose(rng).map(|entry| &entry.word)
    }
}

/// Parse tokens into words, failing on the first invalid one
pub(crate) fn parse_words<I, S>(tokens: I) -> Result<Vec<Word>, BankError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            Word::new(token.as_ref()).map_err(|source| BankError::InvalidWord { index, source })
        })
        .collect()
}
