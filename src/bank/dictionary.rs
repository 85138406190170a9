//! Loaded dictionary
//!
//! Splits the word list into the answer set (words that may be secrets) and the extra
//! guess set (words that may only be guessed), and keeps the canonical zero-scored bank
//! over both. Sessions take snapshots of that bank and never modify the dictionary.

use super::{BankError, WordBank, parse_words};
use crate::core::Word;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Canonical, read-only word lists for one or more solving sessions
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    known: FxHashSet<Word>,
    bank: WordBank,
}

impl Dictionary {
    /// Build a dictionary from validated words
    ///
    /// Duplicates are dropped; a guess word that is also an answer counts as an answer.
    ///
    /// # Errors
    /// Returns `BankError::EmptyDictionary` if there are no answer words.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, BankError> {
        let mut known = FxHashSet::default();
        let answers: Vec<Word> = answers.into_iter().filter(|w| known.insert(*w)).collect();
        if answers.is_empty() {
            return Err(BankError::EmptyDictionary);
        }
        let guesses: Vec<Word> = guesses.into_iter().filter(|w| known.insert(*w)).collect();

        let bank = WordBank::from_words(answers.iter().chain(&guesses).copied())?;
        info!(
            "Loaded dictionary: {} answers, {} extra guesses",
            answers.len(),
            guesses.len()
        );

        Ok(Self {
            answers,
            guesses,
            known,
            bank,
        })
    }

    /// Build a dictionary from raw tokens
    ///
    /// # Errors
    /// - `BankError::InvalidWord` if any token is malformed (indices count answers first,
    ///   then guesses)
    /// - `BankError::EmptyDictionary` if there are no answer tokens
    ///
    /// # Examples
    /// ```
    /// use word_scorer::bank::Dictionary;
    ///
    /// let dictionary = Dictionary::from_tokens(&["react", "dream"], &["salet"]).unwrap();
    /// assert_eq!(dictionary.answers().len(), 2);
    /// assert_eq!(dictionary.bank().len(), 3);
    /// ```
    pub fn from_tokens<S: AsRef<str>>(answers: &[S], guesses: &[S]) -> Result<Self, BankError> {
        let mut words = parse_words(answers.iter().chain(guesses))?;
        let guesses = words.split_off(answers.len());
        Self::new(words, guesses)
    }

    /// Words eligible as secrets
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Extra guess-only words
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Canonical bank over answers and guesses, all scores 0
    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// True if the word is in the loaded lists
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }

    /// Uniformly pick a secret from the answer set
    ///
    /// # Errors
    /// Returns `BankError::EmptyDictionary` if there is nothing to pick from.
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, BankError> {
        self.answers.choose(rng).ok_or(BankError::EmptyDictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_tokens_splits_answers_and_guesses() {
        let dictionary =
            Dictionary::from_tokens(&["react", "dream", "debar"], &["salet", "crane"]).unwrap();
        assert_eq!(dictionary.answers().len(), 3);
        assert_eq!(dictionary.guesses().len(), 2);
        assert_eq!(dictionary.bank().len(), 5);
    }

    #[test]
    fn duplicates_are_dropped() {
        let dictionary =
            Dictionary::from_tokens(&["react", "REACT", "dream"], &["dream", "salet"]).unwrap();
        assert_eq!(dictionary.answers().len(), 2);
        assert_eq!(dictionary.guesses().len(), 1);
        assert_eq!(dictionary.bank().len(), 3);
    }

    #[test]
    fn invalid_guess_token_reports_combined_index() {
        let result = Dictionary::from_tokens(&["react", "dream"], &["salet", "bad"]);
        assert!(matches!(
            result,
            Err(BankError::InvalidWord { index: 3, .. })
        ));
    }

    #[test]
    fn empty_answers_rejected() {
        let result = Dictionary::from_tokens(&[], &["salet"]);
        assert!(matches!(result, Err(BankError::EmptyDictionary)));
    }

    #[test]
    fn contains_checks_both_lists() {
        let dictionary = Dictionary::from_tokens(&["react"], &["salet"]).unwrap();
        assert!(dictionary.contains(&Word::new("react").unwrap()));
        assert!(dictionary.contains(&Word::new("salet").unwrap()));
        assert!(!dictionary.contains(&Word::new("zebra").unwrap()));
    }

    #[test]
    fn random_answer_never_picks_guess_only_word() {
        let dictionary = Dictionary::from_tokens(&["react", "dream"], &["salet"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let secret = dictionary.random_answer(&mut rng).unwrap();
            assert!(dictionary.answers().contains(secret));
        }
    }
}
