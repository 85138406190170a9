//! Candidate answer tracking
//!
//! The candidate set holds the answer words still consistent with every feedback
//! observed so far. It only ever shrinks.

use crate::core::{Word, grade};

/// Answer words not yet ruled out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Start from the full answer set
    #[must_use]
    pub fn full(answers: &[Word]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The remaining candidate, if exactly one is left
    #[must_use]
    pub fn sole(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Keep the candidates that `guess` would grade the same way it grades `secret`
    ///
    /// A candidate equal to the secret always survives.
    ///
    /// # Examples
    /// ```
    /// use word_scorer::core::Word;
    /// use word_scorer::solver::CandidateSet;
    ///
    /// let answers: Vec<Word> = ["react", "dream", "debar", "dread"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let secret = Word::new("dream").unwrap();
    /// let guess = Word::new("dread").unwrap();
    ///
    /// let narrowed = CandidateSet::full(&answers).narrow(&guess, &secret);
    /// assert_eq!(narrowed.words(), &[secret]);
    /// ```
    #[must_use]
    pub fn narrow(self, guess: &Word, secret: &Word) -> Self {
        let observed = grade(secret, guess);
        self.retain_consistent(guess, observed)
    }

    /// Keep the candidates that would have produced `observed` for `guess`
    #[must_use]
    pub fn retain_consistent(mut self, guess: &Word, observed: u8) -> Self {
        self.words
            .retain(|candidate| grade(candidate, guess) == observed);
        self
    }
}
