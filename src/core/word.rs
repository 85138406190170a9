//! Five-letter word representation
//!
//! A Word stores exactly five lowercase ASCII letters. Words order lexicographically,
//! which is the tie-break used when ranking equally scored words.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word \"{word}\" must be exactly 5 letters, got {len}")]
    InvalidLength { word: String, len: usize },
    #[error("word \"{word}\" must contain only ASCII letters")]
    InvalidCharacters { word: String },
}

/// A validated 5-letter word
///
/// Stored lowercase regardless of the input case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_scorer::core::Word;
    ///
    /// let word = Word::new("Dream").unwrap();
    /// assert_eq!(word.as_str(), "dream");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("dr3am").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                word: text.to_string(),
                len,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters {
                word: text.to_string(),
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction only admits ASCII letters.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word holds ASCII letters only")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
