//! Guess grading
//!
//! A guess is graded against a reference word in two passes:
//! 1. Exact pass: a letter in the same position scores 3 and both slots are consumed
//! 2. Partial pass: each remaining guess letter takes the first unconsumed occurrence
//!    of the same letter in the reference and scores 1
//!
//! Scores therefore range from 0 (nothing in common) to 15 (all five exact).
//! Consumption is what keeps repeated letters from being counted twice.

use super::word::{WORD_LENGTH, Word};

/// Score of a guess that matches the reference exactly
pub const PERFECT_SCORE: u8 = 15;

const EXACT_POINTS: u8 = 3;
const PARTIAL_POINTS: u8 = 1;

/// Per-position outcome of grading a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Same letter in the same position
    Exact,
    /// Letter present elsewhere in the reference
    Partial,
    /// Letter not matched
    Absent,
}

impl Marker {
    /// Points this marker contributes to the score
    #[inline]
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Exact => EXACT_POINTS,
            Self::Partial => PARTIAL_POINTS,
            Self::Absent => 0,
        }
    }
}

/// The letters of a reference word that are still available for matching
///
/// A full word converts into a remnant with nothing consumed. Striking another word out
/// of it consumes exactly the slots that word would have matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Remnant([Option<u8>; WORD_LENGTH]);

impl Remnant {
    /// Strike the letters of `by` out of a copy of `reference`
    ///
    /// # Examples
    /// ```
    /// use word_scorer::core::{Remnant, Word};
    ///
    /// let dream = Word::new("dream").unwrap();
    /// let react = Word::new("react").unwrap();
    ///
    /// // R, E and A are consumed by REACT; D and M remain
    /// let remnant = Remnant::struck(&dream, &react);
    /// assert_eq!(remnant.remaining().count(), 2);
    /// ```
    #[must_use]
    pub fn struck(reference: &Word, by: &Word) -> Self {
        let mut slots = Self::from(reference).0;
        match_letters(&mut slots, by);
        Self(slots)
    }

    /// Letters that are still unconsumed, in position order
    pub fn remaining(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().filter_map(|&slot| slot)
    }
}

impl From<&Word> for Remnant {
    fn from(word: &Word) -> Self {
        Self(word.letters().map(Some))
    }
}

/// Result of grading one guess against one reference word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    markers: [Marker; WORD_LENGTH],
}

impl Feedback {
    /// Grade `guess` against `reference`
    ///
    /// # Examples
    /// ```
    /// use word_scorer::core::{Feedback, Marker, Word};
    ///
    /// let secret = Word::new("dream").unwrap();
    /// let guess = Word::new("dread").unwrap();
    /// let feedback = Feedback::compute(&secret, &guess);
    ///
    /// assert_eq!(feedback.score(), 12);
    /// assert_eq!(feedback.markers()[4], Marker::Absent);
    /// ```
    #[must_use]
    pub fn compute(reference: &Word, guess: &Word) -> Self {
        Self::against(&Remnant::from(reference), guess)
    }

    /// Grade `guess` against the unconsumed letters of a remnant
    ///
    /// Consumed slots match nothing.
    #[must_use]
    pub fn against(reference: &Remnant, guess: &Word) -> Self {
        let mut slots = reference.0;
        Self {
            markers: match_letters(&mut slots, guess),
        }
    }

    /// Total score in the range 0-15
    #[must_use]
    pub fn score(&self) -> u8 {
        self.markers.iter().map(|m| m.points()).sum()
    }

    /// Per-position markers, indexed by guess position
    #[inline]
    #[must_use]
    pub const fn markers(&self) -> &[Marker; WORD_LENGTH] {
        &self.markers
    }

    /// True when every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.markers.iter().all(|&m| m == Marker::Exact)
    }
}

/// Grade `guess` against `reference`, returning only the score
///
/// The caller's words are never modified; matching runs on private copies.
#[inline]
#[must_use]
pub fn grade(reference: &Word, guess: &Word) -> u8 {
    Feedback::compute(reference, guess).score()
}

/// Run both matching passes, consuming matched slots of `reference` in place
fn match_letters(reference: &mut [Option<u8>; WORD_LENGTH], guess: &Word) -> [Marker; WORD_LENGTH] {
    let mut markers = [Marker::Absent; WORD_LENGTH];
    let guess = guess.letters();

    for (i, marker) in markers.iter_mut().enumerate() {
        if reference[i] == Some(guess[i]) {
            *marker = Marker::Exact;
            reference[i] = None;
        }
    }

    for (i, marker) in markers.iter_mut().enumerate() {
        if *marker == Marker::Exact {
            continue;
        }
        if let Some(slot) = reference.iter_mut().find(|slot| **slot == Some(guess[i])) {
            *marker = Marker::Partial;
            *slot = None;
        }
    }

    markers
}
