//! Letter-frequency tie-breaking
//!
//! Counts how often each letter occurs across a word set and rewards words built from
//! the most frequent letters. Layered on top of the primary score, never instead of it.

use crate::bank::{ScoredWord, WordBank};
use crate::core::Word;

const ALPHABET: usize = 26;

/// Number of top-ranked letters that earn a bonus
pub const BONUS_LETTERS: usize = 5;

/// Bonus for the most frequent letter; each lower rank earns one point less
const TOP_BONUS: i32 = 10;

/// Occurrence count of every letter across a set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTally {
    counts: [u32; ALPHABET],
}

impl LetterTally {
    /// Count letters across all positions of all words
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts = [0u32; ALPHABET];
        for word in words {
            for &letter in word.letters() {
                counts[usize::from(letter - b'a')] += 1;
            }
        }
        Self { counts }
    }

    /// Count letters across eligible (non-negative score) entries only
    #[must_use]
    pub fn from_scored(entries: &[ScoredWord]) -> Self {
        Self::from_words(
            entries
                .iter()
                .filter(|entry| entry.is_eligible())
                .map(|entry| &entry.word),
        )
    }

    /// Occurrences of a lowercase letter
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        letter
            .checked_sub(b'a')
            .and_then(|index| self.counts.get(usize::from(index)))
            .copied()
            .unwrap_or(0)
    }

    /// All 26 letters, most frequent first, ties in alphabetical order
    #[must_use]
    pub fn ranked(&self) -> [u8; ALPHABET] {
        let mut letters: [u8; ALPHABET] = std::array::from_fn(|i| b'a' + i as u8);
        letters.sort_by(|&a, &b| self.count(b).cmp(&self.count(a)).then(a.cmp(&b)));
        letters
    }

    /// Positional bonus for a word: `10 - rank` for each letter among the top five
    #[must_use]
    pub fn bonus(&self, word: &Word) -> i32 {
        positional_bonus(&self.ranked()[..BONUS_LETTERS], word)
    }

    /// Add the bonus to every eligible bank entry and re-rank the bank
    pub fn apply_bonus(&self, bank: &mut WordBank) {
        let ranked = self.ranked();
        let top = &ranked[..BONUS_LETTERS];
        for entry in bank.entries_mut() {
            if entry.is_eligible() {
                entry.score += positional_bonus(top, &entry.word);
            }
        }
        bank.sort();
    }
}

fn positional_bonus(top: &[u8], word: &Word) -> i32 {
    word.letters()
        .iter()
        .filter_map(|letter| top.iter().position(|t| t == letter))
        .map(|rank| TOP_BONUS - rank as i32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn counts_every_position() {
        let tally = LetterTally::from_words(&words(&["speed", "erase"]));
        assert_eq!(tally.count(b'e'), 4);
        assert_eq!(tally.count(b's'), 2);
        assert_eq!(tally.count(b'z'), 0);
        assert_eq!(tally.count(b'?'), 0);
    }

    #[test]
    fn ranked_breaks_ties_alphabetically() {
        let tally = LetterTally::from_words(&words(&["react", "dream", "debar", "dread"]));
        // A, D, E and R appear four times each; B, C, M and T once
        assert_eq!(&tally.ranked()[..BONUS_LETTERS], b"aderb");
    }

    #[test]
    fn ranked_fills_with_unused_letters_alphabetically() {
        let tally = LetterTally::from_words(&words(&["zzzzz"]));
        assert_eq!(&tally.ranked()[..BONUS_LETTERS], b"zabcd");
    }

    #[test]
    fn bonus_rewards_top_letters_per_position() {
        let tally = LetterTally::from_words(&words(&["react", "dream", "debar", "dread"]));
        // ranks: a0 d1 e2 r3 b4
        let bonus = |t: &str| tally.bonus(&Word::new(t).unwrap());
        assert_eq!(bonus("dread"), 9 + 7 + 8 + 10 + 9);
        assert_eq!(bonus("react"), 7 + 8 + 10);
        assert_eq!(bonus("aaaaa"), 50);
        assert_eq!(bonus("xyzzy"), 0);
    }

    #[test]
    fn apply_bonus_reranks_bank() {
        let mut bank = WordBank::from_words(words(&["xyzzy", "dread"])).unwrap();
        let tally = LetterTally::from_words(&words(&["dread"]));
        tally.apply_bonus(&mut bank);
        assert_eq!(bank.top().map(|e| e.word.as_str()), Some("dread"));
        assert_eq!(bank.score_of(&Word::new("xyzzy").unwrap()), Some(0));
    }

    #[test]
    fn ineligible_entries_are_skipped() {
        let mut bank = WordBank::from_words(words(&["dread", "react"])).unwrap();
        let react = Word::new("react").unwrap();
        bank.mark_ineligible(&react);

        let tally = LetterTally::from_scored(bank.entries());
        assert_eq!(tally.count(b't'), 0);
        assert_eq!(tally.count(b'd'), 2);

        tally.apply_bonus(&mut bank);
        assert_eq!(bank.score_of(&react), Some(-1));
    }
}
