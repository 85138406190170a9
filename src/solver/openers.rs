//! Opening word analysis
//!
//! Ranks every bank word against the full answer set, then for each of the top-scoring
//! first words finds the words that score best once the first word's letters have been
//! struck out of every answer.

use super::scoring::{compute_scores, compute_second_scores};
use crate::bank::{Dictionary, ScoredWord};
use log::debug;

/// A best first word and the best follow-ups for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub first: ScoredWord,
    /// Every word tied for the top second-word score
    pub seconds: Vec<ScoredWord>,
}

/// Find the best first words and, for each of them, the best second words
///
/// Uses the primary score only; no letter bonus is applied.
///
/// # Examples
/// ```
/// use word_scorer::bank::Dictionary;
/// use word_scorer::solver::best_openers;
///
/// let dictionary = Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &[]).unwrap();
/// let openers = best_openers(&dictionary);
///
/// // DREAD and DREAM tie on 38
/// assert_eq!(openers.len(), 2);
/// assert_eq!(openers[0].first.word.as_str(), "dread");
/// assert_eq!(openers[0].seconds[0].word.as_str(), "react");
/// ```
#[must_use]
pub fn best_openers(dictionary: &Dictionary) -> Vec<Opener> {
    let mut bank = dictionary.bank().snapshot();
    compute_scores(&mut bank, dictionary.answers());
    let firsts = bank.top_ties().to_vec();
    debug!("{} first words tied on the top score", firsts.len());

    firsts
        .into_iter()
        .map(|first| {
            compute_second_scores(&mut bank, dictionary.answers(), &first.word);
            let seconds = bank.top_ties().to_vec();
            debug!("{}: {} second words tied", first.word, seconds.len());
            Opener { first, seconds }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(scored: &[ScoredWord]) -> Vec<(&str, i32)> {
        scored.iter().map(|s| (s.word.as_str(), s.score)).collect()
    }

    #[test]
    fn first_words_are_all_top_ties() {
        let dictionary =
            Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &[]).unwrap();
        let openers = best_openers(&dictionary);

        let firsts: Vec<ScoredWord> = openers.iter().map(|o| o.first).collect();
        assert_eq!(describe(&firsts), [("dread", 38), ("dream", 38)]);
    }

    #[test]
    fn second_words_follow_each_first() {
        let dictionary =
            Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &[]).unwrap();
        let openers = best_openers(&dictionary);

        assert_eq!(describe(&openers[0].seconds), [("react", 6)]);
        assert_eq!(describe(&openers[1].seconds), [("react", 6)]);
    }

    #[test]
    fn primary_score_alone_prefers_answers() {
        let dictionary = Dictionary::from_tokens(&["zaaaa", "ayaaa"], &["aaaaa"]).unwrap();
        let openers = best_openers(&dictionary);
        // Both answers score 25 against the pair; AAAAA only 24
        let firsts: Vec<&str> = openers.iter().map(|o| o.first.word.as_str()).collect();
        assert_eq!(firsts, ["ayaaa", "zaaaa"]);
    }

    #[test]
    fn dictionary_bank_is_untouched() {
        let dictionary = Dictionary::from_tokens(&["react", "dream"], &["salet"]).unwrap();
        let _ = best_openers(&dictionary);
        assert!(dictionary.bank().entries().iter().all(|e| e.score == 0));
    }
}
