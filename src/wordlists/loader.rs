//! Word list loading utilities
//!
//! A word list file holds one word per whitespace-separated token. Malformed tokens are
//! rejected rather than skipped.

use crate::bank::{BankError, parse_words};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {}: {source}", path.display())]
    Bank {
        path: PathBuf,
        #[source]
        source: BankError,
    },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Bank` if any token
/// is not a 5-letter word. An empty file loads as an empty list.
///
/// # Examples
/// ```no_run
/// use word_scorer::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_list(&content).map_err(|source| LoadError::Bank {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse whitespace-separated tokens into words
///
/// # Errors
///
/// Returns `BankError::InvalidWord` on the first malformed token.
pub fn parse_list(content: &str) -> Result<Vec<Word>, BankError> {
    parse_words(content.split_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Dictionary;
    use crate::core::WordError;

    #[test]
    fn parse_list_accepts_any_whitespace() {
        let words = parse_list("react dream\n debar\t\ndread\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["react", "dream", "debar", "dread"]);
    }

    #[test]
    fn parse_list_normalizes_case() {
        let words = parse_list("REACT Dream").unwrap();
        assert_eq!(words[0].as_str(), "react");
        assert_eq!(words[1].as_str(), "dream");
    }

    #[test]
    fn parse_list_rejects_malformed_token() {
        let result = parse_list("react dreams debar");
        assert!(matches!(
            result,
            Err(BankError::InvalidWord {
                index: 1,
                source: WordError::InvalidLength { len: 6, .. }
            })
        ));
    }

    #[test]
    fn parse_list_allows_empty() {
        assert_eq!(parse_list("  \n\n"), Ok(Vec::new()));
    }

    #[test]
    fn empty_guess_file_is_a_valid_guess_list() {
        let path =
            std::env::temp_dir().join(format!("word_scorer_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n").unwrap();
        let guesses = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let answers = parse_list("react dream").unwrap();
        let dictionary = Dictionary::new(answers, guesses).unwrap();
        assert_eq!(dictionary.bank().len(), 2);
        assert!(dictionary.guesses().is_empty());
    }

    #[test]
    fn empty_answer_list_is_still_rejected() {
        let guesses = parse_list("salet").unwrap();
        assert_eq!(
            Dictionary::new(Vec::new(), guesses).unwrap_err(),
            BankError::EmptyDictionary
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("word_scorer_{}.txt", std::process::id()));
        fs::write(&path, "react\ndream\n").unwrap();
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_reports_path_on_bad_word() {
        let path =
            std::env::temp_dir().join(format!("word_scorer_bad_{}.txt", std::process::id()));
        fs::write(&path, "react\nd3eam\n").unwrap();
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(LoadError::Bank { .. })));
    }
}
