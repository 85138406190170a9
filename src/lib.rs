//! Word Scorer
//!
//! A heuristic solver for the five-letter word guessing game. Every guess is graded with
//! a points score (3 per exact letter, 1 per misplaced letter) and the solver keeps
//! guessing the word that scores best against the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scorer::core::{Word, grade};
//!
//! let secret = Word::new("dream").unwrap();
//! let guess = Word::new("dread").unwrap();
//!
//! // D, R, E, A in place
//! assert_eq!(grade(&secret, &guess), 12);
//! ```
//!
//! Solving a secret end to end:
//!
//! ```rust
//! use word_scorer::bank::Dictionary;
//! use word_scorer::core::Word;
//! use word_scorer::solver::{SolverConfig, solve};
//!
//! let dictionary = Dictionary::from_tokens(&["react", "dream", "debar", "dread"], &["salet"])?;
//! let summary = solve(&dictionary, Word::new("dream")?, SolverConfig::default());
//! assert!(summary.outcome.is_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core domain types
pub mod core;

// Scored word bank and dictionary
pub mod bank;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
