//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod feedback;
mod word;

pub use feedback::{Feedback, Marker, PERFECT_SCORE, Remnant, grade};
pub use word::{WORD_LENGTH, Word, WordError};
