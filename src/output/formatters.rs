//! Formatting utilities for terminal output
//!
//! Boards are printed the traditional way: the guess spaced out with exact matches
//! upper-cased, and a line of `*` beneath letters that matched elsewhere.

use crate::core::{Feedback, Marker, Word};

/// Left margin that lines the markers up under the guess letters
const BOARD_INDENT: usize = 7;

/// Letters separated by single spaces
#[must_use]
pub fn spaced(word: &Word) -> String {
    let letters: Vec<String> = word.as_str().chars().map(String::from).collect();
    letters.join(" ")
}

/// Numbered guess with exact-match letters upper-cased
#[must_use]
pub fn guess_line(round: usize, guess: &Word, feedback: &Feedback) -> String {
    let letters: Vec<String> = guess
        .as_str()
        .chars()
        .zip(feedback.markers())
        .map(|(letter, marker)| match marker {
            Marker::Exact => letter.to_ascii_uppercase().to_string(),
            Marker::Partial | Marker::Absent => letter.to_string(),
        })
        .collect();
    format!("{round:5}. {}", letters.join(" "))
}

/// `*` under every partial match, aligned with `guess_line`
#[must_use]
pub fn marker_line(feedback: &Feedback) -> String {
    let marks: String = feedback
        .markers()
        .iter()
        .map(|marker| match marker {
            Marker::Partial => "* ",
            Marker::Exact | Marker::Absent => "  ",
        })
        .collect();
    format!("{}{}", " ".repeat(BOARD_INDENT), marks)
        .trim_end()
        .to_string()
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .markers()
        .iter()
        .map(|marker| match marker {
            Marker::Exact => '🟩',
            Marker::Partial => '🟨',
            Marker::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
