//! Word lists
//!
//! Provides embedded word lists compiled into the binary, and loading from files.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

use crate::bank::{BankError, Dictionary};

/// Dictionary built from the embedded answer and guess lists
///
/// # Errors
/// Returns `BankError` if the embedded lists are malformed.
pub fn embedded_dictionary() -> Result<Dictionary, BankError> {
    Dictionary::from_tokens(ANSWERS, GUESSES)
}
