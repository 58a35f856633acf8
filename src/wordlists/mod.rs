//! Word lists for Wordle
//!
//! Provides the embedded vocabulary plus loading from user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Vocabulary;
use loader::{LoadError, load_from_file, words_from_slice};

/// Name that selects the embedded word list
pub const BUILTIN: &str = "builtin";

/// The embedded vocabulary
#[must_use]
pub fn builtin_vocabulary() -> Vocabulary {
    words_from_slice(WORDS).into_iter().collect()
}

/// Resolve a word list source: `builtin` or a path to a newline-delimited file
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read or holds no valid words.
pub fn resolve(source: &str) -> Result<Vocabulary, LoadError> {
    if source.eq_ignore_ascii_case(BUILTIN) {
        Ok(builtin_vocabulary())
    } else {
        Ok(load_from_file(source)?.into_iter().collect())
    }
}
