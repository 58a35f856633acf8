//! Word list loading utilities
//!
//! Turns newline-delimited word lists (files or embedded constants) into words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid 5-letter words", .path.display())]
    Empty { path: PathBuf },
}

/// Load words from a newline-delimited file
///
/// Blank lines are ignored; lines that are not valid 5-letter words are skipped
/// with a warning.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty` if
/// it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_autoplay::wordlists::loader::load_from_file;
///
/// let words = load_from_file("valid-wordle-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited text, skipping invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: '{trimmed}': {e}", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_autoplay::wordlists::loader::words_from_slice;
/// use wordle_autoplay::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
