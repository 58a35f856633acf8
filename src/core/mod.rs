//! Core domain types for Wordle
//!
//! Words, feedback, the shared vocabulary and the game error taxonomy.
//! Nothing here reads files or prints.

mod error;
mod feedback;
mod vocabulary;
mod word;

pub use error::{GameError, RejectReason};
pub use feedback::{Feedback, LetterFeedback, ScoringMode};
pub use vocabulary::Vocabulary;
pub use word::{WORD_LENGTH, Word, WordError};
