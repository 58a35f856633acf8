//! A single Wordle game
//!
//! The evaluator holds the secret answer and round counter and scores guesses.

mod evaluator;

pub use evaluator::{DEFAULT_ROUND_LIMIT, Evaluator, GameConfig, GameStatus, Turn};
