//! Word solving command
//!
//! Plays the solver against an evaluator holding a chosen answer.

use crate::core::{GameError, Vocabulary};
use crate::game::{Evaluator, GameConfig};
use crate::solver::{SolveReport, Solver};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use thiserror::Error;

/// How the secret answer is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerChoice {
    /// Use this word
    Given(String),
    /// Draw a vocabulary word at random, reproducibly when seeded
    Random { seed: Option<u64> },
}

/// Errors from setting up or running a solve
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("the vocabulary is empty")]
    EmptyVocabulary,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Resolve the answer to play against
///
/// # Errors
///
/// Returns `SolveError::EmptyVocabulary` when a random answer is requested from
/// an empty vocabulary.
pub fn pick_answer(vocabulary: &Vocabulary, choice: &AnswerChoice) -> Result<String, SolveError> {
    match choice {
        AnswerChoice::Given(word) => Ok(word.clone()),
        AnswerChoice::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            vocabulary
                .words()
                .choose(&mut rng)
                .map(|word| word.text().to_string())
                .ok_or(SolveError::EmptyVocabulary)
        }
    }
}

/// Solve a specific answer with a fresh evaluator and solver
///
/// # Errors
///
/// Returns an error if:
/// - The answer is not a 5-letter vocabulary word (`GameError::InvalidAnswer`)
/// - The vocabulary is empty
pub fn solve_word(
    vocabulary: &Vocabulary,
    answer: &str,
    config: GameConfig,
) -> Result<SolveReport, SolveError> {
    if vocabulary.is_empty() {
        return Err(SolveError::EmptyVocabulary);
    }

    let mut evaluator = Evaluator::with_config(vocabulary.clone(), answer, config)?;
    let mut solver = Solver::for_game(&evaluator);
    let report = solver.run(&mut evaluator)?;

    log::info!(
        "answer {}: {:?} after {} guesses",
        answer.to_uppercase(),
        report.outcome,
        report.guess_count()
    );

    Ok(report)
}
