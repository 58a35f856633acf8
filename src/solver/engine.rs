//! Automated solve loop

use super::filter::CandidateFilter;
use crate::core::{Feedback, GameError, ScoringMode, Vocabulary, Word};
use crate::game::{Evaluator, Turn};

/// How a solve run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The evaluator accepted `word` as the answer after `guesses` guesses
    Solved { word: Word, guesses: usize },
    /// Every vocabulary word was ruled out; the game is left unfinished
    NoCandidatesLeft,
    /// The game ended without a win
    Exhausted,
}

/// A single guess in a solve run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a solve run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub outcome: SolveOutcome,
    pub steps: Vec<GuessStep>,
}

impl SolveReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved { .. })
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }
}

/// Wordle solver that always plays a consistent candidate
///
/// The next guess is the lexicographically smallest remaining candidate, so a
/// given vocabulary and answer always produce the same run.
#[derive(Debug, Clone)]
pub struct Solver {
    filter: CandidateFilter,
}

impl Solver {
    /// Create a solver for feedback produced under `scoring`
    #[must_use]
    pub const fn new(vocabulary: Vocabulary, scoring: ScoringMode) -> Self {
        Self {
            filter: CandidateFilter::new(vocabulary, scoring),
        }
    }

    /// Create a solver sharing the evaluator's vocabulary and scoring rules
    #[must_use]
    pub fn for_game(evaluator: &Evaluator) -> Self {
        Self::new(evaluator.vocabulary().clone(), evaluator.config().scoring)
    }

    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    /// Record feedback for a guess played outside `run`
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.filter.record(guess, feedback);
    }

    /// Drop the most recently recorded guess
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        self.filter.undo()
    }

    /// Forget every recorded guess
    pub fn reset(&mut self) {
        self.filter.reset();
    }

    /// The guess `run` would play next, or None if no candidates remain
    #[must_use]
    pub fn next_guess(&self) -> Option<&Word> {
        self.filter
            .vocabulary()
            .words()
            .iter()
            .find(|word| self.filter.is_consistent(word))
    }

    /// Play guesses against `evaluator` until it is solved, no candidates
    /// remain, or the game ends
    ///
    /// # Errors
    /// Returns any `GameError` the evaluator raises for a guess, which only
    /// happens when the solver and evaluator disagree on the vocabulary.
    pub fn run(&mut self, evaluator: &mut Evaluator) -> Result<SolveReport, GameError> {
        let mut steps = Vec::new();

        while !evaluator.is_game_over() {
            let candidates = self.filter.candidates();
            let candidates_before = candidates.len();

            let Some(guess) = candidates.first().map(|&word| word.clone()) else {
                log::info!("no possible answers left after {} guesses", steps.len());
                return Ok(SolveReport {
                    outcome: SolveOutcome::NoCandidatesLeft,
                    steps,
                });
            };

            let turn = evaluator.submit(guess.text())?;
            let feedback = turn.feedback();
            self.filter.record(guess.clone(), feedback);

            let candidates_after = self.filter.candidate_count();
            log::debug!(
                "guess {guess}: {feedback} ({candidates_before} -> {candidates_after} candidates)"
            );

            steps.push(GuessStep {
                word: guess.clone(),
                feedback,
                candidates_before,
                candidates_after,
            });

            if let Turn::Won(_) = turn {
                log::info!("solved: {guess} in {} guesses", steps.len());
                return Ok(SolveReport {
                    outcome: SolveOutcome::Solved {
                        word: guess,
                        guesses: steps.len(),
                    },
                    steps,
                });
            }
        }

        log::info!("game over without a solution after {} guesses", steps.len());
        Ok(SolveReport {
            outcome: SolveOutcome::Exhausted,
            steps,
        })
    }
}
