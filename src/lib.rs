//! Wordle autoplay
//!
//! Scores guesses against a secret answer and solves games by filtering a
//! vocabulary down to the words consistent with all feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autoplay::core::{Vocabulary, Word};
//! use wordle_autoplay::game::Evaluator;
//! use wordle_autoplay::solver::{SolveOutcome, Solver};
//!
//! let vocabulary: Vocabulary = ["glade", "grape", "blaze"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut game = Evaluator::new(vocabulary, "glade").unwrap();
//! let report = Solver::for_game(&game).run(&mut game).unwrap();
//!
//! assert!(matches!(report.outcome, SolveOutcome::Solved { .. }));
//! ```

// Core domain types
pub mod core;

// Answer evaluator
pub mod game;

// Candidate filter and solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
