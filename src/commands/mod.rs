//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::{AssistOutcome, OPENER, Suggestion, run_assist, suggest};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayError, PlayOutcome, run_play};
pub use solve::{AnswerChoice, SolveError, pick_answer, solve_word};
