//! Candidate filtering and the automated solve loop

mod engine;
mod filter;

pub use engine::{GuessStep, SolveOutcome, SolveReport, Solver};
pub use filter::CandidateFilter;
