//! Benchmark command
//!
//! Solves every answer in the vocabulary, one independent game per answer,
//! spread across threads.

use super::solve::{SolveError, solve_word};
use crate::core::Vocabulary;
use crate::game::GameConfig;
use crate::solver::SolveOutcome;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Only test the first N answers (in vocabulary order)
    pub limit: Option<usize>,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub no_candidates: usize,
    pub exhausted: usize,
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Guess count -> number of solved answers
    pub distribution: BTreeMap<usize, usize>,
    pub unsolved: Vec<String>,
    pub duration: Duration,
}

/// Run the solver against each answer in the vocabulary
///
/// # Errors
///
/// Returns an error if the vocabulary is empty.
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    config: BenchmarkConfig,
) -> Result<BenchmarkResult, SolveError> {
    if vocabulary.is_empty() {
        return Err(SolveError::EmptyVocabulary);
    }

    let answers = &vocabulary.words()[..config.limit.unwrap_or(usize::MAX).min(vocabulary.len())];

    let pb = if config.show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let reports = answers
        .par_iter()
        .map(|answer| {
            let report = solve_word(vocabulary, answer.text(), config.game);
            pb.inc(1);
            report.map(|report| (answer.text().to_string(), report))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut result = BenchmarkResult {
        total_words: answers.len(),
        solved: 0,
        no_candidates: 0,
        exhausted: 0,
        average_guesses: 0.0,
        max_guesses: 0,
        distribution: BTreeMap::new(),
        unsolved: Vec::new(),
        duration,
    };

    let mut total_guesses = 0;
    for (answer, report) in reports {
        match report.outcome {
            SolveOutcome::Solved { guesses, .. } => {
                result.solved += 1;
                total_guesses += guesses;
                result.max_guesses = result.max_guesses.max(guesses);
                *result.distribution.entry(guesses).or_insert(0) += 1;
            }
            SolveOutcome::NoCandidatesLeft => {
                result.no_candidates += 1;
                result.unsolved.push(answer);
            }
            SolveOutcome::Exhausted => {
                result.exhausted += 1;
                result.unsolved.push(answer);
            }
        }
    }

    if result.solved > 0 {
        result.average_guesses = total_guesses as f64 / result.solved as f64;
    }

    log::info!(
        "benchmark: {}/{} solved in {:.2}s",
        result.solved,
        result.total_words,
        duration.as_secs_f64()
    );

    Ok(result)
}
