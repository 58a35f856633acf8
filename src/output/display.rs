//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::BenchmarkResult;
use crate::solver::{SolveOutcome, SolveReport};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_report(answer: &str, report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", answer.to_uppercase().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );
        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );
    }

    println!();
    match &report.outcome {
        SolveOutcome::Solved { word, guesses } => println!(
            "{}",
            format!("✅ Solved! The answer is {word}. Guesses made: {guesses}")
                .green()
                .bold()
        ),
        SolveOutcome::NoCandidatesLeft => {
            println!("{}", "❌ No possible answers left.".red().bold());
        }
        SolveOutcome::Exhausted => println!(
            "{}",
            format!(
                "❌ Game over without a solution after {} guesses",
                report.guess_count()
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green().bold()
    );
    println!(
        "   No candidates:    {}",
        result.no_candidates.to_string().red()
    );
    println!("   Out of rounds:    {}", result.exhausted.to_string().yellow());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Worst solve:      {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved:".bright_red().bold());
        for chunk in result.unsolved.chunks(10) {
            println!("   {}", chunk.join(" "));
        }
    }
}
