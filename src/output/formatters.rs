//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: LetterFeedback) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
