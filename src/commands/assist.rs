//! Assist mode
//!
//! Suggests guesses for a game played somewhere else. Each input line reports a
//! guess and the feedback it got, e.g. `crane --Y-G`; feedback on its own
//! applies to the word that was just suggested.

use crate::core::{Feedback, Word};
use crate::output::formatters::colored_guess;
use crate::solver::Solver;
use std::io::{self, BufRead, Write};

/// First suggestion before any feedback is known
pub const OPENER: &str = "CRANE";

/// Remaining candidates are listed automatically once there are this few
const SHOW_CANDIDATES_AT: usize = 10;

/// What to play next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Guess { word: Word, candidates: usize },
    /// The reported feedback rules out every word
    NoCandidatesLeft,
}

/// How an assist session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOutcome {
    Solved { guesses: usize },
    Quit,
}

/// Suggest the next guess
///
/// Before any feedback this is [`OPENER`] when the vocabulary has it, otherwise
/// the smallest consistent candidate.
#[must_use]
pub fn suggest(solver: &Solver) -> Suggestion {
    let filter = solver.filter();

    let opener = filter
        .history()
        .is_empty()
        .then(|| filter.vocabulary().get(OPENER))
        .flatten();
    if let Some(word) = opener {
        return Suggestion::Guess {
            word: word.clone(),
            candidates: filter.vocabulary().len(),
        };
    }

    match solver.next_guess() {
        Some(word) => Suggestion::Guess {
            word: word.clone(),
            candidates: filter.candidate_count(),
        },
        None => Suggestion::NoCandidatesLeft,
    }
}

/// Run an assist session, reading reports from `input` and writing to `output`
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &mut Solver,
    mut input: R,
    mut output: W,
) -> io::Result<AssistOutcome> {
    writeln!(
        output,
        "Enter each guess with its feedback, e.g. 'crane --Y-G' (G green, Y yellow, - gray)."
    )?;
    writeln!(
        output,
        "Feedback alone applies to the suggested word. Commands: 'list', 'undo', 'new', 'quit'."
    )?;

    loop {
        let suggestion = suggest(solver);
        let turn = solver.filter().history().len() + 1;
        match &suggestion {
            Suggestion::Guess { word, candidates } => {
                writeln!(output, "Turn {turn}: {candidates} possible answers; try {word}")?;
                if turn > 1 && *candidates <= SHOW_CANDIDATES_AT {
                    print_candidates(solver, &mut output)?;
                }
            }
            Suggestion::NoCandidatesLeft => {
                writeln!(
                    output,
                    "No possible answers left; some feedback may be wrong. Type 'undo' or 'new'."
                )?;
            }
        }

        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(AssistOutcome::Quit);
        }
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "Bye!")?;
                return Ok(AssistOutcome::Quit);
            }
            "new" | "n" => {
                solver.reset();
                writeln!(output, "New game started.")?;
                continue;
            }
            "undo" | "u" => {
                match solver.undo() {
                    Some((word, feedback)) => writeln!(output, "Undid {word} {feedback}.")?,
                    None => writeln!(output, "Nothing to undo.")?,
                }
                continue;
            }
            "list" | "l" => {
                print_candidates(solver, &mut output)?;
                continue;
            }
            _ => {}
        }

        let (guess, feedback) = match parse_report(&entry, &suggestion) {
            Ok(report) => report,
            Err(message) => {
                writeln!(output, "{message}. Try again.")?;
                continue;
            }
        };

        if !solver.filter().vocabulary().contains(&guess) {
            log::debug!("{guess} is not in the vocabulary; using its feedback anyway");
        }

        writeln!(output, "{}", colored_guess(&guess, &feedback))?;
        let won = feedback.is_win();
        solver.record(guess, feedback);

        if won {
            let guesses = solver.filter().history().len();
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            writeln!(output, "Solved in {guesses} {noun}!")?;
            return Ok(AssistOutcome::Solved { guesses });
        }
    }
}

/// Parse `GUESS FEEDBACK`, or bare `FEEDBACK` for the suggested word
fn parse_report(entry: &str, suggestion: &Suggestion) -> Result<(Word, Feedback), String> {
    match *entry.split_whitespace().collect::<Vec<_>>().as_slice() {
        [guess, feedback] => {
            let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
            Ok((guess, feedback.parse()?))
        }
        [feedback] => match suggestion {
            Suggestion::Guess { word, .. } => Ok((word.clone(), feedback.parse()?)),
            Suggestion::NoCandidatesLeft => {
                Err("Nothing was suggested; enter the guess with its feedback".to_string())
            }
        },
        _ => Err(format!("Expected 'GUESS FEEDBACK', got '{entry}'")),
    }
}

fn print_candidates<W: Write>(solver: &Solver, output: &mut W) -> io::Result<()> {
    let candidates = solver.filter().candidates();
    writeln!(output, "Possible answers ({}):", candidates.len())?;
    for word in candidates {
        writeln!(output, "  {word}")?;
    }
    Ok(())
}
