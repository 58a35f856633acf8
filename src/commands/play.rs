//! Interactive play mode
//!
//! A person types guesses against the evaluator; `hint` asks the solver for a
//! consistent candidate.

use crate::core::{GameError, Word};
use crate::game::{Evaluator, GameStatus, Turn};
use crate::output::formatters::colored_guess;
use crate::solver::Solver;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: u32 },
    Lost,
    Quit,
}

/// Errors from the interactive loop
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Run an interactive game, reading guesses from `input` and writing to `output`
///
/// Invalid guesses are reported and do not use up a round. End of input counts
/// as quitting.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the evaluator rejects a guess for any
/// reason other than it being invalid.
pub fn run_play<R: BufRead, W: Write>(
    evaluator: &mut Evaluator,
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome, PlayError> {
    let mut hints = Solver::for_game(evaluator);

    writeln!(
        output,
        "Guess the 5-letter word in {} rounds. Commands: 'hint', 'quit'.",
        evaluator.round_limit()
    )?;

    loop {
        match evaluator.status() {
            GameStatus::Won => {
                return Ok(PlayOutcome::Won {
                    guesses: evaluator.guesses_made(),
                });
            }
            GameStatus::Lost => return Ok(PlayOutcome::Lost),
            GameStatus::InProgress(round) => {
                write!(output, "Round {round}/{}: ", evaluator.round_limit())?;
                output.flush()?;
            }
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(PlayOutcome::Quit);
        }
        let entry = line.trim();

        match entry.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(output, "Bye!")?;
                return Ok(PlayOutcome::Quit);
            }
            "hint" | "h" => {
                let count = hints.filter().candidate_count();
                match hints.next_guess() {
                    Some(word) => writeln!(output, "{count} possible answers left; try {word}")?,
                    None => writeln!(output, "No possible answers left.")?,
                }
                continue;
            }
            _ => {}
        }

        let guess = match Word::new(entry) {
            Ok(word) => word,
            Err(e) => {
                writeln!(output, "Invalid guess '{entry}': {e}. Try again.")?;
                continue;
            }
        };

        let turn = match evaluator.submit(guess.text()) {
            Ok(turn) => turn,
            Err(e @ GameError::InvalidGuess { .. }) => {
                writeln!(output, "{e}. Try again.")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        hints.record(guess.clone(), turn.feedback());
        writeln!(output, "{}", colored_guess(&guess, &turn.feedback()))?;

        match turn {
            Turn::Won(_) => {
                let guesses = evaluator.guesses_made();
                let noun = if guesses == 1 { "guess" } else { "guesses" };
                writeln!(output, "Solved in {guesses} {noun}!")?;
                return Ok(PlayOutcome::Won { guesses });
            }
            Turn::Lost(_) => {
                if let Some(answer) = evaluator.answer() {
                    writeln!(output, "Out of rounds. The answer was {answer}.")?;
                }
                return Ok(PlayOutcome::Lost);
            }
            Turn::Continue(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use std::io::Cursor;

    fn fixture() -> Vocabulary {
        ["glade", "grape", "blaze", "raise", "crane", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn play(answer: &str, input: &str) -> (PlayOutcome, String, Evaluator) {
        let mut evaluator = Evaluator::new(fixture(), answer).unwrap();
        let mut output = Vec::new();
        let outcome = run_play(&mut evaluator, Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap(), evaluator)
    }

    #[test]
    fn play_win_first_guess() {
        let (outcome, output, _) = play("glade", "glade\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 1 });
        assert!(output.contains("Solved in 1 guess!"));
    }

    #[test]
    fn play_invalid_guesses_do_not_use_rounds() {
        let (outcome, output, evaluator) = play("glade", "zebra\nglad\nraise\nglade\n");
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(output.contains("not in the vocabulary"));
        assert!(output.contains("Invalid guess 'glad'"));
        assert_eq!(evaluator.current_round(), 3);
    }

    #[test]
    fn play_quit_and_eof() {
        let (outcome, output, _) = play("glade", "quit\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(output.contains("Bye!"));

        let (outcome, _, evaluator) = play("glade", "raise\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(evaluator.current_round(), 2);
    }

    #[test]
    fn play_hint_suggests_smallest_candidate() {
        let (_, output, _) = play("glade", "hint\nquit\n");
        assert!(output.contains("6 possible answers left; try BLAZE"));
    }

    #[test]
    fn play_runs_out_of_rounds() {
        let input = "crane\ncrane\ncrane\ncrane\ncrane\nslate\n";
        let (outcome, output, _) = play("glade", input);
        assert_eq!(outcome, PlayOutcome::Lost);
        assert!(output.contains("The answer was GLADE."));
    }
}
