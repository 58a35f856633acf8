//! Answer evaluator: owns the secret answer and enforces the round rules

use crate::core::{Feedback, GameError, RejectReason, ScoringMode, Vocabulary, Word};

/// Default number of rounds in a game
pub const DEFAULT_ROUND_LIMIT: u32 = 6;

/// Game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub round_limit: u32,
    pub scoring: ScoringMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_limit: DEFAULT_ROUND_LIMIT,
            scoring: ScoringMode::Simple,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the guess of the given round (1-based)
    InProgress(u32),
    Won,
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Feedback was all green
    Won(Feedback),
    /// Not solved yet, rounds remain
    Continue(Feedback),
    /// Not solved and that was the last round
    Lost(Feedback),
}

impl Turn {
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        match *self {
            Self::Won(f) | Self::Continue(f) | Self::Lost(f) => f,
        }
    }
}

/// A single Wordle game against a fixed secret answer
#[derive(Debug, Clone)]
pub struct Evaluator {
    vocabulary: Vocabulary,
    answer: Word,
    config: GameConfig,
    round: u32,
    won: bool,
}

impl Evaluator {
    /// Start a game with the default rules
    ///
    /// # Errors
    /// Returns `GameError::InvalidAnswer` if `answer` is not a 5-letter word
    /// from `vocabulary`.
    pub fn new(vocabulary: Vocabulary, answer: &str) -> Result<Self, GameError> {
        Self::with_config(vocabulary, answer, GameConfig::default())
    }

    /// Start a game with explicit rules
    ///
    /// # Errors
    /// Returns `GameError::InvalidAnswer` if `answer` is not a 5-letter word
    /// from `vocabulary`.
    pub fn with_config(
        vocabulary: Vocabulary,
        answer: &str,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let answer = check_word(&vocabulary, answer).map_err(|reason| GameError::InvalidAnswer {
            word: answer.to_string(),
            reason,
        })?;

        Ok(Self {
            vocabulary,
            answer,
            config,
            round: 1,
            won: false,
        })
    }

    /// Submit a guess and get an explicit turn result
    ///
    /// The round counter only advances for accepted guesses.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game already ended
    /// - `GameError::InvalidGuess` if the guess is malformed or not in the vocabulary
    pub fn submit(&mut self, guess: &str) -> Result<Turn, GameError> {
        self.play(guess).map(|(_, turn)| turn)
    }

    /// Evaluate a guess, returning its feedback and whether it won
    ///
    /// # Errors
    /// Everything `submit` returns, plus `GameError::RoundLimitExceeded` when a
    /// non-winning guess uses up the last round.
    pub fn evaluate(&mut self, guess: &str) -> Result<(Feedback, bool), GameError> {
        match self.play(guess)? {
            (_, Turn::Won(feedback)) => Ok((feedback, true)),
            (_, Turn::Continue(feedback)) => Ok((feedback, false)),
            (guess, Turn::Lost(feedback)) => Err(GameError::RoundLimitExceeded {
                limit: self.config.round_limit,
                guess,
                feedback,
            }),
        }
    }

    fn play(&mut self, guess: &str) -> Result<(Word, Turn), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let guess = check_word(&self.vocabulary, guess).map_err(|reason| {
            GameError::InvalidGuess {
                word: guess.to_string(),
                reason,
            }
        })?;

        let feedback = Feedback::compute(&guess, &self.answer, self.config.scoring);
        self.round += 1;

        log::debug!("round {}: {guess} -> {feedback}", self.round - 1);

        let turn = if feedback.is_win() {
            self.won = true;
            Turn::Won(feedback)
        } else if self.round > self.config.round_limit {
            Turn::Lost(feedback)
        } else {
            Turn::Continue(feedback)
        };

        Ok((guess, turn))
    }

    /// The round the next guess will be played in (starts at 1)
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.round
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn guesses_made(&self) -> u32 {
        self.round - 1
    }

    #[must_use]
    pub const fn round_limit(&self) -> u32 {
        self.config.round_limit
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.round > self.config.round_limit {
            GameStatus::Lost
        } else {
            GameStatus::InProgress(self.round)
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.won || self.round > self.config.round_limit
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The secret answer, revealed only once the game has ended
    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        if self.is_game_over() {
            Some(&self.answer)
        } else {
            None
        }
    }

    /// The secret answer, whether or not the game is over
    #[must_use]
    pub const fn reveal(&self) -> &Word {
        &self.answer
    }
}

fn check_word(vocabulary: &Vocabulary, text: &str) -> Result<Word, RejectReason> {
    let word = Word::new(text)?;
    if vocabulary.contains(&word) {
        Ok(word)
    } else {
        Err(RejectReason::NotInVocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::core::WordError;

    fn vocab(words: &[&str]) -> Vocabulary {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn fixture() -> Vocabulary {
        vocab(&[
            "glade", "grape", "blaze", "raise", "crane", "slate", "bumpy", "speed", "abide",
        ])
    }

    #[test]
    fn winning_guess() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        assert_eq!(game.current_round(), 1);
        assert!(game.answer().is_none());
        assert_eq!(game.reveal().text(), "GLADE");

        let (feedback, won) = game.evaluate("GLADE").unwrap();

        assert_eq!(feedback, Feedback::PERFECT);
        assert!(won);
        assert_eq!(game.current_round(), 2);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_game_over());
        assert_eq!(game.answer().map(Word::text), Some("GLADE"));
    }

    #[test]
    fn raise_against_glade() {
        let mut game = Evaluator::new(fixture(), "GLADE").unwrap();
        let (feedback, won) = game.evaluate("raise").unwrap();

        assert_eq!(
            feedback.letters(),
            &[Absent, Present, Absent, Absent, Correct]
        );
        assert!(!won);
        assert_eq!(game.status(), GameStatus::InProgress(2));
    }

    #[test]
    fn disjoint_guess_is_all_absent() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        let (feedback, _) = game.evaluate("bumpy").unwrap();
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn round_counter_increases_by_one() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        for expected in 2..=6 {
            game.evaluate("crane").unwrap();
            assert_eq!(game.current_round(), expected);
            assert_eq!(game.guesses_made(), expected - 1);
        }
    }

    #[test]
    fn sixth_miss_exceeds_round_limit() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        for _ in 0..5 {
            let (_, won) = game.evaluate("crane").unwrap();
            assert!(!won);
        }

        let err = game.evaluate("slate").unwrap_err();
        assert!(matches!(
            err,
            GameError::RoundLimitExceeded { limit: 6, ref guess, .. } if guess.text() == "SLATE"
        ));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.current_round(), 7);
        assert!(game.answer().is_some());

        // Lost is terminal
        assert_eq!(game.evaluate("glade"), Err(GameError::GameOver));
        assert_eq!(game.submit("glade"), Err(GameError::GameOver));
        assert_eq!(game.current_round(), 7);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn winning_on_last_round_is_a_win() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        for _ in 0..5 {
            game.evaluate("crane").unwrap();
        }
        assert_eq!(game.evaluate("glade").unwrap(), (Feedback::PERFECT, true));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();
        game.evaluate("glade").unwrap();

        assert_eq!(game.evaluate("grape"), Err(GameError::GameOver));
        assert_eq!(game.submit("glade"), Err(GameError::GameOver));
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn invalid_guess_does_not_advance_round() {
        let mut game = Evaluator::new(fixture(), "glade").unwrap();

        let err = game.evaluate("zzzzz").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess {
                word: "zzzzz".to_string(),
                reason: RejectReason::NotInVocabulary,
            }
        );

        let err = game.evaluate("glades").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidGuess {
                reason: RejectReason::Malformed(WordError::InvalidLength(6)),
                ..
            }
        ));

        assert_eq!(game.current_round(), 1);
        assert_eq!(game.status(), GameStatus::InProgress(1));
    }

    #[test]
    fn invalid_answer_rejected() {
        assert!(matches!(
            Evaluator::new(fixture(), "zebra"),
            Err(GameError::InvalidAnswer {
                reason: RejectReason::NotInVocabulary,
                ..
            })
        ));
        assert!(matches!(
            Evaluator::new(fixture(), "glad"),
            Err(GameError::InvalidAnswer {
                reason: RejectReason::Malformed(WordError::InvalidLength(4)),
                ..
            })
        ));
        assert!(matches!(
            Evaluator::new(fixture(), ""),
            Err(GameError::InvalidAnswer { .. })
        ));
        assert!(Evaluator::new(Vocabulary::default(), "glade").is_err());
    }

    #[test]
    fn submit_reports_explicit_turns() {
        let config = GameConfig {
            round_limit: 2,
            scoring: ScoringMode::Simple,
        };
        let mut game = Evaluator::with_config(fixture(), "glade", config).unwrap();

        assert!(matches!(game.submit("crane"), Ok(Turn::Continue(_))));
        let turn = game.submit("grape").unwrap();
        assert!(matches!(turn, Turn::Lost(_)));
        assert_eq!(turn.feedback().count(Correct), 3);
        assert!(game.is_game_over());
    }

    #[test]
    fn canonical_scoring_caps_repeats() {
        let config = GameConfig::default().with_scoring(ScoringMode::Canonical);
        let mut game = Evaluator::with_config(fixture(), "abide", config).unwrap();
        let (feedback, _) = game.evaluate("speed").unwrap();
        assert_eq!(feedback.to_string(), "--Y-Y");
    }
}
