//! Error taxonomy for games and solving

use super::feedback::Feedback;
use super::word::{Word, WordError};
use thiserror::Error;

/// Errors raised by the answer evaluator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The answer failed the length or vocabulary check at construction
    #[error("invalid answer '{word}': {reason}")]
    InvalidAnswer { word: String, reason: RejectReason },

    /// A guess failed the length or vocabulary check; the game is unchanged
    #[error("invalid guess '{word}': {reason}")]
    InvalidGuess { word: String, reason: RejectReason },

    /// A guess was submitted after the game ended
    #[error("the game is already over")]
    GameOver,

    /// The last allowed round was used without finding the answer
    #[error("maximum number of rounds ({limit}) reached; final guess {guess} scored {feedback}")]
    RoundLimitExceeded {
        limit: u32,
        guess: Word,
        feedback: Feedback,
    },
}

/// Why a word was rejected at the game boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("not in the vocabulary")]
    NotInVocabulary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_word() {
        let err = GameError::InvalidGuess {
            word: "zzzzz".to_string(),
            reason: RejectReason::NotInVocabulary,
        };
        assert_eq!(err.to_string(), "invalid guess 'zzzzz': not in the vocabulary");

        let err = GameError::InvalidAnswer {
            word: "abc".to_string(),
            reason: WordError::InvalidLength(3).into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid answer 'abc': Word must be exactly 5 letters, got 3"
        );
    }
}
