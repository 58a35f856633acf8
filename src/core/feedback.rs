//! Per-letter feedback calculation and representation
//!
//! Each guessed letter is judged as one of:
//! - `Correct` (green): same letter in the same slot of the answer
//! - `Present` (yellow): letter occurs in the answer, but not in this slot
//! - `Absent` (gray): letter does not occur in the answer
//!
//! How repeated letters are judged depends on the [`ScoringMode`].

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Judgment for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `-`/`_`/`X`/⬜/⬛ for absent
    /// (letters are case-insensitive).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Single-letter code used in logs and plain-text output
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated guess letters are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Per-slot membership check: a letter is `Present` whenever it occurs
    /// anywhere in the answer, no matter how many times the guess repeats it.
    #[default]
    Simple,
    /// Official Wordle rules: greens first, then yellows handed out from the
    /// remaining letter counts; surplus repeats are `Absent`.
    Canonical,
}

impl ScoringMode {
    /// Parse a mode name (`simple` or `canonical`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "canonical" | "official" => Some(Self::Canonical),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, aligned slot-for-slot with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Feedback, ScoringMode, Word};
    ///
    /// let guess = Word::new("raise").unwrap();
    /// let answer = Word::new("glade").unwrap();
    /// let feedback = Feedback::compute(&guess, &answer, ScoringMode::Simple);
    ///
    /// // R(gray) A(yellow) I(gray) S(gray) E(green)
    /// assert_eq!(feedback.to_string(), "-Y--G");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word, mode: ScoringMode) -> Self {
        match mode {
            ScoringMode::Simple => Self::compute_simple(guess, answer),
            ScoringMode::Canonical => Self::compute_canonical(guess, answer),
        }
    }

    fn compute_simple(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];

        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *slot = if letter == answer.char_at(i) {
                LetterFeedback::Correct
            } else if answer.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        Self(result)
    }

    fn compute_canonical(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = [0u8; 26];

        // First pass: greens, and count the answer letters they don't consume
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = LetterFeedback::Correct;
            } else {
                available[letter_index(answer.char_at(i))] += 1;
            }
        }

        // Second pass: yellows from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            let count = &mut available[letter_index(guess.char_at(i))];
            if *count > 0 {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Get the per-letter judgments
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let symbols: Vec<LetterFeedback> = s
            .trim()
            .chars()
            .map(LetterFeedback::from_char)
            .collect::<Option<_>>()?;

        let letters: [LetterFeedback; WORD_LENGTH] = symbols.try_into().ok()?;
        Some(Self(letters))
    }

    /// Render as an emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}
