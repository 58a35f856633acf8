//! Candidate filtering from a guess history

use crate::core::{Feedback, LetterFeedback, ScoringMode, Vocabulary, WORD_LENGTH, Word};

/// Accumulated (guess, feedback) history and the candidate set it implies
///
/// The candidate set is never stored; it is recomputed from the full
/// vocabulary each time it is asked for.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    vocabulary: Vocabulary,
    scoring: ScoringMode,
    history: Vec<(Word, Feedback)>,
}

impl CandidateFilter {
    /// Create an empty filter over `vocabulary`
    ///
    /// `scoring` must match the rules the feedback was produced with.
    #[must_use]
    pub const fn new(vocabulary: Vocabulary, scoring: ScoringMode) -> Self {
        Self {
            vocabulary,
            scoring,
            history: Vec::new(),
        }
    }

    /// Append a guess and its feedback to the history
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.history.push((guess, feedback));
    }

    /// Remove the most recent guess, returning it
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        self.history.pop()
    }

    /// Forget all recorded guesses
    pub fn reset(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Vocabulary words consistent with every recorded guess, in lexicographic order
    ///
    /// May be empty.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.vocabulary
            .words()
            .iter()
            .filter(|word| self.is_consistent(word))
            .collect()
    }

    /// Number of words `candidates` would return
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.vocabulary
            .words()
            .iter()
            .filter(|word| self.is_consistent(word))
            .count()
    }

    /// Check a single word against the whole history
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.history.iter().all(|(guess, feedback)| match self.scoring {
            ScoringMode::Simple => allows_simple(guess, feedback, word),
            ScoringMode::Canonical => allows_canonical(guess, feedback, word),
        })
    }
}

/// Per-slot rules, one letter at a time:
/// - `Correct`: the word has the letter in this slot
/// - `Present`: the word has the letter, but not in this slot
/// - `Absent`: the word does not have the letter anywhere
fn allows_simple(guess: &Word, feedback: &Feedback, word: &Word) -> bool {
    guess
        .chars()
        .iter()
        .zip(feedback.letters())
        .enumerate()
        .all(|(i, (&letter, &mark))| match mark {
            LetterFeedback::Correct => word.char_at(i) == letter,
            LetterFeedback::Present => word.has_letter(letter) && word.char_at(i) != letter,
            LetterFeedback::Absent => !word.has_letter(letter),
        })
}

/// Duplicate-aware rules matching canonical scoring
///
/// For each letter, the green and yellow marks give a lower bound on how often it
/// occurs; a gray mark on the same letter turns that bound into an exact count.
// Allow: slot index is needed for guess, marks and word together
#[allow(clippy::needless_range_loop)]
fn allows_canonical(guess: &Word, feedback: &Feedback, word: &Word) -> bool {
    let marks = feedback.letters();

    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        match marks[i] {
            LetterFeedback::Correct => {
                if word.char_at(i) != letter {
                    return false;
                }
            }
            LetterFeedback::Present | LetterFeedback::Absent => {
                if word.char_at(i) == letter {
                    return false;
                }
            }
        }

        let mut confirmed = 0;
        let mut capped = false;
        for j in 0..WORD_LENGTH {
            if guess.char_at(j) == letter {
                match marks[j] {
                    LetterFeedback::Correct | LetterFeedback::Present => confirmed += 1,
                    LetterFeedback::Absent => capped = true,
                }
            }
        }

        let occurrences = word.count_of(letter);
        if occurrences < confirmed || (capped && occurrences != confirmed) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn vocab(words: &[&str]) -> Vocabulary {
        words.iter().map(|w| word(w)).collect()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    fn fixture() -> Vocabulary {
        vocab(&[
            "glade", "grape", "blaze", "raise", "crane", "slate", "abide", "speed", "geese",
        ])
    }

    #[test]
    fn empty_history_yields_full_vocabulary() {
        let filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        assert_eq!(filter.candidates().len(), 9);
        assert_eq!(filter.candidate_count(), 9);
        assert_eq!(texts(&filter.candidates())[0], "ABIDE");
    }

    #[test]
    fn correct_at_first_slot_keeps_only_g_words() {
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        filter.record(
            word("gqqqq"),
            Feedback::new([Correct, Absent, Absent, Absent, Absent]),
        );
        for candidate in filter.candidates() {
            assert_eq!(candidate.char_at(0), b'G');
        }

        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        filter.record(
            word("grape"),
            Feedback::new([Correct, Absent, Absent, Absent, Absent]),
        );
        assert!(filter.candidates().is_empty());
    }

    #[test]
    fn glade_scenario_narrows_to_answer() {
        let answer = word("glade");
        let mut filter =
            CandidateFilter::new(vocab(&["glade", "grape", "blaze"]), ScoringMode::Simple);

        let guess = word("raise");
        let feedback = Feedback::compute(&guess, &answer, ScoringMode::Simple);
        filter.record(guess, feedback);

        // R is absent, which rules out GRAPE
        assert_eq!(texts(&filter.candidates()), ["BLAZE", "GLADE"]);

        let guess = word("blaze");
        let feedback = Feedback::compute(&guess, &answer, ScoringMode::Simple);
        filter.record(guess, feedback);
        assert_eq!(texts(&filter.candidates()), ["GLADE"]);
    }

    #[test]
    fn present_rule_excludes_the_guessed_slot() {
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        // A present but not in slot 2: rules out GLADE, GRAPE, BLAZE, CRANE, SLATE
        filter.record(
            word("quaky"),
            Feedback::new([Absent, Absent, Present, Absent, Absent]),
        );
        assert_eq!(texts(&filter.candidates()), ["ABIDE", "RAISE"]);
    }

    #[test]
    fn candidates_never_grow() {
        let answer = word("speed");
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        let mut previous: Vec<String> = texts(&filter.candidates());

        for guess in ["crane", "geese", "abide", "speed"] {
            let guess = word(guess);
            let feedback = Feedback::compute(&guess, &answer, ScoringMode::Simple);
            filter.record(guess, feedback);

            let current = texts(&filter.candidates());
            assert!(current.len() <= previous.len());
            assert!(current.iter().all(|w| previous.contains(w)));
            assert!(current.contains(&"SPEED".to_string()));
            previous = current;
        }
        assert_eq!(previous, ["SPEED"]);
    }

    #[test]
    fn recording_twice_is_redundant() {
        let guess = word("crane");
        let feedback = Feedback::compute(&guess, &word("slate"), ScoringMode::Simple);

        let mut once = CandidateFilter::new(fixture(), ScoringMode::Simple);
        once.record(guess.clone(), feedback);
        let mut twice = once.clone();
        twice.record(guess, feedback);

        assert_eq!(twice.history().len(), 2);
        assert_eq!(texts(&twice.candidates()), texts(&once.candidates()));
    }

    #[test]
    fn contradictory_history_is_empty() {
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        filter.record(word("glade"), Feedback::PERFECT);
        filter.record(word("grape"), Feedback::PERFECT);
        assert!(filter.candidates().is_empty());
        assert_eq!(filter.candidate_count(), 0);
    }

    #[test]
    fn empty_vocabulary_has_no_candidates() {
        let filter = CandidateFilter::new(Vocabulary::default(), ScoringMode::Simple);
        assert!(filter.candidates().is_empty());
    }

    #[test]
    fn reset_clears_history() {
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        filter.record(word("glade"), Feedback::PERFECT);
        assert_eq!(filter.candidate_count(), 1);
        filter.reset();
        assert!(filter.history().is_empty());
        assert_eq!(filter.candidate_count(), 9);
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let mut filter = CandidateFilter::new(fixture(), ScoringMode::Simple);
        filter.record(word("glade"), Feedback::PERFECT);
        filter.record(word("grape"), Feedback::PERFECT);
        assert_eq!(filter.candidate_count(), 0);

        let (undone, feedback) = filter.undo().unwrap();
        assert_eq!(undone.text(), "GRAPE");
        assert_eq!(feedback, Feedback::PERFECT);
        assert_eq!(texts(&filter.candidates()), ["GLADE"]);

        filter.undo();
        assert!(filter.undo().is_none());
        assert_eq!(filter.candidate_count(), 9);
    }

    #[test]
    fn simple_rules_drop_answer_under_canonical_feedback() {
        // GEESE vs ABIDE under canonical scoring marks the extra E's gray, which
        // the per-slot rules read as "no E at all"
        let answer = word("abide");
        let guess = word("geese");
        let feedback = Feedback::compute(&guess, &answer, ScoringMode::Canonical);
        assert_eq!(feedback.letters(), &[Absent, Absent, Absent, Absent, Correct]);

        let mut naive = CandidateFilter::new(fixture(), ScoringMode::Simple);
        naive.record(guess.clone(), feedback);
        assert!(!naive.is_consistent(&answer));

        let mut aware = CandidateFilter::new(fixture(), ScoringMode::Canonical);
        aware.record(guess, feedback);
        assert!(aware.is_consistent(&answer));
    }

    #[test]
    fn canonical_rules_keep_answer_for_every_guess() {
        let vocabulary = fixture();
        for answer in vocabulary.words() {
            for guess in vocabulary.words() {
                let feedback = Feedback::compute(guess, answer, ScoringMode::Canonical);
                let mut filter = CandidateFilter::new(vocabulary.clone(), ScoringMode::Canonical);
                filter.record(guess.clone(), feedback);
                assert!(
                    filter.is_consistent(answer),
                    "{guess} vs {answer} ({feedback}) dropped the answer"
                );
            }
        }
    }

    #[test]
    fn simple_rules_keep_answer_under_simple_feedback() {
        let vocabulary = fixture();
        for answer in vocabulary.words() {
            for guess in vocabulary.words() {
                let feedback = Feedback::compute(guess, answer, ScoringMode::Simple);
                let mut filter = CandidateFilter::new(vocabulary.clone(), ScoringMode::Simple);
                filter.record(guess.clone(), feedback);
                assert!(filter.is_consistent(answer));
            }
        }
    }
}
