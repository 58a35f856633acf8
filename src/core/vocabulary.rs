//! Shared, immutable vocabulary of valid words

use super::word::Word;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// The fixed universe of acceptable guess and answer words
///
/// Built once and never mutated. Cloning is cheap: every clone shares the same
/// sorted word list, so an evaluator and a solver (or many of each across
/// threads) can hold the same vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    sorted: Vec<Word>,
    members: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates and sorting lexicographically
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let members: FxHashSet<Word> = words.into_iter().collect();
        let mut sorted: Vec<Word> = members.iter().cloned().collect();
        sorted.sort_unstable();

        Self {
            inner: Arc::new(Inner { sorted, members }),
        }
    }

    /// Check whether a word is in the vocabulary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.inner.members.contains(word)
    }

    /// Look up a word by its text (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.inner.members.get(&word)
    }

    /// All words in lexicographic order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.inner.sorted
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sorted.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.sorted.is_empty()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
