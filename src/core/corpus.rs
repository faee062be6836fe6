//! Fixed-length word corpus
//!
//! Every frequency model and filter consumes a `Corpus`, so the equal-length
//! precondition is checked once, here, when words come in from the loader.

use super::{ScoreError, Word};
use std::ops::Deref;

/// An ordered list of words that all have the same length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    word_length: usize,
    words: Vec<Word>,
}

impl Corpus {
    /// Create a corpus of words of exactly `word_length` letters
    ///
    /// # Errors
    /// Returns `LengthMismatch` for the first word of a different length.
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Corpus, Word};
    ///
    /// let words = vec![Word::new("train").unwrap(), Word::new("crane").unwrap()];
    /// let corpus = Corpus::new(5, words).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn new(word_length: usize, words: Vec<Word>) -> Result<Self, ScoreError> {
        if let Some(word) = words.iter().find(|w| w.len() != word_length) {
            return Err(ScoreError::LengthMismatch {
                expected: word_length,
                found: word.len(),
            });
        }
        Ok(Self { word_length, words })
    }

    /// Parse string slices into a corpus of `word_length`-letter words
    ///
    /// # Errors
    /// Returns `InvalidWord` for unparseable text, `LengthMismatch` for a wrong-length word.
    pub fn parse(word_length: usize, words: &[&str]) -> Result<Self, ScoreError> {
        let words = words
            .iter()
            .map(|&text| Word::new(text))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(word_length, words)
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Keep only the words accepted by `predicate`, preserving order
    #[must_use]
    pub fn retain_matching(&self, predicate: impl Fn(&Word) -> bool) -> Self {
        Self {
            word_length: self.word_length,
            words: self.words.iter().filter(|w| predicate(w)).cloned().collect(),
        }
    }
}

impl Deref for Corpus {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
