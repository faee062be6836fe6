//! Likelihood that a word is the secret

use super::Scorer;
use crate::core::Word;
use crate::stats::PositionalFrequencyModel;

/// Product of positional probabilities, assuming positions are independent
///
/// Higher means the word is more likely to be accepted as the answer.
#[derive(Debug, Clone, Copy)]
pub struct LikelihoodScorer<'a> {
    model: &'a PositionalFrequencyModel,
}

impl<'a> LikelihoodScorer<'a> {
    #[must_use]
    pub const fn new(model: &'a PositionalFrequencyModel) -> Self {
        Self { model }
    }
}

impl Scorer for LikelihoodScorer<'_> {
    fn score(&self, word: &Word) -> f64 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| self.model.at(i, letter))
            .product()
    }

    fn word_length(&self) -> Option<usize> {
        Some(self.model.word_length())
    }
}
