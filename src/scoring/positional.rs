//! Positional information scorer
//!
//! Refines the information scorer with per-position probabilities, so a guess
//! is rewarded for the green/yellow split of each letter as well.

use super::Scorer;
use crate::core::{ScoreError, Word};
use crate::stats::{MODEL_TOLERANCE, PositionalFrequencyModel};

/// Information weights of the three feedback outcomes for one letter slot
///
/// Each weight is a Bernoulli variance, so it is non-negative for any
/// well-formed model (`0 <= p <= f <= 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeWeights {
    /// Letter absent anywhere: `f·(1−f)`
    pub gray: f64,
    /// Letter present at another position: `(f−p)·(1−f+p)`
    pub yellow: f64,
    /// Letter at this position: `p·(1−p)`
    pub green: f64,
}

impl OutcomeWeights {
    /// Weights for overall probability `f` and positional probability `p`
    #[must_use]
    pub fn new(f: f64, p: f64) -> Self {
        Self {
            gray: (1.0 - f) * f,
            yellow: (f - p) * (1.0 - f + p),
            green: p * (1.0 - p),
        }
    }

    /// All three weights are non-negative up to [`MODEL_TOLERANCE`]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.gray >= -MODEL_TOLERANCE
            && self.yellow >= -MODEL_TOLERANCE
            && self.green >= -MODEL_TOLERANCE
    }

    /// Element-wise maximum, used to collapse repeated letters
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            gray: self.gray.max(other.gray),
            yellow: self.yellow.max(other.yellow),
            green: self.green.max(other.green),
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.gray + self.yellow + self.green
    }
}

/// Expected-information scorer using overall and positional probabilities
///
/// A repeated letter contributes its best gray, best yellow and best green
/// weight once. The sum is divided by the full word length.
#[derive(Debug, Clone, Copy)]
pub struct PositionalInformationScorer<'a> {
    model: &'a PositionalFrequencyModel,
}

impl<'a> PositionalInformationScorer<'a> {
    /// Create a scorer over a validated model
    ///
    /// # Errors
    /// Returns `MalformedModel` if some positional probability exceeds its
    /// overall probability or lies outside [0, 1].
    pub fn new(model: &'a PositionalFrequencyModel) -> Result<Self, ScoreError> {
        model.validate()?;
        Ok(Self { model })
    }

    /// Outcome weights of `word`, one entry per distinct letter in first-seen order
    #[must_use]
    pub fn letter_weights(&self, word: &Word) -> Vec<(u8, OutcomeWeights)> {
        let overall = self.model.overall();

        word.distinct_letters()
            .into_iter()
            .map(|letter| {
                let f = overall.get(letter);
                let best = word
                    .positions_of(letter)
                    .iter()
                    .map(|&i| {
                        let weights = OutcomeWeights::new(f, self.model.at(i, letter));
                        debug_assert!(
                            weights.is_well_formed(),
                            "negative outcome weight for '{}' at {i}: {weights:?}",
                            char::from(letter)
                        );
                        weights
                    })
                    .reduce(OutcomeWeights::max)
                    .unwrap_or_else(|| OutcomeWeights::new(f, 0.0));
                (letter, best)
            })
            .collect()
    }
}

impl Scorer for PositionalInformationScorer<'_> {
    fn score(&self, word: &Word) -> f64 {
        let total: f64 = self
            .letter_weights(word)
            .iter()
            .map(|(_, weights)| weights.total())
            .sum();

        total / word.len() as f64
    }

    fn word_length(&self) -> Option<usize> {
        Some(self.model.word_length())
    }
}
