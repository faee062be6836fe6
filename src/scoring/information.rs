//! Position-agnostic information scorer
//!
//! Scores a guess by how much each of its letters splits the corpus, using only
//! presence probabilities. Duplicate letters carry no extra information here.

use super::Scorer;
use crate::core::Word;
use crate::stats::LetterFrequencyModel;

/// Expected-information scorer over presence probabilities
///
/// For each distinct letter with presence probability `f`:
/// - gray outcome (letter rejected): `f·(1−f)`
/// - yellow-or-green outcome (letter confirmed): `f·(1−f)`
///
/// The sum runs over distinct letters but is divided by the full guess length,
/// so guesses with repeated letters are penalized.
#[derive(Debug, Clone, Copy)]
pub struct InformationScorer<'a> {
    model: &'a LetterFrequencyModel,
}

impl<'a> InformationScorer<'a> {
    #[must_use]
    pub const fn new(model: &'a LetterFrequencyModel) -> Self {
        Self { model }
    }
}

impl Scorer for InformationScorer<'_> {
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Corpus, Word};
    /// use wordle_scorer::scoring::{InformationScorer, Scorer};
    /// use wordle_scorer::stats::LetterFrequencyModel;
    ///
    /// let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
    /// let model = LetterFrequencyModel::build(&corpus).unwrap();
    /// let scorer = InformationScorer::new(&model);
    ///
    /// let score = scorer.score(&Word::new("train").unwrap());
    /// assert!(score > 0.0);
    /// ```
    fn score(&self, guess: &Word) -> f64 {
        let overall = self.model.overall();
        let mut result = 0.0;

        for letter in guess.distinct_letters() {
            let f = overall.get(letter);

            // gray: the letter is absent
            let gray = (1.0 - f) * f;
            debug_assert!(gray >= 0.0);

            // yellow or green: the letter is present
            let present = f * (1.0 - f);
            debug_assert!(present >= 0.0);

            result += gray + present;
        }

        result / guess.len() as f64
    }
}
