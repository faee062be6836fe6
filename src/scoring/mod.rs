//! Guess scoring
//!
//! Three independent scorers read a frequency model snapshot:
//! - [`InformationScorer`]: presence-only expected information
//! - [`PositionalInformationScorer`]: adds the green/yellow split per position
//! - [`LikelihoodScorer`]: probability that the word is the secret
//!
//! Callers pick one at runtime through [`ScorerKind`] / [`ScorerType`].

mod information;
mod likelihood;
mod positional;
mod ranking;

pub use information::InformationScorer;
pub use likelihood::LikelihoodScorer;
pub use positional::{OutcomeWeights, PositionalInformationScorer};
pub use ranking::{ScoredWord, remove_zeroes, score_many};

use crate::core::{ScoreError, Word};
use crate::stats::PositionalFrequencyModel;

/// Something that assigns a score to a word
///
/// Scorers only read their model, so they can be shared across threads.
pub trait Scorer: Sync {
    /// Score a single word
    fn score(&self, word: &Word) -> f64;

    /// Score words keeping their input order
    fn score_list(&self, words: &[Word]) -> Vec<f64> {
        words.iter().map(|word| self.score(word)).collect()
    }

    /// Word length the scorer's model was built for, if it depends on one
    fn word_length(&self) -> Option<usize> {
        None
    }
}

/// Names of the available scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    /// Presence-only information
    Information,
    /// Positional information (default)
    #[default]
    Positional,
    /// Likelihood of being the secret
    Likelihood,
}

impl ScorerKind {
    /// Look up a scorer by name
    ///
    /// Supported names: "information", "simple", "positional", "likelihood", "match".
    /// Defaults to positional if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "information" | "simple" => Self::Information,
            "likelihood" | "match" => Self::Likelihood,
            _ => Self::Positional,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Information => "information",
            Self::Positional => "positional",
            Self::Likelihood => "likelihood",
        }
    }
}

/// Enum wrapper for all scorer types
///
/// Allows runtime selection of a scorer while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ScorerType<'a> {
    Information(InformationScorer<'a>),
    Positional(PositionalInformationScorer<'a>),
    Likelihood(LikelihoodScorer<'a>),
}

impl<'a> ScorerType<'a> {
    /// Create the scorer named by `kind` over `model`
    ///
    /// # Errors
    /// Returns `MalformedModel` when the positional scorer rejects the model.
    pub fn new(kind: ScorerKind, model: &'a PositionalFrequencyModel) -> Result<Self, ScoreError> {
        Ok(match kind {
            ScorerKind::Information => Self::Information(InformationScorer::new(model.letters())),
            ScorerKind::Positional => Self::Positional(PositionalInformationScorer::new(model)?),
            ScorerKind::Likelihood => Self::Likelihood(LikelihoodScorer::new(model)),
        })
    }
}

impl Scorer for ScorerType<'_> {
    fn score(&self, word: &Word) -> f64 {
        match self {
            Self::Information(s) => s.score(word),
            Self::Positional(s) => s.score(word),
            Self::Likelihood(s) => s.score(word),
        }
    }

    fn word_length(&self) -> Option<usize> {
        match self {
            Self::Information(s) => s.word_length(),
            Self::Positional(s) => s.word_length(),
            Self::Likelihood(s) => s.word_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;

    #[test]
    fn kind_from_name() {
        assert_eq!(ScorerKind::from_name("information"), ScorerKind::Information);
        assert_eq!(ScorerKind::from_name("likelihood"), ScorerKind::Likelihood);
        assert_eq!(ScorerKind::from_name("match"), ScorerKind::Likelihood);
        assert_eq!(ScorerKind::from_name("bogus"), ScorerKind::Positional);
        assert_eq!(ScorerKind::default(), ScorerKind::Positional);
    }

    #[test]
    fn kind_name_round_trips() {
        for kind in [
            ScorerKind::Information,
            ScorerKind::Positional,
            ScorerKind::Likelihood,
        ] {
            assert_eq!(ScorerKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn scorer_type_dispatches_to_selected_scorer() {
        let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
        let model = PositionalFrequencyModel::build(&corpus).unwrap();
        let word = Word::new("trace").unwrap();

        let direct = LikelihoodScorer::new(&model).score(&word);
        let selected = ScorerType::new(ScorerKind::Likelihood, &model).unwrap();
        assert!((selected.score(&word) - direct).abs() < f64::EPSILON);

        let direct = InformationScorer::new(model.letters()).score(&word);
        let selected = ScorerType::new(ScorerKind::Information, &model).unwrap();
        assert!((selected.score(&word) - direct).abs() < f64::EPSILON);
        assert_eq!(selected.word_length(), None);
    }

    #[test]
    fn score_list_keeps_input_order() {
        let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
        let model = PositionalFrequencyModel::build(&corpus).unwrap();
        let scorer = LikelihoodScorer::new(&model);

        let scores = scorer.score_list(&corpus);
        assert_eq!(scores.len(), 3);
        assert!((scores[1] - scorer.score(&corpus[1])).abs() < f64::EPSILON);
    }
}
