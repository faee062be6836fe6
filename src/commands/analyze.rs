//! Word analysis command
//!
//! Scores one word with every scorer and breaks the positional score down by letter.

use crate::core::{Corpus, ScoreError, Word};
use crate::scoring::{
    InformationScorer, LikelihoodScorer, OutcomeWeights, PositionalInformationScorer, Scorer,
};
use crate::stats::PositionalFrequencyModel;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub information: f64,
    pub positional: f64,
    pub likelihood: f64,
    /// Best gray/yellow/green weights per distinct letter
    pub letters: Vec<(char, OutcomeWeights)>,
    /// Presence probability of every letter in the candidates, highest first
    pub letter_frequencies: Vec<(char, f64)>,
    pub total_candidates: usize,
}

/// Analyze a word against the possible words
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or its length differs from the corpus word length
/// - No words are possible
pub fn analyze_word(word: &str, candidates: &Corpus) -> Result<AnalysisResult, ScoreError> {
    let word_obj = Word::with_length(word, candidates.word_length())?;

    let model = PositionalFrequencyModel::build(candidates)?;
    let positional_scorer = PositionalInformationScorer::new(&model)?;

    let letters = positional_scorer
        .letter_weights(&word_obj)
        .into_iter()
        .map(|(letter, weights)| (char::from(letter), weights))
        .collect();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        information: InformationScorer::new(model.letters()).score(&word_obj),
        positional: positional_scorer.score(&word_obj),
        likelihood: LikelihoodScorer::new(&model).score(&word_obj),
        letters,
        letter_frequencies: model
            .overall()
            .ranked()
            .into_iter()
            .map(|(letter, p)| (char::from(letter), p))
            .collect(),
        total_candidates: model.letters().corpus_size(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::parse(5, &["train", "crane", "trace", "speed", "geese"]).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("TRACE", &corpus()).unwrap();

        assert_eq!(result.word, "trace");
        assert_eq!(result.total_candidates, 5);
        assert!(result.information > 0.0);
        assert!(result.positional > 0.0);
        assert!(result.likelihood > 0.0 && result.likelihood <= 1.0);
        assert_eq!(result.letters.len(), 5);
        // e in four of five words, then a and r tied at three
        let top: Vec<char> = result.letter_frequencies.iter().take(3).map(|(c, _)| *c).collect();
        assert_eq!(top, vec!['e', 'a', 'r']);
        assert!((result.letter_frequencies[0].1 - 0.8).abs() < 1e-12);
    }

    #[test]
    fn analyze_repeated_letters_lists_each_once() {
        let result = analyze_word("geese", &corpus()).unwrap();
        let letters: Vec<char> = result.letters.iter().map(|(c, _)| *c).collect();
        assert_eq!(letters, vec!['g', 'e', 's']);
    }

    #[test]
    fn analyze_invalid_word() {
        assert!(matches!(
            analyze_word("cranes", &corpus()),
            Err(ScoreError::InvalidWord(_))
        ));
        assert!(analyze_word("cr4ne", &corpus()).is_err());
    }

    #[test]
    fn analyze_without_candidates() {
        let empty = Corpus::new(5, Vec::new()).unwrap();
        assert!(matches!(
            analyze_word("crane", &empty),
            Err(ScoreError::EmptyCorpus)
        ));
    }
}
