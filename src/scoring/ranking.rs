//! Ranked scoring of word lists

use super::Scorer;
use crate::core::{ScoreError, Word};
use rayon::prelude::*;

/// A word with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

impl ScoredWord {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }
}

/// Score every word and sort descending by score
///
/// Scoring runs in parallel; the sort is stable, so equal scores keep the
/// order in which the words were given.
///
/// # Errors
/// Returns `LengthMismatch` if a word's length differs from the length of a
/// positional scorer's model.
///
/// # Examples
/// ```
/// use wordle_scorer::core::Corpus;
/// use wordle_scorer::scoring::{LikelihoodScorer, score_many};
/// use wordle_scorer::stats::PositionalFrequencyModel;
///
/// let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
/// let model = PositionalFrequencyModel::build(&corpus).unwrap();
/// let ranked = score_many(&LikelihoodScorer::new(&model), &corpus).unwrap();
///
/// assert_eq!(ranked.len(), 3);
/// assert!(ranked[0].score >= ranked[1].score);
/// ```
pub fn score_many<S>(scorer: &S, words: &[Word]) -> Result<Vec<ScoredWord>, ScoreError>
where
    S: Scorer + ?Sized,
{
    if let Some(length) = scorer.word_length()
        && let Some(word) = words.iter().find(|w| w.len() != length)
    {
        return Err(ScoreError::LengthMismatch {
            expected: length,
            found: word.len(),
        });
    }

    let mut ranked: Vec<ScoredWord> = words
        .par_iter()
        .map(|word| ScoredWord::new(word.clone(), scorer.score(word)))
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(ranked)
}

/// Drop entries scoring at or below `epsilon`, keeping the ranking order
#[must_use]
pub fn remove_zeroes(ranked: Vec<ScoredWord>, epsilon: f64) -> Vec<ScoredWord> {
    ranked
        .into_iter()
        .filter(|entry| entry.score > epsilon)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores words by their first letter's alphabet index
    struct FirstLetter;

    impl Scorer for FirstLetter {
        fn score(&self, word: &Word) -> f64 {
            f64::from(word.char_at(0) - b'a')
        }
    }

    struct FixedLength(usize);

    impl Scorer for FixedLength {
        fn score(&self, _word: &Word) -> f64 {
            1.0
        }

        fn word_length(&self) -> Option<usize> {
            Some(self.0)
        }
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts(ranked: &[ScoredWord]) -> Vec<&str> {
        ranked.iter().map(|e| e.word.text()).collect()
    }

    #[test]
    fn sorted_descending() {
        let ranked = score_many(&FirstLetter, &words(&["bat", "cat", "ant"])).unwrap();
        assert_eq!(texts(&ranked), vec!["cat", "bat", "ant"]);
        assert!((ranked[0].score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked =
            score_many(&FirstLetter, &words(&["bog", "ant", "bat", "bee", "cat"])).unwrap();
        assert_eq!(texts(&ranked), vec!["cat", "bog", "bat", "bee", "ant"]);
    }

    #[test]
    fn empty_input_gives_empty_ranking() {
        let ranked = score_many(&FirstLetter, &[]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn length_mismatch_against_positional_scorer() {
        let result = score_many(&FixedLength(5), &words(&["crane", "cranes"]));
        assert_eq!(
            result,
            Err(ScoreError::LengthMismatch {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn remove_zeroes_drops_low_scores() {
        let ranked = score_many(&FirstLetter, &words(&["cat", "bat", "ant"])).unwrap();

        let kept = remove_zeroes(ranked.clone(), 0.0);
        assert_eq!(texts(&kept), vec!["cat", "bat"]);

        let kept = remove_zeroes(ranked, 1.0);
        assert_eq!(texts(&kept), vec!["cat"]);
    }
}
