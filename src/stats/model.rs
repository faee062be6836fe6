//! Letter frequency models built from a corpus

use super::LetterScores;
use crate::core::{Corpus, ScoreError};
use log::debug;
use rustc_hash::FxHashMap;

/// Slack allowed for floating-point noise when checking model invariants
pub const MODEL_TOLERANCE: f64 = 1e-9;

/// Presence probability of each letter across a corpus
///
/// `overall[c]` is the probability that letter `c` appears anywhere in a word.
/// Repeats within a word count once, so the values need not sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencyModel {
    overall: LetterScores,
    corpus_size: usize,
}

impl LetterFrequencyModel {
    /// Count the distinct letters of every word and normalize by corpus size
    ///
    /// # Errors
    /// Returns `EmptyCorpus` when the corpus has no words.
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Corpus;
    /// use wordle_scorer::stats::LetterFrequencyModel;
    ///
    /// let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
    /// let model = LetterFrequencyModel::build(&corpus).unwrap();
    /// assert!((model.overall().get(b't') - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn build(corpus: &Corpus) -> Result<Self, ScoreError> {
        if corpus.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }

        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in corpus.iter() {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        debug!(
            "letter model: {} words, {} distinct letters",
            corpus.len(),
            counts.len()
        );

        Ok(Self {
            overall: LetterScores::normalize(&counts, corpus.len()),
            corpus_size: corpus.len(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn overall(&self) -> &LetterScores {
        &self.overall
    }

    /// Number of words the model was built from
    #[inline]
    #[must_use]
    pub const fn corpus_size(&self) -> usize {
        self.corpus_size
    }
}

/// Overall presence probabilities plus per-position letter probabilities
///
/// `positional[i][c]` is the probability that letter `c` sits at position `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalFrequencyModel {
    letters: LetterFrequencyModel,
    positional: Vec<LetterScores>,
}

impl PositionalFrequencyModel {
    /// Build overall and positional tables from one pass over the corpus
    ///
    /// The word length comes from the corpus, which guarantees every word has it.
    ///
    /// # Errors
    /// Returns `EmptyCorpus` when the corpus has no words.
    pub fn build(corpus: &Corpus) -> Result<Self, ScoreError> {
        let letters = LetterFrequencyModel::build(corpus)?;

        let mut counters: Vec<FxHashMap<u8, usize>> =
            vec![FxHashMap::default(); corpus.word_length()];
        for word in corpus.iter() {
            for (counter, &letter) in counters.iter_mut().zip(word.chars()) {
                *counter.entry(letter).or_insert(0) += 1;
            }
        }

        debug!(
            "positional model: {} words of length {}",
            corpus.len(),
            corpus.word_length()
        );

        let positional = counters
            .iter()
            .map(|counter| LetterScores::normalize(counter, corpus.len()))
            .collect();

        Ok(Self {
            letters,
            positional,
        })
    }

    /// Assemble a model from precomputed tables without validation
    ///
    /// Use [`PositionalFrequencyModel::validate`] before scoring with it.
    #[must_use]
    pub const fn from_parts(letters: LetterFrequencyModel, positional: Vec<LetterScores>) -> Self {
        Self {
            letters,
            positional,
        }
    }

    /// The position-agnostic part of the model
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterFrequencyModel {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn overall(&self) -> &LetterScores {
        self.letters.overall()
    }

    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[LetterScores] {
        &self.positional
    }

    /// Probability of `letter` at `position`, 0.0 past the end of the model
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize, letter: u8) -> f64 {
        self.positional.get(position).map_or(0.0, |s| s.get(letter))
    }

    /// Word length the model was built for
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positional.len()
    }

    /// Check `0 <= positional[i][c] <= overall[c] <= 1` for every table entry
    ///
    /// # Errors
    /// Returns `MalformedModel` for the first violating letter.
    pub fn validate(&self) -> Result<(), ScoreError> {
        for letter in self.overall().letters() {
            let f = self.overall().get(letter);
            if !(-MODEL_TOLERANCE..=1.0 + MODEL_TOLERANCE).contains(&f) {
                return Err(malformed(letter, 0, format!("overall {f} outside [0, 1]")));
            }
        }

        for (position, scores) in self.positional.iter().enumerate() {
            for letter in scores.letters() {
                let p = scores.get(letter);
                let f = self.overall().get(letter);
                if !p.is_finite() {
                    return Err(malformed(letter, position, format!("positional {p} not finite")));
                }
                if p < -MODEL_TOLERANCE {
                    return Err(malformed(letter, position, format!("positional {p} < 0")));
                }
                if p > f + MODEL_TOLERANCE {
                    return Err(malformed(
                        letter,
                        position,
                        format!("positional {p} exceeds overall {f}"),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn malformed(letter: u8, position: usize, detail: String) -> ScoreError {
    ScoreError::MalformedModel {
        letter: char::from(letter),
        position,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::parse(words[0].len(), words).unwrap()
    }

    #[test]
    fn overall_counts_presence_not_occurrences() {
        let model = LetterFrequencyModel::build(&corpus(&["speed", "crane"])).unwrap();
        // "speed" has two e's but contributes once
        assert!((model.overall().get(b'e') - 1.0).abs() < 1e-12);
        assert!((model.overall().get(b's') - 0.5).abs() < 1e-12);
        assert!(model.overall().get(b'z').abs() < f64::EPSILON);
        assert_eq!(model.corpus_size(), 2);
    }

    #[test]
    fn overall_probability_for_train_example() {
        let model = LetterFrequencyModel::build(&corpus(&["train", "crane", "trace"])).unwrap();
        assert!((model.overall().get(b't') - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.overall().get(b'r') - 1.0).abs() < 1e-12);
        assert!((model.overall().get(b'i') - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let empty = Corpus::new(5, Vec::new()).unwrap();
        assert_eq!(
            LetterFrequencyModel::build(&empty),
            Err(ScoreError::EmptyCorpus)
        );
        assert_eq!(
            PositionalFrequencyModel::build(&empty),
            Err(ScoreError::EmptyCorpus)
        );
    }

    #[test]
    fn positional_probabilities() {
        let model = PositionalFrequencyModel::build(&corpus(&["train", "crane", "trace"])).unwrap();
        assert_eq!(model.word_length(), 5);
        assert!((model.at(0, b't') - 2.0 / 3.0).abs() < 1e-12);
        assert!((model.at(0, b'c') - 1.0 / 3.0).abs() < 1e-12);
        assert!((model.at(1, b'r') - 1.0).abs() < 1e-12);
        assert!(model.at(4, b't').abs() < f64::EPSILON);
        assert!(model.at(9, b'a').abs() < f64::EPSILON);
    }

    #[test]
    fn positional_never_exceeds_overall() {
        let model =
            PositionalFrequencyModel::build(&corpus(&["speed", "erase", "geese", "steep", "creep"]))
                .unwrap();

        for (i, scores) in model.positional().iter().enumerate() {
            for letter in scores.letters() {
                let p = model.at(i, letter);
                let f = model.overall().get(letter);
                assert!(p >= 0.0);
                assert!(p <= f + MODEL_TOLERANCE, "{} at {i}", char::from(letter));
                assert!(f <= 1.0 + MODEL_TOLERANCE);
            }
        }
        assert!(model.validate().is_ok());
    }

    #[test]
    fn validate_rejects_positional_above_overall() {
        let letters = LetterFrequencyModel::build(&corpus(&["ab"])).unwrap();
        let positional = vec![
            LetterScores::from_pairs([(b'a', 1.0), (b'z', 0.5)]),
            LetterScores::from_pairs([(b'b', 1.0)]),
        ];
        let model = PositionalFrequencyModel::from_parts(letters, positional);

        assert!(matches!(
            model.validate(),
            Err(ScoreError::MalformedModel {
                letter: 'z',
                position: 0,
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_positional() {
        let letters = LetterFrequencyModel::build(&corpus(&["a"])).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let positional = vec![LetterScores::from_pairs([(b'a', bad)])];
            let model = PositionalFrequencyModel::from_parts(letters.clone(), positional);
            assert!(
                matches!(
                    model.validate(),
                    Err(ScoreError::MalformedModel { letter: 'a', position: 0, .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn validate_rejects_overall_outside_unit_range() {
        for bad in [1.5, -0.5, f64::NAN] {
            let letters = LetterFrequencyModel {
                overall: LetterScores::from_pairs([(b'a', bad)]),
                corpus_size: 1,
            };
            let model = PositionalFrequencyModel::from_parts(letters, Vec::new());
            assert!(
                matches!(
                    model.validate(),
                    Err(ScoreError::MalformedModel { letter: 'a', .. })
                ),
                "{bad}"
            );
        }
    }
}
