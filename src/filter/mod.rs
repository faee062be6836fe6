//! Candidate filtering from guess feedback
//!
//! Each round of feedback becomes a [`Constraint`]; filtering keeps the words
//! that satisfy it, in their original order.

mod constraint;

pub use constraint::Constraint;

use crate::core::{Corpus, FeedbackPattern, ScoreError, Word};
use log::debug;
use std::str::FromStr;

/// Keep the words of `corpus` consistent with `guess` and its `feedback`
///
/// The result is an order-preserving subsequence of the input. Filtering the
/// result again with the same arguments returns it unchanged.
///
/// # Errors
/// - `LengthMismatch` if the guess length differs from the corpus word length
///   or the feedback length differs from the guess length
/// - `InvalidFeedbackSymbol` for a symbol outside `{+, !, -}`
///
/// # Examples
/// ```
/// use wordle_scorer::core::{Corpus, Word};
/// use wordle_scorer::filter::filter_words;
///
/// let corpus = Corpus::parse(5, &["train", "truck", "crane"]).unwrap();
/// let guess = Word::new("train").unwrap();
/// let remaining = filter_words(&corpus, &guess, "++---").unwrap();
///
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "truck");
/// ```
pub fn filter_words(corpus: &Corpus, guess: &Word, feedback: &str) -> Result<Corpus, ScoreError> {
    let constraint = constraint_for(corpus, guess, feedback)?;
    Ok(apply(corpus, &constraint))
}

/// One guess with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

impl Round {
    /// Parse a `guess` and `+!-` feedback string pair
    ///
    /// # Errors
    /// Returns `InvalidWord`, `LengthMismatch` or `InvalidFeedbackSymbol`.
    pub fn new(guess: &str, feedback: &str) -> Result<Self, ScoreError> {
        let guess = Word::new(guess)?;
        let feedback = FeedbackPattern::parse(&guess, feedback)?;
        Ok(Self { guess, feedback })
    }
}

impl FromStr for Round {
    type Err = ScoreError;

    /// Parse `guess:feedback`, e.g. `rates:-!---`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(':')
            .ok_or_else(|| ScoreError::InvalidRound(s.to_string()))?;
        Self::new(guess.trim(), feedback.trim())
    }
}

/// Apply successive rounds of feedback, narrowing the corpus each time
///
/// # Errors
/// Returns `LengthMismatch` for a round whose guess length differs from the
/// corpus word length.
pub fn filter_rounds(corpus: &Corpus, rounds: &[Round]) -> Result<Corpus, ScoreError> {
    let mut remaining = corpus.clone();
    for round in rounds {
        let constraint = Constraint::from_pattern(&round.guess, &round.feedback)?;
        check_length(&remaining, constraint.length())?;
        remaining = apply(&remaining, &constraint);
    }
    Ok(remaining)
}

fn constraint_for(corpus: &Corpus, guess: &Word, feedback: &str) -> Result<Constraint, ScoreError> {
    check_length(corpus, guess.len())?;
    Constraint::build(guess, feedback)
}

fn check_length(corpus: &Corpus, length: usize) -> Result<(), ScoreError> {
    if length == corpus.word_length() {
        Ok(())
    } else {
        Err(ScoreError::LengthMismatch {
            expected: corpus.word_length(),
            found: length,
        })
    }
}

fn apply(corpus: &Corpus, constraint: &Constraint) -> Corpus {
    let remaining = corpus.retain_matching(|word| constraint.matches(word));
    debug!("filter: {} -> {} words", corpus.len(), remaining.len());
    remaining
}
