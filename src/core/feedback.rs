//! Feedback symbols and patterns
//!
//! Feedback is written one symbol per letter of the guess:
//! - `+` = Correct (letter in this position)
//! - `!` = Present (letter elsewhere in the word)
//! - `-` = Absent (letter not in the word, or no further occurrences)

use super::{ScoreError, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Parse a single feedback symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Correct),
            '!' => Some(Self::Present),
            '-' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The symbol used for this feedback in guess/feedback strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '+',
            Self::Present => '!',
            Self::Absent => '-',
        }
    }
}

/// Feedback for every letter of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    /// Create a pattern from individual feedback values
    #[must_use]
    pub const fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// All-correct pattern of the given length
    #[must_use]
    pub fn all_correct(length: usize) -> Self {
        Self(vec![Feedback::Correct; length])
    }

    /// Parse a `+!-` string given for `guess`
    ///
    /// # Errors
    /// - `LengthMismatch` if the symbol count differs from the guess length
    /// - `InvalidFeedbackSymbol` naming the guess and the first bad position
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Feedback, FeedbackPattern, Word};
    ///
    /// let guess = Word::new("rates").unwrap();
    /// let pattern = FeedbackPattern::parse(&guess, "-!---").unwrap();
    /// assert_eq!(pattern.feedbacks()[1], Feedback::Present);
    /// assert!(FeedbackPattern::parse(&guess, "-?---").is_err());
    /// ```
    pub fn parse(guess: &Word, symbols: &str) -> Result<Self, ScoreError> {
        let found = symbols.chars().count();
        if found != guess.len() {
            return Err(ScoreError::LengthMismatch {
                expected: guess.len(),
                found,
            });
        }

        symbols
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Feedback::from_symbol(symbol).ok_or_else(|| ScoreError::InvalidFeedbackSymbol {
                    guess: guess.text().to_string(),
                    index,
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Feedback values in position order
    #[inline]
    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&fb| fb == Feedback::Correct)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in &self.0 {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}
