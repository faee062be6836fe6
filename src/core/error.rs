//! Error types shared by the scoring and filtering modules

use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Errors raised while building models, constraints or rankings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A feedback character outside `{+, !, -}`
    #[error("Unknown response for {guess}: {symbol:?} at position {index}")]
    InvalidFeedbackSymbol {
        guess: String,
        index: usize,
        symbol: char,
    },

    /// A frequency model was requested for zero words
    #[error("Cannot build letter statistics from an empty corpus")]
    EmptyCorpus,

    /// Guess/feedback or corpus words of differing length
    #[error("Length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A frequency table violating `0 <= positional <= overall <= 1`
    #[error("Malformed model for '{letter}' at position {position}: {detail}")]
    MalformedModel {
        letter: char,
        position: usize,
        detail: String,
    },

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// A round argument not shaped like `guess:feedback`
    #[error("Invalid round '{0}', expected guess:feedback (e.g. rates:-!---)")]
    InvalidRound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_error_names_guess_and_position() {
        let err = ScoreError::InvalidFeedbackSymbol {
            guess: "crane".to_string(),
            index: 3,
            symbol: 'x',
        };
        let msg = err.to_string();
        assert!(msg.contains("crane"));
        assert!(msg.contains("position 3"));
    }

    #[test]
    fn word_error_converts_into_score_error() {
        let err: ScoreError = WordError::NonAscii.into();
        assert_eq!(err, ScoreError::InvalidWord(WordError::NonAscii));
        assert_eq!(err.to_string(), "Word must contain only ASCII letters");
    }
}
