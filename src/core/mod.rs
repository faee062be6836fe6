//! Core domain types for the word puzzle
//!
//! Words, fixed-length corpora, feedback patterns and the shared error types.
//! Nothing here knows about letter statistics or scoring.

mod corpus;
mod error;
mod feedback;
mod word;

pub use corpus::Corpus;
pub use error::{ScoreError, WordError};
pub use feedback::{Feedback, FeedbackPattern};
pub use word::Word;
