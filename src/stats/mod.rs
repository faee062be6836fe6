//! Letter frequency statistics
//!
//! Presence and positional letter probabilities over a corpus. The models are
//! immutable snapshots: build one per round, then hand it to the scorers.

mod letters;
mod model;

pub use letters::LetterScores;
pub use model::{LetterFrequencyModel, MODEL_TOLERANCE, PositionalFrequencyModel};
