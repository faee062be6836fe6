//! Command implementations

pub mod analyze;
pub mod score;

pub use analyze::{AnalysisResult, analyze_word};
pub use score::{RoundReport, ScoreConfig, replay, score_round, score_words};
