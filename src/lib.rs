//! Wordle Scorer
//!
//! Scores guesses for a fixed-length word-deduction puzzle from letter
//! frequencies, and narrows the candidate list from `+!-` feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scorer::core::{Corpus, Word};
//! use wordle_scorer::filter::filter_words;
//! use wordle_scorer::scoring::{PositionalInformationScorer, score_many};
//! use wordle_scorer::stats::PositionalFrequencyModel;
//!
//! let corpus = Corpus::parse(5, &["train", "crane", "trace", "truck"]).unwrap();
//!
//! // Rank guesses against the current candidates
//! let model = PositionalFrequencyModel::build(&corpus).unwrap();
//! let scorer = PositionalInformationScorer::new(&model).unwrap();
//! let ranked = score_many(&scorer, &corpus).unwrap();
//! println!("Best guess: {}", ranked[0].word);
//!
//! // Narrow the candidates with feedback: + correct, ! present, - absent
//! let guess = Word::new("crane").unwrap();
//! let remaining = filter_words(&corpus, &guess, "!++-+").unwrap();
//! assert_eq!(remaining[0].text(), "trace");
//! ```

// Core domain types
pub mod core;

// Letter frequency models
pub mod stats;

// Guess scorers
pub mod scoring;

// Feedback constraints
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
