//! Word list loading
//!
//! Reads corpus files for the CLI. The scoring and filtering modules never
//! touch the filesystem; they take a [`Corpus`](crate::core::Corpus).

pub mod loader;

pub use loader::{LoadError, read_words, words_from_lines};
