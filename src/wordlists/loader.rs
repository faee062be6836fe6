//! Word list loading utilities
//!
//! Turns a one-word-per-line file into a fixed-length corpus.

use crate::core::{Corpus, ScoreError, Word};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for corpus loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Corpus(#[from] ScoreError),
}

/// Load the words of exactly `length` letters from a file
///
/// Lines are trimmed; blank lines, other lengths and non-alphabetic entries are
/// skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_scorer::wordlists::read_words;
///
/// let corpus = read_words("ospd.txt", 5).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn read_words<P: AsRef<Path>>(path: P, length: usize) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let corpus = words_from_lines(content.lines(), length)?;

    info!(
        "loaded {} words of length {length} from {}",
        corpus.len(),
        path.display()
    );
    Ok(corpus)
}

/// Convert lines of text into a corpus of `length`-letter words
///
/// # Errors
///
/// Never fails in practice: every kept word already has `length` letters.
///
/// # Examples
/// ```
/// use wordle_scorer::wordlists::words_from_lines;
///
/// let corpus = words_from_lines(["crane", "cranes", " SLATE "], 5).unwrap();
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus[1].text(), "slate");
/// ```
pub fn words_from_lines<'a, I>(lines: I, length: usize) -> Result<Corpus, ScoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let words = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::with_length(trimmed, length) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!("skipping '{trimmed}': {e}");
                    None
                }
            }
        })
        .collect();

    Corpus::new(length, words)
}
