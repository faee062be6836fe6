//! Constraints derived from one guess and its feedback

use crate::core::{Feedback, FeedbackPattern, ScoreError, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Membership and positional rules learned from one guess
///
/// - absent: letters that must not occur at all
/// - present: letters that must occur somewhere
/// - required: position → letter that must be there (`+`)
/// - forbidden: position → letter that must not be there (`!`, or `-` on a
///   letter confirmed elsewhere in the guess)
/// - confirmed: letter → number of `+`/`!` tags, a lower bound on its count
/// - caps: letters confirmed and also rejected, so they occur exactly as often
///   as they were confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    length: usize,
    absent: FxHashSet<u8>,
    present: FxHashSet<u8>,
    required: FxHashMap<usize, u8>,
    forbidden: FxHashMap<usize, u8>,
    confirmed: FxHashMap<u8, usize>,
    caps: FxHashMap<u8, usize>,
}

impl Constraint {
    /// Build a constraint from a guess and its `+!-` feedback string
    ///
    /// # Errors
    /// - `LengthMismatch` if feedback and guess lengths differ
    /// - `InvalidFeedbackSymbol` for a symbol outside `{+, !, -}`
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Word;
    /// use wordle_scorer::filter::Constraint;
    ///
    /// let guess = Word::new("train").unwrap();
    /// let constraint = Constraint::build(&guess, "++---").unwrap();
    ///
    /// assert!(constraint.matches(&Word::new("trued").unwrap()));
    /// assert!(!constraint.matches(&Word::new("crane").unwrap()));
    /// ```
    pub fn build(guess: &Word, feedback: &str) -> Result<Self, ScoreError> {
        let pattern = FeedbackPattern::parse(guess, feedback)?;
        Self::from_pattern(guess, &pattern)
    }

    /// Build a constraint from an already parsed feedback pattern
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the pattern and guess lengths differ.
    pub fn from_pattern(guess: &Word, pattern: &FeedbackPattern) -> Result<Self, ScoreError> {
        if pattern.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                expected: guess.len(),
                found: pattern.len(),
            });
        }

        let mut constraint = Self {
            length: guess.len(),
            absent: FxHashSet::default(),
            present: FxHashSet::default(),
            required: FxHashMap::default(),
            forbidden: FxHashMap::default(),
            confirmed: FxHashMap::default(),
            caps: FxHashMap::default(),
        };

        // First pass: confirmed letters and how often each was confirmed
        for (i, (&letter, &feedback)) in guess.chars().iter().zip(pattern.feedbacks()).enumerate()
        {
            match feedback {
                Feedback::Correct => {
                    constraint.required.insert(i, letter);
                }
                Feedback::Present => {
                    constraint.forbidden.insert(i, letter);
                }
                Feedback::Absent => continue,
            }
            constraint.present.insert(letter);
            *constraint.confirmed.entry(letter).or_insert(0) += 1;
        }

        // Second pass: rejections, capped when the letter was also confirmed
        for (i, (&letter, &feedback)) in guess.chars().iter().zip(pattern.feedbacks()).enumerate()
        {
            if feedback != Feedback::Absent {
                continue;
            }
            if let Some(&count) = constraint.confirmed.get(&letter) {
                constraint.forbidden.insert(i, letter);
                constraint.caps.insert(letter, count);
            } else {
                constraint.absent.insert(letter);
            }
        }

        Ok(constraint)
    }

    /// Check whether `word` satisfies every rule
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.length {
            return false;
        }
        if self.absent.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }
        if !self.present.iter().all(|&letter| word.has_letter(letter)) {
            return false;
        }
        if self.required.iter().any(|(&i, &letter)| word.char_at(i) != letter) {
            return false;
        }
        if self.forbidden.iter().any(|(&i, &letter)| word.char_at(i) == letter) {
            return false;
        }
        if self
            .confirmed
            .iter()
            .any(|(&letter, &count)| word.count_of(letter) < count)
        {
            return false;
        }
        self.caps
            .iter()
            .all(|(&letter, &cap)| word.count_of(letter) == cap)
    }

    /// Word length this constraint applies to
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    #[must_use]
    pub const fn present(&self) -> &FxHashSet<u8> {
        &self.present
    }

    #[must_use]
    pub const fn required(&self) -> &FxHashMap<usize, u8> {
        &self.required
    }

    #[must_use]
    pub const fn forbidden(&self) -> &FxHashMap<usize, u8> {
        &self.forbidden
    }

    /// Exact counts for letters both confirmed and rejected in the guess
    #[must_use]
    pub const fn caps(&self) -> &FxHashMap<u8, usize> {
        &self.caps
    }
}
