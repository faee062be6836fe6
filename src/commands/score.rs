//! Scoring command
//!
//! Ranks guesses against the words still possible, round by round.

use crate::core::{Corpus, ScoreError, Word};
use crate::filter::{Round, filter_rounds};
use crate::scoring::{
    LikelihoodScorer, ScoredWord, ScorerKind, ScorerType, remove_zeroes, score_many,
};
use crate::stats::PositionalFrequencyModel;
use log::debug;

/// Configuration for scoring rounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreConfig {
    /// Scorer used to rank guesses
    pub scorer: ScorerKind,
    /// Number of entries shown per list
    pub limit: usize,
    /// Likelihood scores at or below this are hidden
    pub match_threshold: f64,
}

impl ScoreConfig {
    /// Default configuration for words of `word_length` letters
    ///
    /// The match threshold is `0.5^word_length`.
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            scorer: ScorerKind::default(),
            limit: 5,
            match_threshold: 0.5_f64.powi(i32::try_from(word_length).unwrap_or(i32::MAX)),
        }
    }

    #[must_use]
    pub const fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = scorer;
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Rankings for one state of the game
pub struct RoundReport {
    /// The round that produced this state, `None` before the first guess
    pub round: Option<Round>,
    pub possible_count: usize,
    /// Possible words ranked by the configured scorer
    pub possible: Vec<ScoredWord>,
    /// All words ranked by the configured scorer, zero scores removed
    pub moves: Vec<ScoredWord>,
    /// Possible words ranked by likelihood, above the match threshold
    pub matches: Vec<ScoredWord>,
}

/// Score `words` with a model built from `possible_words`
///
/// # Errors
///
/// Returns `EmptyCorpus` if no words are possible, `LengthMismatch` if a word's
/// length differs from the corpus word length.
///
/// # Examples
/// ```
/// use wordle_scorer::commands::score_words;
/// use wordle_scorer::core::Corpus;
/// use wordle_scorer::scoring::ScorerKind;
///
/// let corpus = Corpus::parse(5, &["train", "crane", "trace"]).unwrap();
/// let ranked = score_words(&corpus, &corpus, ScorerKind::Likelihood).unwrap();
/// assert_eq!(ranked.len(), 3);
/// ```
pub fn score_words(
    words: &[Word],
    possible_words: &Corpus,
    kind: ScorerKind,
) -> Result<Vec<ScoredWord>, ScoreError> {
    let model = PositionalFrequencyModel::build(possible_words)?;
    let scorer = ScorerType::new(kind, &model)?;
    score_many(&scorer, words)
}

/// Build the report for one game state
///
/// An empty `possible_words` yields a report with empty rankings rather than
/// an error, since no model can be built for it.
///
/// # Errors
///
/// Returns `LengthMismatch` if `all_words` and `possible_words` disagree on word length.
pub fn score_round(
    all_words: &Corpus,
    possible_words: &Corpus,
    config: &ScoreConfig,
) -> Result<RoundReport, ScoreError> {
    if all_words.word_length() != possible_words.word_length() {
        return Err(ScoreError::LengthMismatch {
            expected: possible_words.word_length(),
            found: all_words.word_length(),
        });
    }

    if possible_words.is_empty() {
        return Ok(RoundReport {
            round: None,
            possible_count: 0,
            possible: Vec::new(),
            moves: Vec::new(),
            matches: Vec::new(),
        });
    }

    let model = PositionalFrequencyModel::build(possible_words)?;
    let scorer = ScorerType::new(config.scorer, &model)?;

    let possible = score_many(&scorer, possible_words)?;
    let moves = remove_zeroes(score_many(&scorer, all_words)?, 0.0);
    let matches = remove_zeroes(
        score_many(&LikelihoodScorer::new(&model), possible_words)?,
        config.match_threshold,
    );

    debug!(
        "round: {} possible, {} informative moves, {} likely matches",
        possible_words.len(),
        moves.len(),
        matches.len()
    );

    Ok(RoundReport {
        round: None,
        possible_count: possible_words.len(),
        possible,
        moves,
        matches,
    })
}

/// Report the opening state, then the state after each round
///
/// # Errors
///
/// Returns `LengthMismatch` for a round whose guess length differs from the corpus.
pub fn replay(
    all_words: &Corpus,
    rounds: &[Round],
    config: &ScoreConfig,
) -> Result<Vec<RoundReport>, ScoreError> {
    let mut reports = Vec::with_capacity(rounds.len() + 1);
    reports.push(score_round(all_words, all_words, config)?);

    let mut possible = all_words.clone();
    for round in rounds {
        possible = filter_rounds(&possible, std::slice::from_ref(round))?;
        let mut report = score_round(all_words, &possible, config)?;
        report.round = Some(round.clone());
        reports.push(report);
    }

    Ok(reports)
}
