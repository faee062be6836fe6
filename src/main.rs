//! Wordle Scorer - CLI
//!
//! Ranks guesses by letter-frequency information and narrows the word list
//! from `+!-` feedback.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use wordle_scorer::{
    commands::{ScoreConfig, analyze_word, replay},
    core::Corpus,
    filter::{Round, filter_rounds},
    output::{print_analysis_result, print_round_report, print_words},
    scoring::ScorerKind,
    wordlists::read_words,
};

#[derive(Parser)]
#[command(
    name = "wordle_scorer",
    about = "Letter-frequency guess scoring and feedback filtering for Wordle-style puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scorer: positional (default), information, likelihood
    #[arg(short, long, global = true, default_value = "positional")]
    scorer: String,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "ospd.txt")]
    wordlist: PathBuf,

    /// Word length; words of other lengths are skipped
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Number of entries shown per ranking
    #[arg(short = 'n', long, global = true, default_value_t = 5)]
    limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank guesses before and after each round (default)
    Score {
        /// Rounds of feedback, e.g. rates:-!--- (+ correct, ! present, - absent)
        #[arg(value_name = "GUESS:FEEDBACK")]
        rounds: Vec<Round>,
    },

    /// Print the words consistent with all rounds
    Filter {
        #[arg(value_name = "GUESS:FEEDBACK")]
        rounds: Vec<Round>,
    },

    /// Show every score of one word against the remaining words
    Analyze {
        /// Word to analyze
        word: String,

        #[arg(value_name = "GUESS:FEEDBACK")]
        rounds: Vec<Round>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let corpus = read_words(&cli.wordlist, cli.length)?;
    if corpus.is_empty() {
        bail!(
            "no {}-letter words in {}",
            cli.length,
            cli.wordlist.display()
        );
    }

    let config = ScoreConfig::new(cli.length)
        .with_scorer(ScorerKind::from_name(&cli.scorer))
        .with_limit(cli.limit);

    let command = cli
        .command
        .unwrap_or(Commands::Score { rounds: Vec::new() });

    match command {
        Commands::Score { rounds } => run_score_command(&corpus, &rounds, &config),
        Commands::Filter { rounds } => run_filter_command(&corpus, &rounds),
        Commands::Analyze { word, rounds } => run_analyze_command(&word, &corpus, &rounds),
    }
}

fn run_score_command(corpus: &Corpus, rounds: &[Round], config: &ScoreConfig) -> Result<()> {
    println!("Scorer: {}\n", config.scorer.name());
    for report in replay(corpus, rounds, config)? {
        print_round_report(&report, config.limit);
    }
    Ok(())
}

fn run_filter_command(corpus: &Corpus, rounds: &[Round]) -> Result<()> {
    let remaining = filter_rounds(corpus, rounds)?;
    print_words(&remaining);
    Ok(())
}

fn run_analyze_command(word: &str, corpus: &Corpus, rounds: &[Round]) -> Result<()> {
    let remaining = filter_rounds(corpus, rounds)?;
    if remaining.is_empty() {
        warn!("no candidates remain after {} rounds", rounds.len());
    }
    let result = analyze_word(word, &remaining)?;
    print_analysis_result(&result);
    Ok(())
}
