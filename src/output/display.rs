//! Display functions for command results

use super::formatters::{format_item, format_items, weight_bar};
use crate::commands::{AnalysisResult, RoundReport};
use crate::core::Word;
use colored::Colorize;

/// Print the rankings for one game state
pub fn print_round_report(report: &RoundReport, limit: usize) {
    if let Some(round) = &report.round {
        println!(
            "{} {}",
            round.guess.text().to_uppercase().bright_yellow().bold(),
            round.feedback.to_string().cyan()
        );
        if round.feedback.is_perfect() {
            println!("{}", "🎉 Solved!".bright_green().bold());
        }
    }

    println!(
        "{} possible words ({})",
        report.possible_count.to_string().bold(),
        format_items(&report.possible, limit, |e| e.word.text().to_string())
    );
    println!(
        "{} = {}",
        "Moves".bright_cyan(),
        format_items(&report.moves, limit, format_item)
    );
    println!(
        "{} = {}",
        "Match".bright_cyan(),
        format_items(&report.matches, limit, format_item)
    );
    println!();
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible words:", result.total_candidates);
    println!(
        "   Information: {}",
        format!("{:.4}", result.information).bright_yellow()
    );
    println!(
        "   Positional:  {}",
        format!("{:.4}", result.positional).bright_yellow()
    );
    println!(
        "   Likelihood:  {}",
        format!("{:.6}", result.likelihood).bright_yellow()
    );

    println!("\n🔤 {}", "Per letter (gray / yellow / green):".bright_cyan().bold());
    for (letter, weights) in &result.letters {
        println!(
            "   {}  [{}] [{}] [{}]",
            letter.to_ascii_uppercase(),
            weight_bar(weights.gray, 10).bright_black(),
            weight_bar(weights.yellow, 10).yellow(),
            weight_bar(weights.green, 10).green()
        );
    }

    println!(
        "\n📊 {} {}",
        "Letter frequencies:".bright_cyan().bold(),
        format_items(&result.letter_frequencies, 10, |(letter, p)| format!(
            "{letter}: {p:.2}"
        ))
    );
}

/// Print remaining words, one per line
pub fn print_words(words: &[Word]) {
    if words.is_empty() {
        println!("{}", "❌ No candidates remain! The feedback may be incorrect.".red());
        return;
    }
    for word in words {
        println!("{word}");
    }
    println!("\n{} words", words.len().to_string().bold());
}
