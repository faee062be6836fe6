//! Formatting utilities for terminal output

use crate::scoring::ScoredWord;

/// Format one ranked entry as `word: 0.00`
#[must_use]
pub fn format_item(item: &ScoredWord) -> String {
    format!("{}: {:.2}", item.word, item.score)
}

/// Join the first `limit` items, marking truncation with `...`
///
/// Returns `<none>` for an empty list.
///
/// # Examples
/// ```
/// use wordle_scorer::output::formatters::format_items;
///
/// assert_eq!(format_items(&["a", "b", "c"], 2, |s| s.to_string()), "a, b, ...");
/// assert_eq!(format_items::<&str>(&[], 5, |s| s.to_string()), "<none>");
/// ```
pub fn format_items<T>(items: &[T], limit: usize, format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return "<none>".to_string();
    }

    let mut result = items
        .iter()
        .take(limit)
        .map(format)
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > limit {
        result.push_str(", ...");
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a per-letter information weight as a bar
///
/// A single Bernoulli weight peaks at 0.25.
#[must_use]
pub fn weight_bar(weight: f64, width: usize) -> String {
    create_progress_bar(weight, 0.25, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn entry(text: &str, score: f64) -> ScoredWord {
        ScoredWord::new(Word::new(text).unwrap(), score)
    }

    #[test]
    fn format_item_two_decimals() {
        assert_eq!(format_item(&entry("crane", 0.4567)), "crane: 0.46");
    }

    #[test]
    fn format_items_truncates() {
        let items = vec![
            entry("crane", 0.9),
            entry("slate", 0.8),
            entry("irate", 0.7),
        ];
        assert_eq!(
            format_items(&items, 2, format_item),
            "crane: 0.90, slate: 0.80, ..."
        );
        assert_eq!(
            format_items(&items, 3, format_item),
            "crane: 0.90, slate: 0.80, irate: 0.70"
        );
    }

    #[test]
    fn format_items_empty() {
        let items: Vec<ScoredWord> = Vec::new();
        assert_eq!(format_items(&items, 5, format_item), "<none>");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn weight_bar_half() {
        let bar = weight_bar(0.125, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
