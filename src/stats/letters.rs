//! Letter probability tables

use rustc_hash::FxHashMap;

/// Probability per letter, missing letters read as 0
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterScores(FxHashMap<u8, f64>);

impl LetterScores {
    /// Normalize raw occurrence counts by `norm` (the corpus size)
    ///
    /// Callers guarantee `norm > 0`; the frequency models reject empty corpora first.
    #[must_use]
    pub fn normalize(counts: &FxHashMap<u8, usize>, norm: usize) -> Self {
        debug_assert!(norm > 0, "normalizing by an empty corpus");
        let norm = norm as f64;
        Self(
            counts
                .iter()
                .map(|(&letter, &count)| (letter, count as f64 / norm))
                .collect(),
        )
    }

    /// Build directly from letter/probability pairs
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, f64)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Probability of `letter`, 0.0 when it was never counted
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        self.0.get(&letter).copied().unwrap_or(0.0)
    }

    /// Letters with a recorded probability
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.keys().copied()
    }

    /// Letters by descending probability, ties broken alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, f64)> {
        let mut items: Vec<(u8, f64)> = self.0.iter().map(|(&l, &p)| (l, p)).collect();
        items.sort_by(|(l1, p1), (l2, p2)| p2.total_cmp(p1).then(l1.cmp(l2)));
        items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_divides_by_norm() {
        let mut counts = FxHashMap::default();
        counts.insert(b'a', 3);
        counts.insert(b'b', 1);

        let scores = LetterScores::normalize(&counts, 4);
        assert!((scores.get(b'a') - 0.75).abs() < 1e-12);
        assert!((scores.get(b'b') - 0.25).abs() < 1e-12);
    }

    #[test]
    fn missing_letter_is_zero() {
        let scores = LetterScores::default();
        assert!(scores.get(b'z').abs() < f64::EPSILON);
        assert!(scores.is_empty());
    }

    #[test]
    fn ranked_is_descending_with_alphabetical_ties() {
        let scores = LetterScores::from_pairs([(b'c', 0.5), (b'a', 0.5), (b'b', 0.9)]);
        let letters: Vec<u8> = scores.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec![b'b', b'a', b'c']);
    }
}
