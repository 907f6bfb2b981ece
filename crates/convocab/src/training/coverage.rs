//! # Corpus Coverage
//!
//! How much of a corpus a truncated vocabulary covers; used to choose
//! a maximum vocabulary size before building.

use core::fmt;

use crate::training::{CountType, StringChunkType, WordCountMap, rank_words};

/// Coverage of the `top_n` most frequent words.
#[derive(Debug, Clone, PartialEq)]
pub struct CoveragePoint {
    /// The number of top-ranked words considered.
    pub top_n: usize,

    /// Occurrences of those words.
    pub covered_words: u64,

    /// Percentage of all word occurrences covered, in ``[0, 100]``.
    pub percentage: f64,
}

/// Word frequency summary of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Total word occurrences.
    pub total_words: u64,

    /// Distinct words.
    pub distinct_words: usize,

    /// The most frequent word and its count.
    pub most_frequent: Option<(String, u64)>,

    /// Coverage at each requested size, in request order.
    pub points: Vec<CoveragePoint>,
}

impl CoverageReport {
    /// Summarize word counts.
    ///
    /// Words are ranked as in [`rank_words`]. Every counted word takes part,
    /// including corpus words that spell a reserved symbol.
    ///
    /// ## Arguments
    /// * `counts` - the word counts.
    /// * `top_ns` - the vocabulary sizes to report coverage for.
    pub fn from_counts<K, C>(
        counts: &WordCountMap<K, C>,
        top_ns: &[usize],
    ) -> Self
    where
        K: StringChunkType,
        C: CountType,
    {
        let ranked: Vec<(&str, u64)> = rank_words(counts)
            .into_iter()
            .map(|(k, c)| (k.as_ref(), c.to_u64().unwrap_or(u64::MAX)))
            .collect();

        let mut cumulative: Vec<u64> = Vec::with_capacity(ranked.len());
        let mut running: u64 = 0;
        for &(_, count) in &ranked {
            running = running.saturating_add(count);
            cumulative.push(running);
        }
        let total_words = running;

        let points = top_ns
            .iter()
            .map(|&top_n| {
                let covered_words = match top_n.min(cumulative.len()) {
                    0 => 0,
                    n => cumulative[n - 1],
                };
                CoveragePoint {
                    top_n,
                    covered_words,
                    percentage: percentage(covered_words, total_words),
                }
            })
            .collect();

        Self {
            total_words,
            distinct_words: ranked.len(),
            most_frequent: ranked.first().map(|&(w, c)| (w.to_string(), c)),
            points,
        }
    }
}

fn percentage(
    part: u64,
    total: u64,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}

impl fmt::Display for CoverageReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "total words: {}", self.total_words)?;
        writeln!(f, "distinct words: {}", self.distinct_words)?;
        if let Some((word, count)) = &self.most_frequent {
            writeln!(f, "most frequent: {word:?} ({count})")?;
        }
        for point in &self.points {
            writeln!(
                f,
                "top {}: {} words, {:.2}%",
                point.top_n, point.covered_words, point.percentage
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hash_map_new;

    fn sample_counts() -> WordCountMap<String, u32> {
        let mut counts = hash_map_new();
        counts.insert("the".to_string(), 6);
        counts.insert("cat".to_string(), 2);
        counts.insert("sat".to_string(), 2);
        counts
    }

    #[test]
    fn test_coverage() {
        let report = CoverageReport::from_counts(&sample_counts(), &[0, 1, 2, 10]);
        assert_eq!(report.total_words, 10);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.most_frequent, Some(("the".to_string(), 6)));

        let covered: Vec<(usize, u64)> = report
            .points
            .iter()
            .map(|p| (p.top_n, p.covered_words))
            .collect();
        assert_eq!(covered, vec![(0, 0), (1, 6), (2, 8), (10, 10)]);
        assert!((report.points[1].percentage - 60.0).abs() < 1e-9);
        assert!((report.points[3].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_coverage() {
        let counts: WordCountMap<String, u32> = hash_map_new();
        let report = CoverageReport::from_counts(&counts, &[5]);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.most_frequent, None);
        assert_eq!(report.points[0].percentage, 0.0);
    }

    #[test]
    fn test_display() {
        let report = CoverageReport::from_counts(&sample_counts(), &[1]);
        let text = report.to_string();
        assert!(text.contains("total words: 10"));
        assert!(text.contains("most frequent: \"the\" (6)"));
        assert!(text.contains("top 1: 6 words, 60.00%"));
    }

    #[test]
    fn test_reserved_spelling_is_counted() {
        let mut counts = sample_counts();
        counts.insert("_UNK".to_string(), 3);

        let report = CoverageReport::from_counts(&counts, &[2]);
        assert_eq!(report.total_words, 13);
        assert_eq!(report.distinct_words, 4);
        assert_eq!(report.points[0].covered_words, 9);
    }
}
