// Frequency-based trend analysis.
//
// Counts countable tokens (see `tokenize`) and ranks them by occurrence.
// Ties keep the order in which words were first seen, so the output is
// fully deterministic for a given corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tokenize;
use super::traits::TrendDetector;

/// Points awarded per occurrence.
pub const SCORE_PER_OCCURRENCE: u64 = 10;

/// Growth percentage reported per occurrence.
pub const GROWTH_PER_OCCURRENCE: u64 = 2;

/// Maximum number of trends returned.
pub const DEFAULT_TOP_K: usize = 5;

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub keyword: String,
    pub score: u64,
    /// Display string such as "+6%".
    pub growth: String,
}

impl TrendEntry {
    fn from_count(keyword: String, count: u64) -> Self {
        Self {
            keyword,
            score: count * SCORE_PER_OCCURRENCE,
            growth: format!("+{}%", count * GROWTH_PER_OCCURRENCE),
        }
    }
}

/// Word-frequency trend ranker.
pub struct TrendAnalyzer {
    /// How many entries to return (at most `DEFAULT_TOP_K`)
    pub top_k: usize,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl TrendAnalyzer {
    pub fn analyze_trends(&self, corpus: &str) -> Vec<TrendEntry> {
        let counts = count_words(corpus);
        let distinct = counts.len();

        let mut ranked = counts;
        // Stable sort: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let trends: Vec<TrendEntry> = ranked
            .into_iter()
            .take(self.top_k.min(DEFAULT_TOP_K))
            .map(|(word, count)| TrendEntry::from_count(word, count))
            .collect();

        debug!(
            distinct_words = distinct,
            trends = trends.len(),
            top_keyword = trends.first().map(|t| t.keyword.as_str()).unwrap_or(""),
            "Ranked trend keywords"
        );

        trends
    }
}

impl TrendDetector for TrendAnalyzer {
    fn analyze(&self, corpus: &str) -> Vec<TrendEntry> {
        self.analyze_trends(corpus)
    }
}

/// Count countable words, preserving first-seen order.
fn count_words(corpus: &str) -> Vec<(String, u64)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for word in tokenize::words(corpus) {
        if !tokenize::is_countable(&word) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts
}
