// Trend detector trait — swap-ready abstraction.
//
// Like `Tagger`, this lets a smarter ranking (TF-IDF against a background
// corpus, time-windowed velocity) replace raw frequency counting without
// changing the web or CLI layers.

use super::analyzer::TrendEntry;

/// Trait for ranking the trending keywords of a corpus.
pub trait TrendDetector: Send + Sync {
    /// Return ranked trend entries, highest score first. Empty input yields
    /// an empty list.
    fn analyze(&self, corpus: &str) -> Vec<TrendEntry>;
}
