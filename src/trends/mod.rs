// Trend analysis — keyword frequency ranking over a text corpus.

pub mod analyzer;
pub mod tokenize;
pub mod traits;
