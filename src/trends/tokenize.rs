// Word tokenization for trend counting.
//
// Tokens are maximal runs of letters, numerics and underscores in the
// lower-cased corpus. Combining marks are not word characters, and every
// numeric category is (superscripts and fractions included). Hyphens and
// apostrophes split words: "vintage-inspired" yields "vintage" and "inspired".

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex"));

/// Words never counted as trends, whatever their frequency.
pub const STOP_WORDS: &[&str] = &["the", "and", "is", "for", "with", "this"];

/// Tokens of this many characters or fewer are dropped.
pub const MAX_SHORT_TOKEN_CHARS: usize = 3;

/// Lower-case `corpus` and split it into word tokens.
pub fn words(corpus: &str) -> Vec<String> {
    let lower = corpus.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether a lower-cased token should be counted.
pub fn is_countable(word: &str) -> bool {
    !STOP_WORDS.contains(&word) && word.chars().count() > MAX_SHORT_TOKEN_CHARS
}
