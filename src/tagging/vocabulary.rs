// Fixed catalog vocabularies.
//
// Iteration order matters: the extractor overwrites a field on every match,
// so when several terms of one vocabulary appear in a description the one
// listed last here wins.

pub const CATEGORIES: &[&str] = &[
    "Apparel",
    "Footwear",
    "Accessories",
    "Electronics",
    "Home Decor",
];

/// Only the last word of each color (e.g. "black") is looked up in the text.
pub const COLORS: &[&str] = &[
    "Midnight Black",
    "Emerald Green",
    "Crimson Red",
    "Ocean Blue",
    "Sand Beige",
];

pub const STYLES: &[&str] = &["Minimalist", "Vintage", "Cyberpunk", "Bohemian", "Athleisure"];

pub const OCCASIONS: &[&str] = &["Formal", "Casual", "Workwear", "Party", "Outdoor"];

pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_COLOR: &str = "Neutral";
pub const DEFAULT_STYLE: &str = "Modern";
pub const DEFAULT_OCCASION: &str = "Versatile";

/// Reported on every tag set. Not derived from the match count.
pub const CONFIDENCE: f64 = 0.92;

/// The lower-cased token a vocabulary term is matched by.
///
/// Colors match on their final word; every other vocabulary matches on the
/// whole lower-cased term.
pub fn match_key(term: &str, last_word_only: bool) -> String {
    let lower = term.to_lowercase();
    if last_word_only {
        lower
            .split_whitespace()
            .next_back()
            .map(str::to_string)
            .unwrap_or(lower)
    } else {
        lower
    }
}
