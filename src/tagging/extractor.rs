// Vocabulary-based attribute extraction.
//
// Each of the four catalog fields is filled by a case-insensitive substring
// scan over its vocabulary. There is no scoring: a term either appears in
// the description or it doesn't, and later terms overwrite earlier ones.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Tagger;
use super::vocabulary::{self, match_key};

/// Catalog attributes extracted from one description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    pub category: String,
    pub color: String,
    pub style: String,
    pub occasion: String,
    /// Always `vocabulary::CONFIDENCE`; not a reliability signal.
    pub confidence: f64,
}

impl Default for TagSet {
    fn default() -> Self {
        Self {
            category: vocabulary::DEFAULT_CATEGORY.to_string(),
            color: vocabulary::DEFAULT_COLOR.to_string(),
            style: vocabulary::DEFAULT_STYLE.to_string(),
            occasion: vocabulary::DEFAULT_OCCASION.to_string(),
            confidence: vocabulary::CONFIDENCE,
        }
    }
}

/// Substring matcher over the fixed catalog vocabularies.
pub struct AttributeExtractor {
    pub categories: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub styles: &'static [&'static str],
    pub occasions: &'static [&'static str],
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self {
            categories: vocabulary::CATEGORIES,
            colors: vocabulary::COLORS,
            styles: vocabulary::STYLES,
            occasions: vocabulary::OCCASIONS,
        }
    }
}

impl AttributeExtractor {
    pub fn extract_tags(&self, text: &str) -> TagSet {
        let text_lower = text.to_lowercase();
        let mut tags = TagSet::default();

        if let Some(cat) = last_match(self.categories, &text_lower, false) {
            tags.category = cat.to_string();
        }
        if let Some(col) = last_match(self.colors, &text_lower, true) {
            tags.color = col.to_string();
        }
        if let Some(sty) = last_match(self.styles, &text_lower, false) {
            tags.style = sty.to_string();
        }
        if let Some(occ) = last_match(self.occasions, &text_lower, false) {
            tags.occasion = occ.to_string();
        }

        debug!(
            category = %tags.category,
            color = %tags.color,
            style = %tags.style,
            occasion = %tags.occasion,
            "Extracted attributes"
        );

        tags
    }
}

impl Tagger for AttributeExtractor {
    fn tag(&self, text: &str) -> TagSet {
        self.extract_tags(text)
    }
}

/// The last term in `vocab` whose match key occurs in `text_lower`.
fn last_match(
    vocab: &'static [&'static str],
    text_lower: &str,
    last_word_only: bool,
) -> Option<&'static str> {
    vocab
        .iter()
        .rev()
        .find(|term| text_lower.contains(&match_key(term, last_word_only)))
        .copied()
}
