// Unit tests for attribute extraction.
//
// Exercises AttributeExtractor through its public API and the Tagger trait:
// default handling, case folding, color last-word matching, and the
// last-match-wins rule across each vocabulary.

use product_agent::tagging::extractor::{AttributeExtractor, TagSet};
use product_agent::tagging::traits::Tagger;
use product_agent::tagging::vocabulary::{CATEGORIES, COLORS, OCCASIONS, STYLES};

fn tag(text: &str) -> TagSet {
    AttributeExtractor::default().tag(text)
}

// ============================================================
// Defaults
// ============================================================

#[test]
fn unmatched_text_yields_exact_defaults() {
    let tags = tag("a plain widget with no catalog words");
    assert_eq!(tags.category, "Uncategorized");
    assert_eq!(tags.color, "Neutral");
    assert_eq!(tags.style, "Modern");
    assert_eq!(tags.occasion, "Versatile");
    assert_eq!(tags.confidence, 0.92);
}

#[test]
fn empty_text_yields_defaults() {
    assert_eq!(tag(""), TagSet::default());
}

#[test]
fn confidence_is_constant_regardless_of_matches() {
    let many = tag("vintage formal apparel in ocean blue");
    let none = tag("nothing here");
    assert_eq!(many.confidence, none.confidence);
}

// ============================================================
// Category matching
// ============================================================

#[test]
fn every_category_matches_verbatim_case_insensitive() {
    for cat in CATEGORIES {
        let upper = format!("NEW IN: {}", cat.to_uppercase());
        assert_eq!(tag(&upper).category, *cat, "category {cat} not matched");
    }
}

#[test]
fn multi_word_category_needs_whole_phrase() {
    assert_eq!(tag("cozy home decor pieces").category, "Home Decor");
    assert_eq!(tag("home office decorations").category, "Uncategorized");
}

#[test]
fn later_category_overrides_earlier() {
    // Footwear precedes Electronics in the vocabulary.
    assert_eq!(tag("electronics and footwear bundle").category, "Electronics");
}

// ============================================================
// Color matching (last word only)
// ============================================================

#[test]
fn color_matches_on_last_word() {
    assert_eq!(tag("a green scarf").color, "Emerald Green");
    assert_eq!(tag("navy or blue").color, "Ocean Blue");
    assert_eq!(tag("beige trench").color, "Sand Beige");
}

#[test]
fn color_first_word_alone_does_not_match() {
    assert_eq!(tag("midnight shipping").color, "Neutral");
}

#[test]
fn color_key_matches_inside_other_words() {
    // "red" is a substring of "tailored".
    assert_eq!(tag("tailored trousers").color, "Crimson Red");
}

#[test]
fn every_color_is_reachable() {
    for col in COLORS {
        let last = col.split_whitespace().last().unwrap().to_lowercase();
        assert_eq!(tag(&last).color, *col);
    }
}

// ============================================================
// Style and occasion
// ============================================================

#[test]
fn every_style_and_occasion_is_reachable() {
    for sty in STYLES {
        assert_eq!(tag(&sty.to_lowercase()).style, *sty);
    }
    for occ in OCCASIONS {
        assert_eq!(tag(&occ.to_lowercase()).occasion, *occ);
    }
}

#[test]
fn jacket_example_follows_vocabulary_order() {
    let tags = tag("A vintage-inspired midnight black leather jacket for casual outdoor nights");
    assert_eq!(tags.category, "Uncategorized");
    assert_eq!(tags.style, "Vintage");
    // Outdoor is listed after Casual.
    assert_eq!(tags.occasion, "Outdoor");
    // "inspired" contains "red", and Crimson Red is listed after Midnight Black.
    assert_eq!(tags.color, "Crimson Red");
}

#[test]
fn black_alone_is_midnight_black() {
    let tags = tag("A midnight black leather jacket for casual nights");
    assert_eq!(tags.color, "Midnight Black");
    assert_eq!(tags.occasion, "Casual");
}

// ============================================================
// Serialization
// ============================================================

#[test]
fn tag_set_serializes_fields_in_order() {
    let json = serde_json::to_string(&TagSet::default()).unwrap();
    assert_eq!(
        json,
        r#"{"category":"Uncategorized","color":"Neutral","style":"Modern","occasion":"Versatile","confidence":0.92}"#
    );
}
