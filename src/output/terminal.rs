// Colored terminal output for tag sets and trend lists.
//
// main.rs delegates here for the human-readable form of `tag` and `trends`;
// `--json` output bypasses this module.

use colored::Colorize;

use crate::tagging::extractor::TagSet;
use crate::tagging::vocabulary;
use crate::trends::analyzer::TrendEntry;

/// Display the attributes extracted from one description.
pub fn display_tags(text: &str, tags: &TagSet) {
    println!("\n{}", "=== Extracted Attributes ===".bold());
    println!("  {}", super::truncate_chars(text, 100).dimmed());
    println!();

    let rows = [
        ("Category", &tags.category, vocabulary::DEFAULT_CATEGORY),
        ("Color", &tags.color, vocabulary::DEFAULT_COLOR),
        ("Style", &tags.style, vocabulary::DEFAULT_STYLE),
        ("Occasion", &tags.occasion, vocabulary::DEFAULT_OCCASION),
    ];

    for (label, value, default) in rows {
        println!("  {:<10} {}", label.dimmed(), colorize_attribute(value, default));
    }
    println!("  {:<10} {:.2}", "Confidence".dimmed(), tags.confidence);

    let matched = rows.iter().filter(|(_, value, default)| value != default).count();
    if matched == 0 {
        println!("\n  {}", "No vocabulary terms found; all fields are defaults.".yellow());
    }
}

/// Display a ranked trend list.
pub fn display_trends(trends: &[TrendEntry]) {
    if trends.is_empty() {
        println!("No keywords long enough to rank. Stop-words and words under four letters are ignored.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Trending Keywords (top {}) ===", trends.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:>6}  {:>7}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Score".dimmed(),
        "Growth".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());

    let top_score = trends.first().map(|t| t.score).unwrap_or(0);
    for (i, trend) in trends.iter().enumerate() {
        let keyword = format!("#{}", super::truncate_chars(&trend.keyword, 26));
        let keyword = if trend.score == top_score {
            keyword.bright_green().bold()
        } else {
            keyword.normal()
        };
        println!(
            "  {:>4}. {:<28} {:>6}  {:>7}",
            i + 1,
            keyword,
            trend.score,
            trend.growth.green(),
        );
    }
    println!();
}

/// Matched attributes are highlighted; defaults are dimmed.
fn colorize_attribute(value: &str, default: &str) -> colored::ColoredString {
    if value == default {
        value.dimmed()
    } else {
        value.bright_cyan().bold()
    }
}
