// Tagger trait — swap-ready abstraction.
//
// The web state and the CLI hold a `dyn Tagger`, so the vocabulary matcher
// can be replaced by an LLM-backed classifier without touching the routes.

use super::extractor::TagSet;

/// Trait for turning free-text product copy into catalog attributes.
pub trait Tagger: Send + Sync {
    /// Classify a description. Never fails: unmatched fields keep defaults.
    fn tag(&self, text: &str) -> TagSet;
}
