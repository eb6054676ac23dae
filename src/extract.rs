// src/extract.rs
//! Name candidate extraction: scans a text block for spans shaped like a
//! company name — one or more capitalized words separated by whitespace or
//! light punctuation, optionally ending in a legal-entity suffix.
//!
//! Matching is the `regex` crate's standard global semantics: left-to-right,
//! non-overlapping, no backtracking into consumed spans. Each match yields
//! one [`CandidateName`] carrying the source URL and a truncated context
//! window of the block it came from.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::customer::CandidateName;

/// Legal-entity suffix tokens recognized at the end of a name. Shared with
/// the scorer's suffix bonus.
pub const LEGAL_SUFFIXES: &[&str] = &[
    "Inc",
    "LLC",
    "Corp",
    "Corporation",
    "Company",
    "Ltd",
    "Limited",
    "Group",
    "Systems",
    "Technologies",
    "Solutions",
];

// Capitalized word, then any number of separator + capitalized word repeats.
// Suffix tokens are themselves capitalized words, so "TechCorp Inc" is one
// span. Separators follow what real pages contain between name words.
static CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][A-Za-z]+(?:[\s&.,-]+[A-Z][A-Za-z]+)*\b").expect("candidate name regex")
});

/// Shortest and longest span the name shape accepts, in chars. The filter
/// applies its own (configurable) limits on top.
const SPAN_MIN_CHARS: usize = 2;
const SPAN_MAX_CHARS: usize = 50;

/// Scan `text` and lazily yield one candidate per non-overlapping match.
///
/// `context_chars` bounds the context window carried on each candidate
/// (the full block, truncated). Empty input yields nothing — never an error.
pub fn extract_candidates<'a>(
    text: &'a str,
    source_url: &'a str,
    context_chars: usize,
) -> impl Iterator<Item = CandidateName> + 'a {
    let context: String = truncate_chars(text.trim(), context_chars);
    CANDIDATE_RE.find_iter(text).filter_map(move |m| {
        let span = m.as_str().trim();
        let len = span.chars().count();
        if !(SPAN_MIN_CHARS..=SPAN_MAX_CHARS).contains(&len) {
            return None;
        }
        Some(CandidateName {
            name: span.to_string(),
            source_url: source_url.to_string(),
            context: context.clone(),
        })
    })
}

/// Char-boundary-safe prefix truncation.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    s.chars().take(max_chars).collect()
}
