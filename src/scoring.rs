// src/scoring.rs
//! Additive confidence heuristic.
//!
//! Start from `base_confidence`, add a fixed increment per positive lexicon
//! keyword found in the context, add URL-path bonuses (story pages and
//! customer/client sections), add a bonus for legal-entity suffixes in the
//! name, then cap. The result is deterministic and always lands in
//! `[base_confidence, confidence_cap]` — a heuristic estimate, not a
//! probability.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ScoringConfig;
use crate::extract::LEGAL_SUFFIXES;

static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = LEGAL_SUFFIXES.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("legal suffix regex")
});

/// Does `name` carry a legal-entity suffix token?
pub fn has_legal_suffix(name: &str) -> bool {
    SUFFIX_RE.is_match(name)
}

/// Score one candidate from its context, name, and source URL.
pub fn score_candidate(context: &str, name: &str, source_url: &str, cfg: &ScoringConfig) -> f32 {
    let mut confidence = cfg.base_confidence;

    let ctx = context.to_lowercase();
    for keyword in &cfg.positive_keywords {
        if ctx.contains(keyword.to_lowercase().as_str()) {
            confidence += cfg.keyword_increment;
        }
    }

    // URL bonuses are independent conditions; a URL can earn both.
    let url = source_url.to_lowercase();
    if url.contains("case-stud") || url.contains("testimonial") {
        confidence += cfg.url_story_bonus;
    }
    if url.contains("customer") || url.contains("client") {
        confidence += cfg.url_audience_bonus;
    }

    if has_legal_suffix(name) {
        confidence += cfg.suffix_bonus;
    }

    confidence.min(cfg.confidence_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;

    fn cfg() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn base_score_without_any_signal() {
        let got = score_candidate("nothing relevant here", "Plainname", "", &cfg());
        assert!((got - 0.6).abs() < 1e-6);
    }

    #[test]
    fn keywords_add_fixed_increments() {
        // "customer" and "success" → base + 2 * increment.
        let got = score_candidate(
            "a customer success story",
            "Plainname",
            "https://example.com/blog",
            &cfg(),
        );
        assert!((got - 0.70).abs() < 1e-6, "got {got}");
    }

    #[test]
    fn url_bonuses_stack_when_both_apply() {
        let got = score_candidate(
            "nothing",
            "Plainname",
            "https://example.com/customers/case-studies/1",
            &cfg(),
        );
        assert!((got - (0.6 + 0.2 + 0.15)).abs() < 1e-6, "got {got}");
    }

    #[test]
    fn suffix_bonus_applies_to_all_suffix_tokens() {
        for name in ["Acme Inc", "Acme LLC", "Acme Technologies", "Acme Limited"] {
            let got = score_candidate("", name, "", &cfg());
            assert!((got - 0.7).abs() < 1e-6, "{name}: got {got}");
        }
        let got = score_candidate("", "Acme Incorporated", "", &cfg());
        assert!((got - 0.6).abs() < 1e-6, "Incorporated is not a suffix token");
    }

    #[test]
    fn score_never_exceeds_cap() {
        // Every bonus at once blows past 1.0 before the cap.
        let got = score_candidate(
            "our customer and client partner achieved success, improved, increased, reduced roi results",
            "TechCorp Inc",
            "https://example.com/customers/testimonials",
            &cfg(),
        );
        assert!((got - 0.98).abs() < 1e-6, "got {got}");
    }

    #[test]
    fn empty_url_earns_no_url_bonus() {
        let with = score_candidate("x", "Plainname", "https://e.com/testimonials", &cfg());
        let without = score_candidate("x", "Plainname", "", &cfg());
        assert!(with > without);
        assert!((without - 0.6).abs() < 1e-6);
    }

    #[test]
    fn lean_tuning_is_expressible() {
        // The historical minimal variant: base 0.5, +0.1 per keyword,
        // no URL bonuses, cap 0.99.
        let lean = ScoringConfig {
            base_confidence: 0.5,
            keyword_increment: 0.1,
            url_story_bonus: 0.0,
            url_audience_bonus: 0.0,
            suffix_bonus: 0.1,
            confidence_cap: 0.99,
            positive_keywords: ["customer", "client", "testimonial", "case study", "success"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        let got = score_candidate(
            "a customer case study",
            "TechCorp Inc",
            "https://example.com/customers",
            &lean,
        );
        // 0.5 + 0.1 (customer) + 0.1 (case study) + 0.1 (suffix), no URL bonus.
        assert!((got - 0.8).abs() < 1e-6, "got {got}");
    }
}
