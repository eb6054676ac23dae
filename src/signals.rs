// src/signals.rs
//! Success-claim detection: quantitative brag patterns in context text
//! ("increased revenue by 300%", "saved $1,200,000"), each tagged with a
//! signal kind.
//!
//! Patterns scan independently and case-insensitively; all non-overlapping
//! matches per pattern are kept, in pattern-declaration order then match
//! order. The signal text is the raw matched substring — numeric magnitudes
//! are deliberately not parsed out.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Growth,
    Improvement,
    Efficiency,
    Savings,
    Roi,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Growth => "growth",
            SignalKind::Improvement => "improvement",
            SignalKind::Efficiency => "efficiency",
            SignalKind::Savings => "savings",
            SignalKind::Roi => "roi",
        }
    }
}

/// One detected success claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessSignal {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    /// Full matched substring, trimmed.
    pub text: String,
}

// Percent claims stay within one sentence (the lazy [^.!?] run); amounts
// allow an optional dollar sign and thousands separators.
static SIGNAL_PATTERNS: Lazy<Vec<(SignalKind, Regex)>> = Lazy::new(|| {
    vec![
        (
            SignalKind::Growth,
            Regex::new(r"(?i)\bincreased\b[^.!?]*?\d+(?:\.\d+)?\s*%").expect("growth pattern"),
        ),
        (
            SignalKind::Improvement,
            Regex::new(r"(?i)\bimproved\b[^.!?]*?\d+(?:\.\d+)?\s*%").expect("improvement pattern"),
        ),
        (
            SignalKind::Efficiency,
            Regex::new(r"(?i)\breduced\b[^.!?]*?\d+(?:\.\d+)?\s*%").expect("efficiency pattern"),
        ),
        (
            SignalKind::Savings,
            Regex::new(r"(?i)\bsaved\b[^.!?]*?\$?\d+(?:,\d{3})*").expect("savings pattern"),
        ),
        (
            SignalKind::Roi,
            Regex::new(r"(?i)\broi\b[^.!?]*?\d+(?:\.\d+)?\s*%").expect("roi pattern"),
        ),
    ]
});

/// Scan `context` for success claims. Matches are not deduplicated among
/// themselves; an empty result is the common case.
pub fn extract_signals(context: &str) -> Vec<SuccessSignal> {
    let mut out = Vec::new();
    for (kind, re) in SIGNAL_PATTERNS.iter() {
        for m in re.find_iter(context) {
            out.push(SuccessSignal {
                kind: *kind,
                text: m.as_str().trim().to_string(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_claim_matches_full_phrase() {
        let got = extract_signals("Our customer TechCorp Inc increased efficiency by 300%");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].kind, SignalKind::Growth);
        assert_eq!(got[0].text, "increased efficiency by 300%");
    }

    #[test]
    fn each_pattern_scans_independently() {
        let got = extract_signals(
            "They increased output by 40%. They also reduced waste by 12% and saved $1,200,000.",
        );
        let kinds: Vec<_> = got.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SignalKind::Growth, SignalKind::Efficiency, SignalKind::Savings]
        );
        assert_eq!(got[2].text, "saved $1,200,000");
    }

    #[test]
    fn pattern_order_precedes_match_order() {
        // "improved" appears before "increased" in the text, but growth is
        // declared first so it comes out first.
        let got = extract_signals("improved uptime by 10% after we increased capacity by 50%");
        assert_eq!(got[0].kind, SignalKind::Growth);
        assert_eq!(got[1].kind, SignalKind::Improvement);
    }

    #[test]
    fn percent_claims_do_not_cross_sentences() {
        // "increased" with the percentage in the next sentence must not match.
        let got = extract_signals("We increased headcount. Margin was 20% higher.");
        assert!(got.is_empty(), "got: {:?}", got);
    }

    #[test]
    fn roi_and_improvement_are_distinct_kinds() {
        let got = extract_signals("ROI of 250% and improved retention by 35%");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind, SignalKind::Improvement);
        assert_eq!(got[1].kind, SignalKind::Roi);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let got = extract_signals("INCREASED sales by 15%");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].kind, SignalKind::Growth);
    }

    #[test]
    fn no_claims_yields_empty() {
        assert!(extract_signals("a perfectly ordinary paragraph").is_empty());
    }

    #[test]
    fn kind_serializes_as_type_tag() {
        let s = SuccessSignal {
            kind: SignalKind::Savings,
            text: "saved $500".into(),
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], serde_json::json!("savings"));
        assert_eq!(v["text"], serde_json::json!("saved $500"));
    }
}
