// src/filter.rs
//! Candidate gate: drops spans that are too short/long, self-referential
//! (the target company naming itself), or generic UI vocabulary.
//!
//! Filtering is total — every candidate gets an accept/reject answer, no
//! error paths.

use crate::config::ExtractionConfig;

/// Why a candidate was rejected. Kept explicit for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    TooLong,
    SelfReference,
    Blacklisted,
}

/// Prepared filter for one discovery run: the target company name and the
/// blacklist are lowercased once up front.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    target: Option<String>,
    blacklist: Vec<String>,
    min_chars: usize,
    max_chars: usize,
}

impl CandidateFilter {
    /// `target_company` may be blank; the self-match rule is then skipped
    /// (a missing target never rejects a candidate on its own).
    pub fn new(target_company: &str, cfg: &ExtractionConfig) -> Self {
        let trimmed = target_company.trim();
        Self {
            target: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            },
            blacklist: cfg.blacklist.iter().map(|t| t.to_lowercase()).collect(),
            min_chars: cfg.min_name_chars,
            max_chars: cfg.max_name_chars,
        }
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.rejection(name).is_none()
    }

    /// First rule that disqualifies `name`, if any.
    pub fn rejection(&self, name: &str) -> Option<Rejection> {
        let len = name.chars().count();
        if len < self.min_chars {
            return Some(Rejection::TooShort);
        }
        if len > self.max_chars {
            return Some(Rejection::TooLong);
        }

        let lower = name.to_lowercase();
        if let Some(target) = &self.target {
            if lower.contains(target.as_str()) {
                return Some(Rejection::SelfReference);
            }
        }
        if self.blacklist.iter().any(|t| lower.contains(t.as_str())) {
            return Some(Rejection::Blacklisted);
        }
        None
    }
}
