// src/industry.rs
//! Industry classification by keyword lookup over the candidate context.
//!
//! The table is ordered; the first entry with any keyword contained in the
//! lowercased context wins. No match → `Other`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    #[serde(rename = "E-commerce")]
    ECommerce,
    Financial,
    Healthcare,
    Manufacturing,
    Media,
    Other,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::ECommerce => "E-commerce",
            Industry::Financial => "Financial",
            Industry::Healthcare => "Healthcare",
            Industry::Manufacturing => "Manufacturing",
            Industry::Media => "Media",
            Industry::Other => "Other",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Declaration order is the match precedence.
const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Technology,
        &["software", "tech", "platform", "api", "cloud", "saas", "app"],
    ),
    (
        Industry::ECommerce,
        &["retail", "ecommerce", "store", "marketplace", "shopping"],
    ),
    (
        Industry::Financial,
        &["bank", "finance", "payment", "fintech", "investment"],
    ),
    (
        Industry::Healthcare,
        &["health", "medical", "hospital", "pharma", "healthcare"],
    ),
    (
        Industry::Manufacturing,
        &["manufacturing", "production", "factory", "industrial"],
    ),
    (
        Industry::Media,
        &["media", "content", "publishing", "news", "entertainment"],
    ),
];

/// Classify a context block into one industry label.
pub fn classify_industry(context: &str) -> Industry {
    let ctx = context.to_lowercase();
    for (label, keywords) in INDUSTRY_KEYWORDS {
        if keywords.iter().any(|k| ctx.contains(k)) {
            return *label;
        }
    }
    Industry::Other
}
