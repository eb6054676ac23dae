//! customer.rs — Core data model: raw candidates, scored customers, and the
//! report envelope returned by a discovery run.
//!
//! `ScoredCustomer` is the unit the whole pipeline revolves around. Field
//! names serialize in the wire casing the UI and exports expect
//! (`sourceUrl`, `discoveredAt`, `extractionMethod`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::industry::Industry;
use crate::signals::SuccessSignal;

/// Extraction technique tag carried on every scored customer (informational).
pub const METHOD_WEB_SCRAPER: &str = "web_scraper";

/// A raw extraction result: one regex match tied to its source page.
/// Created once by the extractor, consumed by the filter; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateName {
    /// The matched text span, trimmed.
    pub name: String,
    /// Page URL the text came from.
    pub source_url: String,
    /// Surrounding text, truncated to the configured length. Used for
    /// scoring and classification only.
    pub context: String,
}

/// A candidate that passed filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCustomer {
    /// Identity for dedup (normalized via lowercase + trim as the key).
    pub name: String,
    pub source_url: String,
    pub context: String,
    /// Heuristic score in `[base_confidence, confidence_cap]`.
    pub confidence: f32,
    pub industry: Industry,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<SuccessSignal>,
    /// Timestamp of extraction; informational, not used in ranking.
    pub discovered_at: DateTime<Utc>,
    pub extraction_method: String,
}

/// Full result of one discovery run — the shape the service returns and the
/// export/report modules consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryReport {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub customers: Vec<ScoredCustomer>,
    pub summary: DiscoverySummary,
    pub status: String,
}

/// Aggregate stats shown in the UI header cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySummary {
    pub total_customers_found: usize,
    /// Mean confidence across the final list, rounded to 3 decimals.
    pub average_confidence: f32,
    /// Entries with confidence strictly above 0.8.
    pub high_confidence_count: usize,
    pub urls_processed: usize,
}

impl DiscoverySummary {
    /// Build summary stats from a final ranked list.
    pub fn from_customers(customers: &[ScoredCustomer], urls_processed: usize) -> Self {
        let total = customers.len();
        let avg = if total > 0 {
            customers.iter().map(|c| c.confidence).sum::<f32>() / total as f32
        } else {
            0.0
        };
        Self {
            total_customers_found: total,
            average_confidence: round3(avg),
            high_confidence_count: customers.iter().filter(|c| c.confidence > 0.8).count(),
            urls_processed,
        }
    }
}

/// Round to 3 decimals — exports and summaries report confidence this way.
pub fn round3(x: f32) -> f32 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::industry::Industry;

    fn customer(name: &str, confidence: f32) -> ScoredCustomer {
        ScoredCustomer {
            name: name.to_string(),
            source_url: "https://example.com/customers".to_string(),
            context: "context".to_string(),
            confidence,
            industry: Industry::Other,
            signals: Vec::new(),
            discovered_at: Utc::now(),
            extraction_method: METHOD_WEB_SCRAPER.to_string(),
        }
    }

    #[test]
    fn summary_counts_and_rounds() {
        let list = vec![customer("A", 0.9), customer("B", 0.7), customer("C", 0.8115)];
        let s = DiscoverySummary::from_customers(&list, 4);
        assert_eq!(s.total_customers_found, 3);
        assert_eq!(s.urls_processed, 4);
        // 0.9 and 0.8115 are above the 0.8 bar, 0.7 and exactly-0.8 would not be.
        assert_eq!(s.high_confidence_count, 2);
        let expected = round3((0.9 + 0.7 + 0.8115) / 3.0);
        assert!((s.average_confidence - expected).abs() < 1e-6);
    }

    #[test]
    fn summary_of_empty_list_is_zeroed() {
        let s = DiscoverySummary::from_customers(&[], 0);
        assert_eq!(s.total_customers_found, 0);
        assert_eq!(s.average_confidence, 0.0);
        assert_eq!(s.high_confidence_count, 0);
    }

    #[test]
    fn wire_casing_matches_ui_contract() {
        let c = customer("TechCorp Inc", 0.98);
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("sourceUrl").is_some(), "missing 'sourceUrl'");
        assert!(v.get("discoveredAt").is_some(), "missing 'discoveredAt'");
        assert!(v.get("extractionMethod").is_some(), "missing 'extractionMethod'");
        assert_eq!(v["extractionMethod"], serde_json::json!("web_scraper"));
    }
}
