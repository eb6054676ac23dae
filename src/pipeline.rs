// src/pipeline.rs
//! Discovery pipeline: text blocks in, ranked hero customers out.
//!
//! Per page: normalize → extract candidates → filter → score + classify +
//! tag signals. Across pages: dedupe by normalized name, rank, cap. Every
//! stage is a pure function over its input; the engine only adds config
//! snapshots, counters, and timestamps around them.

use chrono::Utc;
use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;

use crate::config::{dev_env, ConfigHandle};
use crate::customer::{
    DiscoveryReport, DiscoverySummary, ScoredCustomer, METHOD_WEB_SCRAPER,
};
use crate::dedup::dedupe_and_rank;
use crate::extract::extract_candidates;
use crate::filter::CandidateFilter;
use crate::industry::classify_industry;
use crate::normalize::normalize_page_text;
use crate::scoring::score_candidate;
use crate::signals::extract_signals;
use crate::source::PageText;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "discovery_pages_total",
            "Text blocks run through the extraction pipeline."
        );
        describe_counter!(
            "discovery_candidates_total",
            "Raw name candidates produced by the extractor."
        );
        describe_counter!(
            "discovery_rejected_total",
            "Candidates dropped by the filter rules."
        );
        describe_counter!(
            "discovery_merged_total",
            "Duplicate customers merged during dedup."
        );
        describe_gauge!(
            "discovery_last_run_ts",
            "Unix ts of the last completed discovery run."
        );
    });
}

// Make these helpers available to other modules (dev logging only).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

fn dev_logging_enabled() -> bool {
    let on = std::env::var("DISCOVERY_DEV_LOG").ok().as_deref() == Some("1");
    on && dev_env()
}

/// Minimal, anonymized dev logger for discovery runs. Never logs raw page
/// text or company names — only a hashed id and counts.
fn dev_log_run(company: &str, pages: usize, extracted: usize, kept: usize, merged: usize) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(company);
    tracing::info!(
        target: "discovery",
        %id, pages, extracted, kept, merged,
        "discovery run"
    );
}

/// The pipeline bound to a live config handle. Cheap to clone around.
#[derive(Clone)]
pub struct DiscoveryEngine {
    config: ConfigHandle,
}

impl DiscoveryEngine {
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Process one page: extract, filter, and score candidates. No dedup —
    /// that runs once globally in [`Self::discover`].
    pub fn process_page(&self, page: &PageText, target_company: &str) -> Vec<ScoredCustomer> {
        ensure_metrics_described();
        let cfg = self.config.current();

        let text = normalize_page_text(&page.text);
        let filter = CandidateFilter::new(target_company, &cfg.extraction);

        let mut out = Vec::new();
        let mut extracted = 0usize;
        let mut rejected = 0usize;

        for candidate in extract_candidates(&text, &page.url, cfg.extraction.context_chars) {
            extracted += 1;
            if !filter.accepts(&candidate.name) {
                rejected += 1;
                continue;
            }
            let confidence = score_candidate(
                &candidate.context,
                &candidate.name,
                &candidate.source_url,
                &cfg.scoring,
            );
            out.push(ScoredCustomer {
                industry: classify_industry(&candidate.context),
                signals: extract_signals(&candidate.context),
                confidence,
                name: candidate.name,
                source_url: candidate.source_url,
                context: candidate.context,
                discovered_at: Utc::now(),
                extraction_method: METHOD_WEB_SCRAPER.to_string(),
            });
        }

        counter!("discovery_pages_total").increment(1);
        counter!("discovery_candidates_total").increment(extracted as u64);
        counter!("discovery_rejected_total").increment(rejected as u64);

        out
    }

    /// Full run over a batch of pages. Pages are processed independently;
    /// dedup and ranking happen once across all of them.
    pub fn discover(
        &self,
        company_name: &str,
        company_website: Option<&str>,
        pages: &[PageText],
        max_results: Option<usize>,
    ) -> DiscoveryReport {
        ensure_metrics_described();
        let cfg = self.config.current();
        let cap = max_results.unwrap_or(cfg.discovery.max_results);

        let mut scored = Vec::new();
        for page in pages {
            scored.extend(self.process_page(page, company_name));
        }
        let extracted = scored.len();

        let (customers, merged) = dedupe_and_rank(scored, cap);

        counter!("discovery_merged_total").increment(merged as u64);
        gauge!("discovery_last_run_ts").set(Utc::now().timestamp() as f64);
        dev_log_run(company_name, pages.len(), extracted, customers.len(), merged);

        let summary = DiscoverySummary::from_customers(&customers, pages.len());
        DiscoveryReport {
            company_name: company_name.to_string(),
            company_website: company_website.map(|s| s.to_string()),
            timestamp: Utc::now(),
            customers,
            summary,
            status: "SUCCESS".to_string(),
        }
    }
}
