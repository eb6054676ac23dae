// src/source.rs
//! Page text sources — the boundary to whatever fetch layer supplies
//! scraped content. The engine never fetches anything itself; it consumes
//! `(url, text)` pairs from a [`PageSource`].
//!
//! `StaticPages` is the built-in provider: fixed blocks for tests and the
//! demo flow (the canned success stories the original walkthrough shows
//! when no crawler is wired up).

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One fetched page, reduced to visible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub url: String,
    pub text: String,
}

#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_pages(&self) -> Result<Vec<PageText>>;
    fn name(&self) -> &'static str;
}

/// Provider over a fixed in-memory page set.
#[derive(Debug, Clone, Default)]
pub struct StaticPages {
    pages: Vec<PageText>,
}

impl StaticPages {
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    /// Demo page set rooted at `company_website` — customer stories across a
    /// handful of industries, enough to exercise every pipeline stage.
    pub fn sample(company_website: &str) -> Self {
        let base = company_website.trim_end_matches('/');
        let pages = vec![
            PageText {
                url: format!("{base}/case-studies/techcorp"),
                text: "TechCorp Solutions runs its SaaS platform on our stack. \
                       Our customer increased efficiency by 300% and scaled operations globally."
                    .to_string(),
            },
            PageText {
                url: format!("{base}/customers/manufacturing"),
                text: "Global Manufacturing Inc modernized its production lines with us. \
                       The client reduced operational costs by 45% and improved quality by 60%."
                    .to_string(),
            },
            PageText {
                url: format!("{base}/testimonials/finance"),
                text: "FinanceFirst Bank streamlined digital payment flows for two million \
                       customers. Their team achieved an ROI of 250% in the first year."
                    .to_string(),
            },
            PageText {
                url: format!("{base}/case-studies/healthcare"),
                text: "HealthPlus Medical improved patient outcomes by 60% while the hospital \
                       network saved $1,200,000 in administrative overhead."
                    .to_string(),
            },
        ];
        Self { pages }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }
}

#[async_trait::async_trait]
impl PageSource for StaticPages {
    async fn fetch_pages(&self) -> Result<Vec<PageText>> {
        Ok(self.pages.clone())
    }

    fn name(&self) -> &'static str {
        "static_pages"
    }
}

/// Collect pages from all providers. Provider errors are logged and counted,
/// never fatal — a run with zero pages is a valid (empty) run.
pub async fn gather_pages(providers: &[Box<dyn PageSource>]) -> Vec<PageText> {
    let mut pages = Vec::new();
    for p in providers {
        match p.fetch_pages().await {
            Ok(mut v) => pages.append(&mut v),
            Err(e) => {
                tracing::warn!(error = ?e, provider = p.name(), "page source error");
                metrics::counter!("discovery_source_errors_total").increment(1);
            }
        }
    }
    pages
}
