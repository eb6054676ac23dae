//! history.rs — bounded in-memory log of discovery runs.
//!
//! The service keeps the last full report for the export/report endpoints
//! plus a short fingerprint per run for the debug view. Nothing persists
//! across restarts.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::customer::DiscoveryReport;

#[derive(Debug, Clone)]
pub struct RunEntry {
    pub ts_unix: u64,
    pub company_name: String,
    pub total_customers_found: usize,
    pub average_confidence: f32,
    pub urls_processed: usize,
}

#[derive(Debug)]
pub struct RunHistory {
    entries: Mutex<Vec<RunEntry>>,
    last: Mutex<Option<DiscoveryReport>>,
    cap: usize,
}

impl RunHistory {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            last: Mutex::new(None),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, report: &DiscoveryReport) {
        let entry = RunEntry {
            ts_unix: now_unix(),
            company_name: report.company_name.clone(),
            total_customers_found: report.summary.total_customers_found,
            average_confidence: report.summary.average_confidence,
            urls_processed: report.summary.urls_processed,
        };

        let mut v = self.entries.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
        drop(v);

        *self.last.lock().expect("history mutex poisoned") = Some(report.clone());
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<RunEntry> {
        let v = self.entries.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }

    /// The most recent full report, if any run has completed.
    pub fn last_report(&self) -> Option<DiscoveryReport> {
        self.last.lock().expect("history mutex poisoned").clone()
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::DiscoverySummary;
    use chrono::Utc;

    fn report(company: &str) -> DiscoveryReport {
        DiscoveryReport {
            company_name: company.to_string(),
            company_website: None,
            timestamp: Utc::now(),
            customers: Vec::new(),
            summary: DiscoverySummary::from_customers(&[], 0),
            status: "SUCCESS".to_string(),
        }
    }

    #[test]
    fn keeps_last_report_and_fingerprints() {
        let h = RunHistory::with_capacity(10);
        assert!(h.last_report().is_none());
        h.push(&report("Acme"));
        h.push(&report("Initech"));
        assert_eq!(h.last_report().unwrap().company_name, "Initech");
        let snap = h.snapshot_last_n(5);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].company_name, "Acme");
    }

    #[test]
    fn capacity_evicts_oldest() {
        let h = RunHistory::with_capacity(2);
        h.push(&report("one"));
        h.push(&report("two"));
        h.push(&report("three"));
        let snap = h.snapshot_last_n(10);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].company_name, "two");
        assert_eq!(snap[1].company_name, "three");
    }
}
