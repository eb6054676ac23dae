// tests/discovery_e2e.rs
//
// Full demo flow: gather pages from the built-in provider, run discovery,
// and render every output format.

use hero_auditor::config::{ConfigHandle, DiscoveryConfig};
use hero_auditor::export::{report_to_csv, report_to_json};
use hero_auditor::industry::Industry;
use hero_auditor::pipeline::DiscoveryEngine;
use hero_auditor::report::html_report;
use hero_auditor::source::{gather_pages, PageSource, StaticPages};

#[tokio::test]
async fn sample_provider_to_report_covers_every_stage() {
    let providers: Vec<Box<dyn PageSource>> =
        vec![Box::new(StaticPages::sample("https://initech.example"))];
    let pages = gather_pages(&providers).await;
    assert_eq!(pages.len(), 4);

    let engine = DiscoveryEngine::new(ConfigHandle::new(DiscoveryConfig::default()));
    let report = engine.discover("Initech", Some("https://initech.example"), &pages, None);

    assert_eq!(report.status, "SUCCESS");
    assert_eq!(report.summary.urls_processed, 4);
    assert!(report.summary.total_customers_found >= 4);

    let names: Vec<&str> = report.customers.iter().map(|c| c.name.as_str()).collect();
    for expected in [
        "TechCorp Solutions",
        "Global Manufacturing Inc",
        "FinanceFirst Bank",
        "HealthPlus Medical",
    ] {
        assert!(names.contains(&expected), "missing {expected}; got {names:?}");
    }

    // Industries come from context keywords, not the name alone.
    let by_name = |n: &str| report.customers.iter().find(|c| c.name == n).unwrap();
    assert_eq!(by_name("TechCorp Solutions").industry, Industry::Technology);
    assert_eq!(by_name("FinanceFirst Bank").industry, Industry::Financial);
    assert_eq!(by_name("HealthPlus Medical").industry, Industry::Healthcare);

    // Each story page carries at least one quantitative signal.
    assert!(by_name("TechCorp Solutions").signals.iter().any(|s| s.text.contains("300%")));
    assert!(!by_name("HealthPlus Medical").signals.is_empty());

    // Ranked output respects the global ordering invariant.
    for w in report.customers.windows(2) {
        assert!(w[0].confidence >= w[1].confidence);
    }

    // All three output formats render the same run.
    let csv = report_to_csv(&report).unwrap();
    assert!(csv.contains("FinanceFirst Bank"));

    let json = report_to_json(&report).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["summary"]["urlsProcessed"], serde_json::json!(4));

    let html = html_report(&report);
    assert!(html.contains("Hero Customer Report"));
    assert!(html.contains("Global Manufacturing Inc"));
}
