// src/export.rs
//! Download formats for a finished run: CSV for spreadsheets, pretty JSON
//! for everything else. Confidence is reported at 3 decimals in both.

use anyhow::{Context, Result};

use crate::customer::{round3, DiscoveryReport};

/// CSV of the ranked customer list, one row per customer. Signals collapse
/// into a single `kind: text; kind: text` column.
pub fn report_to_csv(report: &DiscoveryReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "name",
        "industry",
        "confidence",
        "sourceUrl",
        "discoveredAt",
        "extractionMethod",
        "signals",
        "context",
    ])
    .context("writing csv header")?;

    for c in &report.customers {
        let signals = c
            .signals
            .iter()
            .map(|s| format!("{}: {}", s.kind.as_str(), s.text))
            .collect::<Vec<_>>()
            .join("; ");
        let confidence = format!("{:.3}", c.confidence);
        let discovered = c.discovered_at.to_rfc3339();
        wtr.write_record([
            c.name.as_str(),
            c.industry.as_str(),
            confidence.as_str(),
            c.source_url.as_str(),
            discovered.as_str(),
            c.extraction_method.as_str(),
            signals.as_str(),
            c.context.as_str(),
        ])
        .context("writing csv row")?;
    }

    let bytes = wtr.into_inner().context("flushing csv writer")?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

/// Pretty JSON of the full report, confidence rounded to 3 decimals.
pub fn report_to_json(report: &DiscoveryReport) -> Result<String> {
    let mut rounded = report.clone();
    for c in &mut rounded.customers {
        c.confidence = round3(c.confidence);
    }
    serde_json::to_string_pretty(&rounded).context("serializing report to JSON")
}
