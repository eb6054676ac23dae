// src/report.rs
//! Standalone HTML report of a discovery run — a single self-contained page
//! with the run header and one card per customer.

use crate::customer::DiscoveryReport;

/// Render `report` as a complete HTML document. All dynamic values are
/// entity-escaped.
pub fn html_report(report: &DiscoveryReport) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Hero Customer Report - ",
    );
    push_escaped(&mut html, &report.company_name);
    html.push_str(
        "</title>\n<style>\n\
         body { font-family: Arial, sans-serif; margin: 40px; }\n\
         .header { background: #f0f0f0; padding: 20px; border-radius: 5px; }\n\
         .customer { border: 1px solid #ddd; margin: 10px 0; padding: 15px; border-radius: 5px; }\n\
         .confidence { font-weight: bold; color: #007bff; }\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str("<div class=\"header\">\n<h1>Hero Customer Report</h1>\n<h2>");
    push_escaped(&mut html, &report.company_name);
    html.push_str("</h2>\n<p>Generated: ");
    push_escaped(&mut html, &report.timestamp.to_rfc3339());
    html.push_str("</p>\n<p>Total Customers Found: ");
    html.push_str(&report.summary.total_customers_found.to_string());
    html.push_str("</p>\n</div>\n");

    html.push_str("<div class=\"customers\">\n<h3>Discovered Hero Customers</h3>\n");
    for c in &report.customers {
        html.push_str("<div class=\"customer\">\n<h4>");
        push_escaped(&mut html, &c.name);
        html.push_str("</h4>\n<p><span class=\"confidence\">Confidence: ");
        html.push_str(&format!("{:.3}", c.confidence));
        html.push_str("</span> &middot; ");
        push_escaped(&mut html, c.industry.as_str());
        html.push_str("</p>\n<p>Source: ");
        push_escaped(&mut html, &c.source_url);
        html.push_str("</p>\n<p>Context: ");
        push_escaped(&mut html, &c.context);
        html.push_str("</p>\n</div>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn push_escaped(out: &mut String, raw: &str) {
    out.push_str(&html_escape::encode_text(raw));
}
