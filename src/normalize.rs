// src/normalize.rs
//! Page text cleanup applied before extraction. Scraped blocks arrive as
//! whatever the fetch layer pulled out of the DOM — entity-encoded, tag
//! fragments included, whitespace mangled.

/// Normalize a scraped text block: decode entities, strip tags, collapse
/// whitespace, trim.
pub fn normalize_page_text(s: &str) -> String {
    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();
    out = out.trim().to_string();

    // 5) Length cap: 10_000 chars per block
    if out.chars().count() > 10_000 {
        out = out.chars().take(10_000).collect();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let raw = "<div class=\"customer-card\"><h4>Acme &amp; Sons</h4><p>Loved&nbsp;it</p></div>";
        let out = normalize_page_text(raw);
        assert_eq!(out, "Acme & Sons Loved it");
    }

    #[test]
    fn collapses_whitespace_and_smart_quotes() {
        let raw = "“TechCorp   Inc”\n\tincreased\r\n efficiency";
        let out = normalize_page_text(raw);
        assert_eq!(out, "\"TechCorp Inc\" increased efficiency");
    }

    #[test]
    fn keeps_sentence_punctuation() {
        // Signal patterns scan within sentences; the period must survive.
        let out = normalize_page_text("Reduced costs by 45%. Improved quality.");
        assert_eq!(out, "Reduced costs by 45%. Improved quality.");
    }

    #[test]
    fn long_blocks_are_capped() {
        let raw = "x".repeat(25_000);
        assert_eq!(normalize_page_text(&raw).chars().count(), 10_000);
    }
}
