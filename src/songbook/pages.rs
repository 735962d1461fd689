//! Primary split: page markers.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Thresholds;
use crate::types::SongSpan;

/// Regex matching a `--- PAGE 12 ---` marker line.
#[allow(clippy::expect_used)]
static RE_PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*---\s*PAGE\s+(\d+)\s*---\s*$").expect("valid regex: RE_PAGE_MARKER")
});

/// Page number of a marker line, or `None` if the line is not a marker.
pub fn page_marker(line: &str) -> Option<u32> {
    RE_PAGE_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Split a document on page marker lines.
///
/// Text before the first marker forms its own span. Spans whose trimmed text
/// is at most `min_candidate_len` characters long are dropped.
pub fn split_pages(document: &str, thresholds: &Thresholds) -> Vec<SongSpan> {
    let mut spans = Vec::new();
    let mut page = None;
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if let Some(number) = page_marker(line) {
            push_span(&mut spans, page, &current, thresholds);
            current.clear();
            page = Some(number);
        } else {
            current.push(line);
        }
    }
    push_span(&mut spans, page, &current, thresholds);

    spans
}

fn push_span(spans: &mut Vec<SongSpan>, page: Option<u32>, lines: &[&str], thresholds: &Thresholds) {
    let text = lines.join("\n").trim().to_string();
    if text.chars().count() > thresholds.min_candidate_len {
        spans.push(SongSpan { page, text });
    } else if !text.is_empty() {
        tracing::debug!("Dropping {}-character fragment on page {page:?}", text.chars().count());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const VERSE: &str = "C          G\nAmazing grace how sweet the sound\nthat saved a wretch like me";

    #[test]
    fn test_page_marker() {
        assert_eq!(page_marker("--- PAGE 40 ---"), Some(40));
        assert_eq!(page_marker("  ---  PAGE 7 ---  "), Some(7));
        assert_eq!(page_marker("--- PAGE ---"), None);
        assert_eq!(page_marker("PAGE 40"), None);
    }

    #[test]
    fn test_split_pages_keeps_page_numbers() {
        let doc = format!("\n--- PAGE 40 ---\n{VERSE}\n\n--- PAGE 41 ---\n{VERSE}\n");
        let spans = split_pages(&doc, &Thresholds::default());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].page, Some(40));
        assert_eq!(spans[1].page, Some(41));
        assert_eq!(spans[0].text, VERSE);
    }

    #[test]
    fn test_text_before_first_marker() {
        let doc = format!("{VERSE}\n--- PAGE 2 ---\n{VERSE}");
        let spans = split_pages(&doc, &Thresholds::default());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].page, None);
    }

    #[test]
    fn test_min_candidate_len_is_exclusive() {
        let thresholds = Thresholds { min_candidate_len: 10, ..Thresholds::default() };
        let doc = "--- PAGE 1 ---\n0123456789\n--- PAGE 2 ---\n01234567890\n--- PAGE 3 ---\n   \n";
        let spans = split_pages(doc, &thresholds);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].page, Some(2));
    }
}
