//! Secondary split: several songs printed on one page.
//!
//! A candidate is cut again when it holds more than one line that looks like a
//! song heading. This is a precision/recall trade-off: a lyric line mistaken
//! for a heading over-splits a song, a missed heading leaves two songs joined.

use crate::config::Thresholds;
use crate::lyrics::LineClassifier;
use crate::types::{LineKind, SongSpan};

/// Whether the line has letters and all of them are upper-case.
fn is_upper_heading(line: &str) -> bool {
    let mut letters = line.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

/// Whether line `j` sits where a heading would and is shaped like one.
fn is_heading_shaped(lines: &[&str], j: usize, classifier: &LineClassifier) -> bool {
    let line = lines[j].trim();
    if classifier.classify(line) == LineKind::SectionLabel {
        return false;
    }

    // Headings open a block: top of the candidate or right after a blank line
    let at_top = lines[..j].iter().all(|l| l.trim().is_empty());
    let after_blank = j > 0 && lines[j - 1].trim().is_empty();
    if !at_top && !after_blank {
        return false;
    }

    let before_chords = lines[j + 1..]
        .iter()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| classifier.classify(l) == LineKind::ChordLine);
    is_upper_heading(line) || before_chords
}

/// Indices of the lines of `lines` that could be song titles.
///
/// A potential title has a length strictly between `title_min_len` and
/// `title_max_len`, is not numeric, not a `---` marker, not a chord line, and
/// has a line longer than `content_line_min_len` within the next
/// `title_lookahead` lines. With `title_requires_heading_shape` set it must
/// also be heading-shaped: in heading position, not a section label, and
/// upper-case or directly above a chord line.
pub fn potential_titles(lines: &[&str], classifier: &LineClassifier, thresholds: &Thresholds) -> Vec<usize> {
    let mut found = Vec::new();

    for (j, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        let len = line.chars().count();
        if len <= thresholds.title_min_len || len >= thresholds.title_max_len {
            continue;
        }
        if line.chars().all(|c| c.is_ascii_digit()) || line.starts_with("---") {
            continue;
        }
        if classifier.classify(line) == LineKind::ChordLine {
            continue;
        }

        let has_content = lines[j + 1..]
            .iter()
            .take(thresholds.title_lookahead)
            .any(|l| l.trim().chars().count() > thresholds.content_line_min_len);
        if !has_content {
            continue;
        }

        if thresholds.title_requires_heading_shape && !is_heading_shaped(lines, j, classifier) {
            continue;
        }
        found.push(j);
    }

    found
}

/// Cut a candidate at each potential title when it has more than one.
///
/// Text before the first title is dropped, as are pieces at or below
/// `min_candidate_len`. A candidate with zero or one title, or one whose
/// pieces would all be dropped, comes back unchanged.
pub fn split_titles(span: &SongSpan, classifier: &LineClassifier, thresholds: &Thresholds) -> Vec<SongSpan> {
    let lines: Vec<&str> = span.text.lines().collect();
    let titles = potential_titles(&lines, classifier, thresholds);
    if titles.len() < 2 {
        return vec![span.clone()];
    }

    tracing::debug!("Found {} potential songs on page {:?}", titles.len(), span.page);

    let pieces: Vec<SongSpan> = titles
        .iter()
        .enumerate()
        .filter_map(|(k, &start)| {
            let end = titles.get(k + 1).copied().unwrap_or(lines.len());
            let text = lines[start..end].join("\n").trim().to_string();
            (text.chars().count() > thresholds.min_candidate_len).then_some(SongSpan { page: span.page, text })
        })
        .collect();

    if pieces.is_empty() {
        vec![span.clone()]
    } else {
        pieces
    }
}
