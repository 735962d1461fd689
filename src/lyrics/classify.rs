//! Line classification.

use crate::chords;
use crate::config::Config;
use crate::types::LineKind;

/// A source line with its derived kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line as it appeared in the source.
    pub raw: &'a str,
    /// Classification under the policy that produced it.
    pub kind: LineKind,
}

/// Stateless line classifier.
///
/// Holds only policy (label vocabulary and chord threshold); classifying a
/// line never changes it.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    labels: Vec<String>,
    min_chord_matches: usize,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LineClassifier {
    /// Create a classifier from a label vocabulary and chord threshold.
    pub fn new(labels: impl IntoIterator<Item = String>, min_chord_matches: usize) -> Self {
        Self {
            labels: labels.into_iter().map(|l| l.trim().to_uppercase()).filter(|l| !l.is_empty()).collect(),
            min_chord_matches: min_chord_matches.max(1),
        }
    }

    /// Create a classifier using the configured vocabulary and thresholds.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.section_labels.iter().cloned(), config.thresholds.min_chord_matches)
    }

    /// Classify a single line.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            LineKind::Blank
        } else if self.is_section_label(trimmed) {
            LineKind::SectionLabel
        } else if chords::chord_count(trimmed) >= self.min_chord_matches {
            LineKind::ChordLine
        } else {
            LineKind::LyricLine
        }
    }

    /// Whether the line equals or starts with a known section label.
    pub fn is_section_label(&self, line: &str) -> bool {
        let upper = line.trim().to_uppercase();
        self.labels.iter().any(|label| upper.starts_with(label.as_str()))
    }

    /// Classify every line of `text`.
    pub fn classify_lines<'a>(&self, text: &'a str) -> Vec<Line<'a>> {
        text.lines()
            .map(|raw| Line { raw, kind: self.classify(raw) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_blank_lines() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify(""), LineKind::Blank);
        assert_eq!(classifier.classify(" \t "), LineKind::Blank);
    }

    #[test]
    fn test_section_labels() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify("INTRO:"), LineKind::SectionLabel);
        assert_eq!(classifier.classify("  chorus:"), LineKind::SectionLabel);
        assert_eq!(classifier.classify("Estribillo: x2"), LineKind::SectionLabel);
        // Labels win over chords on the same line
        assert_eq!(classifier.classify("INTRO: C G Am F"), LineKind::SectionLabel);
        // Without the colon it is just a word
        assert_eq!(classifier.classify("Chorus of angels"), LineKind::LyricLine);
    }

    #[test]
    fn test_chord_lines_need_two_matches() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify("C       G"), LineKind::ChordLine);
        assert_eq!(classifier.classify("   DO    SOL   Lam"), LineKind::ChordLine);
        // A lone chord is read as lyrics
        assert_eq!(classifier.classify("      Am"), LineKind::LyricLine);
        assert_eq!(classifier.classify("La la la"), LineKind::LyricLine);
    }

    #[test]
    fn test_threshold_is_injected() {
        let classifier = LineClassifier::new(vec!["CORO:".to_string()], 1);
        assert_eq!(classifier.classify("      Am"), LineKind::ChordLine);
        assert_eq!(classifier.classify("CORO:"), LineKind::SectionLabel);
        assert_eq!(classifier.classify("INTRO:"), LineKind::LyricLine);
    }

    #[test]
    fn test_rendered_lines_are_not_chord_lines() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify("[C]Amazing [G]grace"), LineKind::LyricLine);
        assert_eq!(classifier.classify("[C][G][Am][F]"), LineKind::LyricLine);
    }

    #[test]
    fn test_classify_lines() {
        let classifier = LineClassifier::default();
        let kinds: Vec<LineKind> = classifier
            .classify_lines("VERSO:\nC  G\nhello there\n\r\n")
            .iter()
            .map(|l| l.kind)
            .collect();
        assert_eq!(kinds, vec![LineKind::SectionLabel, LineKind::ChordLine, LineKind::LyricLine, LineKind::Blank]);
    }
}
