//! Chord sheet to `ChordPro` conversion.
//!
//! Takes the two-line chord sheet convention (chords on one line, lyrics on
//! the line below) and renders inline `[CHORD]lyric` markup grouped into
//! verse blocks.
//!
//! Submodules:
//! - classify: per-line classification (blank, section label, chords, lyrics)
//! - merge: splicing a chord line into its lyric line
//! - segment: the verse block state machine

pub mod classify;
pub mod merge;
pub mod segment;

pub use classify::{Line, LineClassifier};
pub use merge::{merge_chord_lyric, render_chord_line};
pub use segment::{pair_lines, segment, transition, SegmentEvent, VerseSegmenter, VerseState};

/// Convert a chord sheet into `ChordPro` lines.
///
/// Whitespace-only input yields no lines.
pub fn to_chordpro_lines(text: &str, classifier: &LineClassifier) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    segment(&classifier.classify_lines(text))
}

/// Convert a chord sheet into `ChordPro` text.
pub fn to_chordpro(text: &str, classifier: &LineClassifier) -> String {
    to_chordpro_lines(text, classifier).join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::constants::directives::{END_OF_VERSE, START_OF_VERSE};
    use crate::types::LineKind;

    #[test]
    fn test_intro_then_lyrics() {
        let classifier = LineClassifier::default();
        let out = to_chordpro_lines("INTRO:\nC  G  Am  F\n\nLa la la", &classifier);
        assert_eq!(
            out,
            vec![
                "{start_of_verse}",
                "INTRO:",
                "[C][G][Am][F]",
                "{end_of_verse}",
                "",
                "{start_of_verse}",
                "La la la",
                "{end_of_verse}",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let classifier = LineClassifier::default();
        assert!(to_chordpro_lines("", &classifier).is_empty());
        assert_eq!(to_chordpro(" \n\t\n ", &classifier), "");
    }

    #[test]
    fn test_spanish_song() {
        let classifier = LineClassifier::default();
        let text = "ESTRIBILLO:\nDO        SOL\nSeñor, me has mirado\n   Lam         FA\n   a los ojos, sonriendo";
        let out = to_chordpro(text, &classifier);
        assert_eq!(
            out,
            "{start_of_verse}\nESTRIBILLO:\n[DO]Señor, me [SOL]has mirado\n   [Lam]a los ojos, [FA]sonriendo\n{end_of_verse}"
        );
    }

    #[test]
    fn test_markers_pair_up() {
        let classifier = LineClassifier::default();
        let text = "\n\nC  G\nline one\n\n\nCORO:\nline two\nAm  Em\n\nlast\n";
        let out = to_chordpro_lines(text, &classifier);

        let mut open = false;
        for line in &out {
            if line == START_OF_VERSE {
                assert!(!open, "nested start marker");
                open = true;
            } else if line == END_OF_VERSE {
                assert!(open, "end marker without start");
                open = false;
            }
        }
        assert!(!open, "unclosed block");
    }

    #[test]
    fn test_line_count_conservation() {
        let classifier = LineClassifier::default();
        let text = "A  D\nwords here\nmore words\n\nG  C\n\nCHORUS:\nE  A\nsing\n\n";
        let classified = classifier.classify_lines(text);
        let pairs = classified
            .windows(2)
            .filter(|w| w[0].kind == LineKind::ChordLine && w[1].kind == LineKind::LyricLine)
            .count();
        let blanks = classified.iter().filter(|l| l.kind == LineKind::Blank).count();
        let non_blank = classified.len() - blanks;

        let out = to_chordpro_lines(text, &classifier);
        let rendered: Vec<&String> = out.iter().filter(|l| *l != START_OF_VERSE && *l != END_OF_VERSE).collect();
        assert_eq!(rendered.iter().filter(|l| l.is_empty()).count(), blanks);
        assert_eq!(rendered.iter().filter(|l| !l.is_empty()).count(), non_blank - pairs);
    }

    #[test]
    fn test_output_is_not_reclassified_as_chords() {
        let classifier = LineClassifier::default();
        let out = to_chordpro_lines("C       G\nAmazing grace\nD   A7   D\n", &classifier);
        for line in out {
            assert_ne!(classifier.classify(&line), LineKind::ChordLine, "{line} re-detected as chords");
        }
    }
}
