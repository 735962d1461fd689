//! Verse block segmentation.
//!
//! Rendering happens in two steps. [`pair_lines`] walks the classified lines,
//! consuming a chord line together with the lyric line below it, and yields
//! one [`SegmentEvent`] per rendered line. [`VerseSegmenter`] then feeds those
//! events through a two-state machine that brackets each run of non-blank
//! lines with `{start_of_verse}` / `{end_of_verse}`.

use crate::constants::directives::{END_OF_VERSE, START_OF_VERSE};
use crate::lyrics::classify::Line;
use crate::lyrics::merge::{merge_chord_lyric, render_chord_line};
use crate::types::LineKind;

/// Segmenter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerseState {
    /// Between blocks.
    #[default]
    Idle,
    /// Inside an open verse block.
    InVerse,
}

/// Input to the segmenter state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentEvent {
    /// A blank source line.
    Blank,
    /// A rendered content line.
    Line(String),
    /// End of input.
    End,
}

/// Apply one event, returning the next state and the lines to emit.
pub fn transition(state: VerseState, event: SegmentEvent) -> (VerseState, Vec<String>) {
    match (state, event) {
        (VerseState::InVerse, SegmentEvent::Blank) => {
            (VerseState::Idle, vec![END_OF_VERSE.to_string(), String::new()])
        }
        (VerseState::Idle, SegmentEvent::Blank) => (VerseState::Idle, vec![String::new()]),
        (VerseState::Idle, SegmentEvent::Line(line)) => {
            (VerseState::InVerse, vec![START_OF_VERSE.to_string(), line])
        }
        (VerseState::InVerse, SegmentEvent::Line(line)) => (VerseState::InVerse, vec![line]),
        (VerseState::InVerse, SegmentEvent::End) => (VerseState::Idle, vec![END_OF_VERSE.to_string()]),
        (VerseState::Idle, SegmentEvent::End) => (VerseState::Idle, Vec::new()),
    }
}

/// Drives [`transition`] over a stream of events.
#[derive(Debug, Default)]
pub struct VerseSegmenter {
    state: VerseState,
    output: Vec<String>,
}

impl VerseSegmenter {
    /// Create an idle segmenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub const fn state(&self) -> VerseState {
        self.state
    }

    /// Feed one event.
    pub fn feed(&mut self, event: SegmentEvent) {
        let (next, emitted) = transition(self.state, event);
        self.state = next;
        self.output.extend(emitted);
    }

    /// Close any open block and return the rendered lines.
    pub fn finish(mut self) -> Vec<String> {
        self.feed(SegmentEvent::End);
        self.output
    }
}

/// Render classified lines into segmenter events.
///
/// A chord line is merged with the next line only when that line is a lyric
/// line; otherwise it is rendered on its own. Labels and lyric lines pass
/// through as written. The returned events never include [`SegmentEvent::End`].
pub fn pair_lines(lines: &[Line<'_>]) -> Vec<SegmentEvent> {
    let mut events = Vec::with_capacity(lines.len());
    let mut i = 0;

    while let Some(line) = lines.get(i) {
        match line.kind {
            LineKind::Blank => {
                events.push(SegmentEvent::Blank);
                i += 1;
            }
            LineKind::SectionLabel | LineKind::LyricLine => {
                events.push(SegmentEvent::Line(line.raw.to_string()));
                i += 1;
            }
            LineKind::ChordLine => match lines.get(i + 1) {
                Some(next) if next.kind == LineKind::LyricLine => {
                    events.push(SegmentEvent::Line(merge_chord_lyric(line.raw, next.raw)));
                    i += 2;
                }
                _ => {
                    events.push(SegmentEvent::Line(render_chord_line(line.raw)));
                    i += 1;
                }
            },
        }
    }

    events
}

/// Pair and segment classified lines into `ChordPro` output lines.
pub fn segment(lines: &[Line<'_>]) -> Vec<String> {
    let mut segmenter = VerseSegmenter::new();
    for event in pair_lines(lines) {
        segmenter.feed(event);
    }
    segmenter.finish()
}
