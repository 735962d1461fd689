//! Application constants.
//!
//! Centralizes the heuristic thresholds used by the classifier and the song
//! boundary detector. Runtime values live in [`crate::config::Thresholds`],
//! which defaults to these.

/// Chord detection constants.
pub mod chords {
    /// Minimum number of chord tokens for a line to count as a chord line.
    pub const MIN_CHORD_MATCHES: usize = 2;
}

/// Section label vocabulary.
pub mod labels {
    /// Labels recognized at the start of a line, compared upper-cased.
    pub const SECTION_LABELS: &[&str] = &[
        "INTRO:",
        "VERSE:",
        "PRE-CHORUS:",
        "CHORUS:",
        "BRIDGE:",
        "INTERLUDE:",
        "OUTRO:",
        "CODA:",
        "ESTRIBILLO:",
        "VERSO:",
        "CORO:",
        "PUENTE:",
        "INTERLUDIO:",
    ];
}

/// Song boundary detection constants.
pub mod boundary {
    /// Candidates whose trimmed length is at or below this are discarded.
    pub const MIN_CANDIDATE_LEN: usize = 50;

    /// Potential titles must be longer than this.
    pub const TITLE_MIN_LEN: usize = 3;

    /// Potential titles must be shorter than this.
    pub const TITLE_MAX_LEN: usize = 80;

    /// Number of lines after a potential title searched for real content.
    pub const TITLE_LOOKAHEAD: usize = 3;

    /// A content line following a title must be longer than this.
    pub const CONTENT_LINE_MIN_LEN: usize = 10;

    /// Potential titles must also sit in heading position and look like one.
    pub const TITLE_REQUIRES_HEADING_SHAPE: bool = true;
}

/// Song assembly constants.
pub mod song {
    /// Extracted headings must be longer than this.
    pub const HEADING_MIN_LEN: usize = 2;

    /// Extracted headings must be shorter than this.
    pub const HEADING_MAX_LEN: usize = 100;

    /// Fallback titles are truncated to this many characters.
    pub const FALLBACK_TITLE_LEN: usize = 50;

    /// Songs whose trimmed `ChordPro` text is shorter than this are dropped.
    pub const MIN_CHORDPRO_LEN: usize = 50;

    /// Non-blank lines after the title searched for an attribution line.
    pub const HEADER_REGION_LINES: usize = 3;

    /// Artist used when the document names none.
    pub const DEFAULT_ARTIST: &str = "Unknown Artist";
}

/// `ChordPro` directives.
pub mod directives {
    /// Opens a verse block.
    pub const START_OF_VERSE: &str = "{start_of_verse}";

    /// Closes a verse block.
    pub const END_OF_VERSE: &str = "{end_of_verse}";
}
