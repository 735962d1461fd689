//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use crate::constants;
use crate::error::{Error, Result};

/// Heuristic bounds injected into the classifier and boundary detector.
///
/// Bounds described as exclusive are compared with `>` / `<`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    /// Chord tokens needed for a chord line.
    pub min_chord_matches: usize,
    /// Candidates with trimmed length at or below this are discarded.
    pub min_candidate_len: usize,
    /// Exclusive lower bound on potential title length.
    pub title_min_len: usize,
    /// Exclusive upper bound on potential title length.
    pub title_max_len: usize,
    /// Lines searched after a potential title.
    pub title_lookahead: usize,
    /// Exclusive lower bound on the length of a content line after a title.
    pub content_line_min_len: usize,
    /// Narrow potential titles to heading-shaped lines: at the top of the
    /// candidate or after a blank line, not a section label, and either all
    /// upper-case or directly above a chord line. Off gives the bare
    /// length/lookahead rule.
    pub title_requires_heading_shape: bool,
    /// Exclusive lower bound on extracted heading length.
    pub heading_min_len: usize,
    /// Exclusive upper bound on extracted heading length.
    pub heading_max_len: usize,
    /// Fallback title truncation length.
    pub fallback_title_len: usize,
    /// Minimum trimmed `ChordPro` length of an emitted song.
    pub min_chordpro_len: usize,
    /// Non-blank lines after the title searched for an attribution.
    pub header_region_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_chord_matches: constants::chords::MIN_CHORD_MATCHES,
            min_candidate_len: constants::boundary::MIN_CANDIDATE_LEN,
            title_min_len: constants::boundary::TITLE_MIN_LEN,
            title_max_len: constants::boundary::TITLE_MAX_LEN,
            title_lookahead: constants::boundary::TITLE_LOOKAHEAD,
            content_line_min_len: constants::boundary::CONTENT_LINE_MIN_LEN,
            title_requires_heading_shape: constants::boundary::TITLE_REQUIRES_HEADING_SHAPE,
            heading_min_len: constants::song::HEADING_MIN_LEN,
            heading_max_len: constants::song::HEADING_MAX_LEN,
            fallback_title_len: constants::song::FALLBACK_TITLE_LEN,
            min_chordpro_len: constants::song::MIN_CHORDPRO_LEN,
            header_region_lines: constants::song::HEADER_REGION_LINES,
        }
    }
}

/// Configuration for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Heuristic bounds
    pub thresholds: Thresholds,
    /// Artist used when a song names none
    pub default_artist: String,
    /// Source label stored on songs that carry no source of their own
    pub source: String,
    /// Section label vocabulary, upper-cased
    pub section_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            default_artist: constants::song::DEFAULT_ARTIST.to_string(),
            source: String::new(),
            section_labels: constants::labels::SECTION_LABELS
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Split from [`Config::load`] so overrides can be tested without touching
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(artist) = lookup("CHORDSHEET_DEFAULT_ARTIST") {
            config.default_artist = artist;
        }

        if let Some(source) = lookup("CHORDSHEET_SOURCE") {
            config.source = source;
        }

        if let Some(value) = lookup("CHORDSHEET_MIN_CHORD_MATCHES") {
            config.thresholds.min_chord_matches = parse_count("CHORDSHEET_MIN_CHORD_MATCHES", &value)?;
            if config.thresholds.min_chord_matches == 0 {
                return Err(Error::config(
                    "CHORDSHEET_MIN_CHORD_MATCHES must be at least 1",
                    "A value of 0 would classify every line as chords",
                ));
            }
        }

        if let Some(value) = lookup("CHORDSHEET_MIN_SONG_CHARS") {
            config.thresholds.min_chordpro_len = parse_count("CHORDSHEET_MIN_SONG_CHARS", &value)?;
        }

        if let Some(value) = lookup("CHORDSHEET_MIN_CANDIDATE_CHARS") {
            config.thresholds.min_candidate_len = parse_count("CHORDSHEET_MIN_CANDIDATE_CHARS", &value)?;
        }

        if let Some(value) = lookup("CHORDSHEET_TITLE_HEADING_SHAPE") {
            config.thresholds.title_requires_heading_shape = parse_flag("CHORDSHEET_TITLE_HEADING_SHAPE", &value)?;
        }

        if let Some(value) = lookup("CHORDSHEET_SECTION_LABELS") {
            let labels: Vec<String> = value
                .split(',')
                .map(|label| label.trim().to_uppercase())
                .filter(|label| !label.is_empty())
                .collect();
            if !labels.is_empty() {
                config.section_labels = labels;
            }
        }

        Ok(config)
    }

    /// Use `source` as the default source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Use `artist` as the default artist.
    #[must_use]
    pub fn with_default_artist(mut self, artist: impl Into<String>) -> Self {
        self.default_artist = artist.into();
        self
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        Error::config(
            format!("{key} must be a whole number, got {value:?}"),
            "Set it to a non-negative integer or remove it from the environment",
        )
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(
            format!("{key} must be a boolean, got {value:?}"),
            "Use true or false",
        )),
    }
}
