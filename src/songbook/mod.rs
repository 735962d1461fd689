//! Song assembly and songbook segmentation.
//!
//! A [`Songbook`] turns raw chord sheet text into [`Song`] records. Single
//! songs go straight through title/artist extraction and `ChordPro`
//! rendering; multi-song documents are first cut into spans by
//! [`split_document`], which composes the page-marker split with the
//! multi-title split.

pub mod heading;
pub mod pages;
pub mod titles;

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{Config, Thresholds};
use crate::lyrics::{self, LineClassifier};
use crate::types::{SkipReason, Song, SongInput, SongSpan};

/// Cut a multi-song document into candidate song spans.
pub fn split_document(document: &str, classifier: &LineClassifier, thresholds: &Thresholds) -> Vec<SongSpan> {
    let pages = pages::split_pages(document, thresholds);
    tracing::debug!("Page split found {} candidate songs", pages.len());

    let spans: Vec<SongSpan> = pages
        .iter()
        .flat_map(|page| titles::split_titles(page, classifier, thresholds))
        .collect();
    if spans.len() > pages.len() {
        tracing::debug!("Title split recovered {} additional songs", spans.len() - pages.len());
    }

    spans
}

/// A candidate that did not become a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// 1-based position of the candidate in its batch.
    pub index: usize,
    /// Page the candidate came from, if known.
    pub page: Option<u32>,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Songs and skipped candidates from one conversion run, in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversion {
    /// Emitted songs.
    pub songs: Vec<Song>,
    /// Dropped candidates.
    pub skipped: Vec<Skipped>,
}

impl Conversion {
    fn push(&mut self, index: usize, page: Option<u32>, result: Result<Song, SkipReason>) {
        match result {
            Ok(song) => self.songs.push(song),
            Err(reason) => self.skipped.push(Skipped { index, page, reason }),
        }
    }

    /// Summary statistics.
    pub fn report(&self) -> Report {
        let total_chars: usize = self.songs.iter().map(|s| s.chordpro().chars().count()).sum();
        let mut skipped_by_reason = BTreeMap::new();
        for skipped in &self.skipped {
            *skipped_by_reason.entry(skipped.reason).or_insert(0) += 1;
        }

        Report {
            songs: self.songs.len(),
            skipped: self.skipped.len(),
            total_chars,
            average_chars: total_chars.checked_div(self.songs.len()).unwrap_or(0),
            skipped_by_reason,
        }
    }
}

/// Summary of a [`Conversion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of emitted songs.
    pub songs: usize,
    /// Number of dropped candidates.
    pub skipped: usize,
    /// Total `ChordPro` characters across emitted songs.
    pub total_chars: usize,
    /// Average `ChordPro` length of an emitted song.
    pub average_chars: usize,
    /// Dropped candidates per reason.
    pub skipped_by_reason: BTreeMap<SkipReason, usize>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} songs, {} skipped, {} ChordPro characters (average {})",
            self.songs, self.skipped, self.total_chars, self.average_chars
        )?;
        for (reason, count) in &self.skipped_by_reason {
            write!(f, "; {count} {reason}")?;
        }
        Ok(())
    }
}

/// Converts chord sheets into songs under one configuration.
#[derive(Debug, Clone)]
pub struct Songbook {
    config: Config,
    classifier: LineClassifier,
}

impl Default for Songbook {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Songbook {
    /// Create a songbook for the given configuration.
    pub fn new(config: Config) -> Self {
        let classifier = LineClassifier::from_config(&config);
        Self { config, classifier }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The line classifier built from the configuration.
    pub const fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Render a chord sheet as `ChordPro` text.
    pub fn to_chordpro(&self, text: &str) -> String {
        lyrics::to_chordpro(text, &self.classifier)
    }

    /// Cut a multi-song document into candidate spans.
    pub fn split(&self, document: &str) -> Vec<SongSpan> {
        split_document(document, &self.classifier, &self.config.thresholds)
    }

    /// Convert one song.
    ///
    /// A title or artist already set on `input` is used as given; otherwise
    /// they are read from the top of the text. `index` numbers the
    /// placeholder title used when nothing better is found.
    pub fn convert_song(&self, input: &SongInput, index: usize) -> Result<Song, SkipReason> {
        let thresholds = &self.config.thresholds;

        let (title, body) = match &input.title {
            Some(title) => (title.clone(), input.text.trim().to_string()),
            None => {
                let found = heading::extract_heading(&input.text, index, thresholds);
                (found.title, found.body)
            }
        };
        let title = heading::strip_source_suffix(&title, &self.config.default_artist);

        let (artist, body) = match input.artist.as_deref().map(str::trim) {
            Some(artist) if !artist.is_empty() => (artist.to_string(), body),
            _ => match heading::extract_attribution(&body, thresholds.header_region_lines) {
                Some(found) => (found.artist, found.body),
                None => (self.config.default_artist.clone(), body),
            },
        };

        let chordpro = self.to_chordpro(&body);
        let source = input.source.clone().unwrap_or_else(|| self.config.source.clone());

        Song::new(title, artist, chordpro, input.tags.iter().cloned(), source, thresholds.min_chordpro_len)
            .inspect(|song| tracing::debug!("Converted song {index}: {}", song.title()))
            .inspect_err(|reason| tracing::debug!("Skipped song {index}: {reason}"))
    }

    /// Convert one span cut from a multi-song document.
    pub fn convert_span(&self, span: &SongSpan, index: usize) -> Result<Song, SkipReason> {
        self.convert_song(&SongInput::new(span.text.as_str()), index)
    }

    /// Split a multi-song document and convert every span.
    ///
    /// Spans are converted in parallel; results keep document order.
    pub fn convert_document(&self, document: &str) -> Conversion {
        let spans = self.split(document);
        let results: Vec<Result<Song, SkipReason>> = spans
            .par_iter()
            .enumerate()
            .map(|(i, span)| self.convert_span(span, i + 1))
            .collect();

        let mut conversion = Conversion::default();
        for ((i, span), result) in spans.iter().enumerate().zip(results) {
            conversion.push(i + 1, span.page, result);
        }
        conversion
    }

    /// Convert independent single-song inputs.
    pub fn convert_batch(&self, inputs: &[SongInput]) -> Conversion {
        let results: Vec<Result<Song, SkipReason>> = inputs
            .par_iter()
            .enumerate()
            .map(|(i, input)| self.convert_song(input, i + 1))
            .collect();

        let mut conversion = Conversion::default();
        for (i, result) in results.into_iter().enumerate() {
            conversion.push(i + 1, None, result);
        }
        conversion
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const PESCADOR: &str = "Pescador de Hombres
De: Cesáreo Gabaráin

DO            SOL
Tú has venido a la orilla
FA              DO
no has buscado ni a sabios ni a ricos";

    #[test]
    fn test_convert_song_extracts_heading_and_artist() {
        let songbook = Songbook::default();
        let song = songbook.convert_song(&SongInput::new(PESCADOR), 1).unwrap();
        assert_eq!(song.title(), "Pescador de Hombres");
        assert_eq!(song.artist(), "Cesáreo Gabaráin");
        assert!(song.chordpro().starts_with("{start_of_verse}\n[DO]Tú has venido"));
        assert!(song.chordpro().ends_with("{end_of_verse}"));
    }

    #[test]
    fn test_convert_song_prefers_given_metadata() {
        let config = Config::default().with_default_artist("Música Católica");
        let songbook = Songbook::new(config);
        let input = SongInput::new(PESCADOR)
            .with_title("Pescador de Hombres - Música Católica")
            .with_tag("Entrada")
            .with_source("https://example.org/pescador");

        let song = songbook.convert_song(&input, 1).unwrap();
        assert_eq!(song.title(), "Pescador de Hombres");
        // The attribution line is still found in the header
        assert_eq!(song.artist(), "Cesáreo Gabaráin");
        assert!(song.tags().contains("Entrada"));
        assert_eq!(song.source(), "https://example.org/pescador");
        // With a given title, the text is all content
        assert!(song.chordpro().contains("Pescador de Hombres"));
    }

    #[test]
    fn test_convert_song_default_artist_and_source() {
        let config = Config::default().with_default_artist("Cancionero Jatari").with_source("PDF: cancionero.pdf");
        let songbook = Songbook::new(config);
        let text = "SANTO\nDO        FA\nSanto, santo, santo es el Señor\nSOL       DO\nDios del universo";
        let song = songbook.convert_song(&SongInput::new(text), 3).unwrap();
        assert_eq!(song.artist(), "Cancionero Jatari");
        assert_eq!(song.source(), "PDF: cancionero.pdf");
    }

    #[test]
    fn test_convert_song_reports_reasons() {
        let songbook = Songbook::default();
        let short = SongInput::new("SANTO\nC  G\nsanto");
        assert_eq!(songbook.convert_song(&short, 1).unwrap_err(), SkipReason::ContentTooShort);

        let untitled = SongInput::new(PESCADOR).with_title("   ");
        assert_eq!(songbook.convert_song(&untitled, 1).unwrap_err(), SkipReason::MissingTitle);
    }

    #[test]
    fn test_convert_batch_keeps_order_and_counts() {
        let songbook = Songbook::default();
        let inputs = vec![
            SongInput::new(PESCADOR),
            SongInput::new("   "),
            SongInput::new(PESCADOR).with_title("Second"),
        ];
        let conversion = songbook.convert_batch(&inputs);
        assert_eq!(conversion.songs.len(), 2);
        assert_eq!(conversion.songs[1].title(), "Second");
        assert_eq!(conversion.skipped, vec![Skipped { index: 2, page: None, reason: SkipReason::ContentTooShort }]);

        let report = conversion.report();
        assert_eq!(report.songs, 2);
        assert_eq!(report.skipped_by_reason.get(&SkipReason::ContentTooShort), Some(&1));
        assert!(report.to_string().contains("1 content too short"));
    }

    #[test]
    fn test_empty_report() {
        let report = Conversion::default().report();
        assert_eq!(report.average_chars, 0);
        assert_eq!(report.to_string(), "0 songs, 0 skipped, 0 ChordPro characters (average 0)");
    }
}
