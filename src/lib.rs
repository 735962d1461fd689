//! `chordsheet` - chord sheet to `ChordPro` conversion.
//!
//! Turns scraped or PDF-extracted chord sheets (chords on one line, lyrics on
//! the next) into `ChordPro` songs with inline `[CHORD]` markup and verse
//! blocks, and cuts multi-song songbook dumps into individual songs.

pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lyrics;
pub mod songbook;
pub mod types;

pub use config::{Config, Thresholds};
pub use error::{Error, Result};
pub use input::RawDocument;
pub use lyrics::{to_chordpro, LineClassifier};
pub use songbook::{Conversion, Report, Songbook};
pub use types::{ChordToken, LineKind, SkipReason, Song, SongInput, SongSpan};
