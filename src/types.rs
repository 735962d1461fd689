//! Core type definitions shared by the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// Structural marker such as `CHORUS:`.
    SectionLabel,
    /// Line carrying chord symbols only.
    ChordLine,
    /// Anything else.
    LyricLine,
}

/// A chord symbol found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    /// Character index of the symbol in its source line.
    pub offset: usize,
    /// The chord symbol as written.
    pub symbol: String,
}

/// Why a candidate song was dropped instead of emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No usable title could be found or the given one was blank.
    MissingTitle,
    /// The rendered `ChordPro` text is below the minimum length.
    ContentTooShort,
}

impl SkipReason {
    /// Diagnostic text for this reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingTitle => "missing title",
            Self::ContentTooShort => "content too short",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted song, ready for a collaborator to persist or upload.
///
/// Fields are read-only once built; [`Song::new`] is the only validated
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    title: String,
    artist: String,
    chordpro: String,
    #[serde(default)]
    tags: BTreeSet<String>,
    #[serde(default, alias = "source_url")]
    source: String,
}

impl Song {
    /// Build a song, rejecting a blank title or `ChordPro` text whose trimmed
    /// length is below `min_chordpro_len` characters.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        chordpro: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
        source: impl Into<String>,
        min_chordpro_len: usize,
    ) -> Result<Self, SkipReason> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(SkipReason::MissingTitle);
        }

        let chordpro = chordpro.into();
        let content_len = chordpro.trim().chars().count();
        if content_len == 0 || content_len < min_chordpro_len {
            return Err(SkipReason::ContentTooShort);
        }

        Ok(Self {
            title,
            artist: artist.into().trim().to_string(),
            chordpro,
            tags: tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            source: source.into(),
        })
    }

    /// Song title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Performing or composing artist.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Verse-block-bracketed `ChordPro` text.
    pub fn chordpro(&self) -> &str {
        &self.chordpro
    }

    /// Tags attached by the collaborator.
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Source URL or label.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A single-song unit handed in by a collaborator.
///
/// Metadata the collaborator already resolved (for example the page heading of
/// a scraped song) takes precedence over what the engine would extract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInput {
    /// Raw chord sheet text.
    pub text: String,
    /// Title, if already known.
    #[serde(default)]
    pub title: Option<String>,
    /// Artist, if already known.
    #[serde(default)]
    pub artist: Option<String>,
    /// Tags to carry onto the song.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source URL or label.
    #[serde(default, alias = "source_url")]
    pub source: Option<String>,
}

impl SongInput {
    /// Create an input with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Set the known title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the known artist.
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Add a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the source URL or label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A candidate song cut out of a multi-song document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSpan {
    /// Page the span came from, when the document carries page markers.
    pub page: Option<u32>,
    /// Trimmed span text.
    pub text: String,
}
