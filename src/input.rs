//! Raw input documents.
//!
//! Multi-song sources arrive as one text blob with `--- PAGE <n> ---` marker
//! lines between pages, the layout a PDF text extractor produces. This module
//! builds such documents from per-page text and reads inputs from disk for the
//! binaries; the conversion engine itself only ever sees strings.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::songbook::pages::page_marker;
use crate::types::SongInput;

/// An unsegmented multi-song document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    /// Wrap text that already carries page markers (or none at all).
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Join per-page text, numbering pages from `start_page`.
    ///
    /// Pages with no text are left out but still take up their number.
    pub fn from_pages<I, S>(start_page: u32, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (number, page) in (start_page..).zip(pages) {
            let page = page.as_ref();
            if page.trim().is_empty() {
                continue;
            }
            let _ = write!(text, "\n--- PAGE {number} ---\n{page}\n");
        }
        Self { text }
    }

    /// Read a document from a file.
    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self::new(read_text(path)?))
    }

    /// Read one file per page and join them, numbering from `start_page`.
    pub fn read_pages(paths: &[PathBuf], start_page: u32) -> Result<Self> {
        let pages = paths
            .iter()
            .map(|path| read_text(path))
            .collect::<Result<Vec<String>>>()?;
        Ok(Self::from_pages(start_page, pages))
    }

    /// The document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of page markers in the document.
    pub fn page_count(&self) -> usize {
        self.text.lines().filter(|line| page_marker(line).is_some()).count()
    }
}

impl AsRef<str> for RawDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))
}

/// Read a JSON array of single-song inputs.
pub fn read_song_inputs(path: &Path) -> Result<Vec<SongInput>> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))
}
