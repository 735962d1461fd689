//! Application error types.
//!
//! The conversion engine itself never fails: candidates it cannot convert are
//! dropped with a [`crate::types::SkipReason`]. These errors cover the ambient
//! surface around it: configuration and reading input files.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Input parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_carries_hint() {
        let err = Error::config("CHORDSHEET_MIN_SONG_CHARS is not a number", "Use a whole number such as 50");
        let text = err.to_string();
        assert!(text.contains("CHORDSHEET_MIN_SONG_CHARS"));
        assert!(text.ends_with("Use a whole number such as 50"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io(source, std::path::PathBuf::from("songbook.txt"));
        match err {
            Error::Io { path: Some(p), .. } => assert_eq!(p, std::path::PathBuf::from("songbook.txt")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn parse_error_names_file() {
        let err = Error::parse("expected `[` at line 1", std::path::PathBuf::from("scraped.json"));
        assert_eq!(err.to_string(), "Parse error in Some(\"scraped.json\"): expected `[` at line 1");
    }
}
