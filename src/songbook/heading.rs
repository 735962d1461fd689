//! Title and artist extraction from the top of a song.

use crate::config::Thresholds;

// Allow expect for compile-time constant regex patterns in lazy_static blocks
#[allow(clippy::expect_used)]
mod patterns {
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        /// Leading ordinal such as `12. `
        pub static ref ORDINAL: Regex = Regex::new(r"^\d+\.\s*").expect("valid regex: ORDINAL");
        /// Trailing run of dashes
        pub static ref TRAILING_DASHES: Regex = Regex::new(r"\s*-+\s*$").expect("valid regex: TRAILING_DASHES");
        /// Residue of a page marker cut in half, `PAGE 40 ---`
        pub static ref PAGE_RESIDUE: Regex = Regex::new(r"^PAGE\s+\d+\s*---\s*").expect("valid regex: PAGE_RESIDUE");
        /// A whole `--- ... ---` separator line
        pub static ref SEPARATOR: Regex = Regex::new(r"^\s*---.*---\s*$").expect("valid regex: SEPARATOR");
        /// Attribution line such as `De: Cesáreo Gabaráin` or `By: John Newton`
        pub static ref ATTRIBUTION: Regex = Regex::new(
            r"(?i)^(?:de|by|autor|autora|author|artist|artista|letra y m[uú]sica)\s*:\s*(\S.*)$"
        ).expect("valid regex: ATTRIBUTION");
    }
}

/// A title and the song text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Extracted or synthesized title.
    pub title: String,
    /// Song text after the title line.
    pub body: String,
}

/// An artist named in the song header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// The named artist.
    pub artist: String,
    /// Song text with the attribution line removed.
    pub body: String,
}

/// Strip numbering, dash runs and page marker residue from a heading line.
pub fn clean_heading(line: &str) -> String {
    let cleaned = patterns::SEPARATOR.replace(line.trim(), "");
    let cleaned = patterns::ORDINAL.replace(&cleaned, "");
    let cleaned = patterns::PAGE_RESIDUE.replace(&cleaned, "");
    let cleaned = patterns::TRAILING_DASHES.replace(&cleaned, "");
    cleaned.trim().to_string()
}

/// Take the title from the first line that cleans to a plausible heading.
///
/// Falls back to the first line that isn't a `---` separator, truncated to
/// `fallback_title_len` characters (the body then keeps that line), and
/// finally to `"Song <index>"`.
pub fn extract_heading(text: &str, index: usize, thresholds: &Thresholds) -> Heading {
    let lines: Vec<&str> = text.trim().lines().collect();

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let title = clean_heading(line);
        let len = title.chars().count();
        if len > thresholds.heading_min_len && len < thresholds.heading_max_len {
            return Heading {
                title,
                body: lines[i + 1..].join("\n").trim().to_string(),
            };
        }
    }

    let body = lines.join("\n");
    let fallback = lines
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && !l.starts_with("---"))
        .map(|l| l.chars().take(thresholds.fallback_title_len).collect::<String>());

    Heading {
        title: fallback.unwrap_or_else(|| format!("Song {index}")),
        body,
    }
}

/// Find an attribution line among the first `header_lines` non-blank lines.
pub fn extract_attribution(body: &str, header_lines: usize) -> Option<Attribution> {
    let lines: Vec<&str> = body.lines().collect();

    let (at, artist) = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .take(header_lines)
        .find_map(|(i, l)| {
            let caps = patterns::ATTRIBUTION.captures(l.trim())?;
            let artist = caps.get(1)?.as_str().trim().to_string();
            Some((i, artist))
        })?;

    let rest: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != at)
        .map(|(_, l)| *l)
        .collect();

    Some(Attribution {
        artist,
        body: rest.join("\n").trim().to_string(),
    })
}

/// Drop a trailing source label from a title, e.g.
/// `"Pescador de Hombres - Música Católica"` → `"Pescador de Hombres"`.
///
/// The comparison is case-insensitive; the joining `-`, `:`, `–` and spaces
/// are trimmed too.
pub fn strip_source_suffix(title: &str, label: &str) -> String {
    let trimmed = title.trim();
    let label = label.trim();
    if label.is_empty() {
        return trimmed.to_string();
    }

    let title_chars: Vec<char> = trimmed.chars().collect();
    let label_chars: Vec<char> = label.chars().collect();
    let Some(cut) = title_chars.len().checked_sub(label_chars.len()) else {
        return trimmed.to_string();
    };

    let matches = title_chars[cut..]
        .iter()
        .zip(&label_chars)
        .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
    if !matches {
        return trimmed.to_string();
    }

    title_chars[..cut]
        .iter()
        .collect::<String>()
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | '–'))
        .to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_clean_heading() {
        assert_eq!(clean_heading("12. CANTO DE ENTRADA"), "CANTO DE ENTRADA");
        assert_eq!(clean_heading("Alma Misionera ----"), "Alma Misionera");
        assert_eq!(clean_heading("PAGE 40 --- Santo"), "Santo");
        assert_eq!(clean_heading("--- PAGE 40 ---"), "");
    }

    #[test]
    fn test_extract_heading_skips_unusable_lines() {
        let text = "\n--- PAGE 3 ---\n7.\n1. SANTO\nC   G\nSanto, santo, santo";
        let heading = extract_heading(text, 1, &Thresholds::default());
        assert_eq!(heading.title, "SANTO");
        assert_eq!(heading.body, "C   G\nSanto, santo, santo");
    }

    #[test]
    fn test_extract_heading_bounds_are_exclusive() {
        let thresholds = Thresholds { heading_min_len: 2, heading_max_len: 6, ..Thresholds::default() };
        // "ab" is too short and "abcdef" too long; "abc" fits
        let heading = extract_heading("ab\nabcdef\nabc\nrest", 1, &thresholds);
        assert_eq!(heading.title, "abc");
        assert_eq!(heading.body, "rest");
    }

    #[test]
    fn test_extract_heading_fallback_truncates() {
        let long = "x".repeat(120);
        let heading = extract_heading(&long, 4, &Thresholds::default());
        assert_eq!(heading.title.chars().count(), 50);
        assert_eq!(heading.body, long);
    }

    #[test]
    fn test_extract_heading_placeholder() {
        let heading = extract_heading("--- PAGE 9 ---\n  \n", 7, &Thresholds::default());
        assert_eq!(heading.title, "Song 7");
    }

    #[test]
    fn test_extract_attribution() {
        let body = "De: Cesáreo Gabaráin\n\nC    G\nTú has venido";
        let found = extract_attribution(body, 3).unwrap();
        assert_eq!(found.artist, "Cesáreo Gabaráin");
        assert_eq!(found.body, "C    G\nTú has venido");
    }

    #[test]
    fn test_attribution_only_in_header() {
        let body = "line one\nline two\nline three\nBy: Someone";
        assert!(extract_attribution(body, 3).is_none());
        assert!(extract_attribution(body, 4).is_some());
        assert!(extract_attribution("de todo corazón", 3).is_none());
    }

    #[test]
    fn test_strip_source_suffix() {
        assert_eq!(strip_source_suffix("Pescador de Hombres - Música Católica", "Música Católica"), "Pescador de Hombres");
        assert_eq!(strip_source_suffix("Alma Misionera música católica", "Música Católica"), "Alma Misionera");
        assert_eq!(strip_source_suffix("Santo", "Música Católica"), "Santo");
        assert_eq!(strip_source_suffix("  Santo  ", ""), "Santo");
        assert_eq!(strip_source_suffix("Música Católica", "Música Católica"), "");
    }
}
