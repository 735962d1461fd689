//! Chord symbol recognition.
//!
//! Recognizes Latin letter-name chords (`Am7`, `F#m`, `G/B`, `Cadd9`) and
//! Spanish solfège chords (`DO`, `Rem`, `SOL7`, `Sib/Re`). Matching works on
//! whitespace-delimited tokens anchored at both ends, so a chord never matches
//! inside a word and bracketed `ChordPro` markup is never re-detected.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ChordToken;

/// Regex matching one complete chord symbol.
///
/// Solfège roots are accepted upper-case or capitalized; all-lowercase
/// `la`, `mi`, `si` are ordinary Spanish words.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    let root = r"(?:SOL|Sol|DO|Do|RE|Re|MI|Mi|FA|Fa|LA|La|SI|Si|[A-G])";
    let accidental = r"(?:#|b|♯|♭)?";
    let quality = r"(?:maj|min|m|dim|aug|sus|\+|°|ø)?";
    let extensions = r"\d*(?:(?:sus|add|maj|#|b)\d+)*";
    let pattern = format!("^{root}{accidental}{quality}{extensions}(?:/{root}{accidental})?$");
    Regex::new(&pattern).expect("valid regex: RE_CHORD")
});

/// Punctuation that may wrap a chord in a chord line, e.g. `(Am)` or `| G |`.
fn is_wrapping(c: char) -> bool {
    matches!(c, '(' | ')' | '|' | ',')
}

/// Whether `token` is a chord symbol on its own.
pub fn is_chord_symbol(token: &str) -> bool {
    !token.is_empty() && RE_CHORD.is_match(token)
}

/// Split a line into non-whitespace tokens with their character offsets.
pub fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    // (character offset, byte offset) of the token being read
    let mut start: Option<(usize, usize)> = None;

    for (char_idx, (byte_idx, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((offset, begin)) = start.take() {
                out.push((offset, &line[begin..byte_idx]));
            }
        } else if start.is_none() {
            start = Some((char_idx, byte_idx));
        }
    }

    if let Some((offset, begin)) = start {
        out.push((offset, &line[begin..]));
    }

    out
}

/// Interpret a single token as a chord, stripping wrapping punctuation.
///
/// `offset` is the token's character offset; the returned offset points at
/// the chord symbol itself.
pub fn chord_in_token(offset: usize, token: &str) -> Option<ChordToken> {
    let without_lead = token.trim_start_matches(is_wrapping);
    let lead = token.chars().count() - without_lead.chars().count();
    let symbol = without_lead.trim_end_matches(is_wrapping);

    is_chord_symbol(symbol).then(|| ChordToken {
        offset: offset + lead,
        symbol: symbol.to_string(),
    })
}

/// Find every chord symbol in a line, ordered by offset.
pub fn find_chords(line: &str) -> Vec<ChordToken> {
    tokens(line)
        .into_iter()
        .filter_map(|(offset, token)| chord_in_token(offset, token))
        .collect()
}

/// Number of chord symbols in a line.
pub fn chord_count(line: &str) -> usize {
    tokens(line)
        .into_iter()
        .filter(|&(offset, token)| chord_in_token(offset, token).is_some())
        .count()
}
