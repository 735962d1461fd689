//! Chord and lyric line merging.

use crate::chords;

/// Merge a chord line into the lyric line below it.
///
/// Every non-whitespace token of the chord line is spliced into the lyric as
/// `[token]`, left to right. The insertion point is the token's offset plus
/// the length of everything inserted so far, clipped to the lyric's current
/// length, trailing whitespace included. The running total assumes the lyric keeps a 1:1 column alignment
/// with the chord line; when the source doesn't (re-flowed PDF text, a lyric
/// shorter than its chords) placement is only approximate.
pub fn merge_chord_lyric(chord_line: &str, lyric_line: &str) -> String {
    let mut lyric: Vec<char> = lyric_line.chars().collect();
    let mut inserted = 0;

    for (offset, token) in chords::tokens(chord_line) {
        let at = (offset + inserted).min(lyric.len());
        let tail = lyric.split_off(at);
        let before = lyric.len();
        lyric.push('[');
        lyric.extend(token.chars());
        lyric.push(']');
        inserted += lyric.len() - before;
        lyric.extend(tail);
    }

    lyric.into_iter().collect()
}

/// Render a chord line that has no lyric line to merge into.
///
/// Chords become `[chord]` with no space between adjacent chords; any other
/// token is kept as written, one space away from its neighbours.
pub fn render_chord_line(chord_line: &str) -> String {
    let mut out = String::new();
    let mut prev_was_chord: Option<bool> = None;

    for (offset, token) in chords::tokens(chord_line) {
        let chord = chords::chord_in_token(offset, token);
        let is_chord = chord.is_some();

        if let Some(prev) = prev_was_chord {
            if !(prev && is_chord) {
                out.push(' ');
            }
        }

        match chord {
            Some(chord) => {
                out.push('[');
                out.push_str(&chord.symbol);
                out.push(']');
            }
            None => out.push_str(token),
        }
        prev_was_chord = Some(is_chord);
    }

    out
}
