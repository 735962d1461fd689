//! Dump the song spans found in a songbook document, for tuning the
//! boundary heuristics.
//!
//! Usage: cargo run --bin dump_spans -- cancionero.txt

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing_subscriber::EnvFilter;

use chordsheet::songbook::heading::extract_heading;
use chordsheet::{Config, RawDocument, Songbook};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_target(false)
        .init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: dump_spans <document>");
    };

    let songbook = Songbook::new(Config::load()?);
    let document = RawDocument::read(&path)?;
    let spans = songbook.split(document.as_str());

    println!("=== {} pages, {} spans ===", document.page_count(), spans.len());
    for (i, span) in spans.iter().enumerate() {
        let heading = extract_heading(&span.text, i + 1, &songbook.config().thresholds);
        let page = span.page.map_or_else(|| "-".to_string(), |p| p.to_string());
        let status = match songbook.convert_span(span, i + 1) {
            Ok(_) => "ok".to_string(),
            Err(reason) => format!("skipped: {reason}"),
        };
        println!(
            "{:>4}. page {:>4} | {:>5} chars | {} [{status}]",
            i + 1,
            page,
            span.text.chars().count(),
            heading.title,
        );
    }

    Ok(())
}
