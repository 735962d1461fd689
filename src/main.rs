//! `chordsheet` - convert chord sheets and songbook dumps to `ChordPro` songs.
//!
//! Usage:
//!   `chordsheet songbook cancionero.txt`
//!   `chordsheet songbook --start-page 40 page40.txt page41.txt`
//!   `chordsheet song pescador.txt --title "Pescador de Hombres" --tag Entrada`
//!   `chordsheet batch scraped.json --output songs.json`

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chordsheet::input::{read_song_inputs, read_text};
use chordsheet::{Config, Conversion, RawDocument, SongInput, Songbook};

/// Convert chord sheets into `ChordPro` songs.
#[derive(Parser)]
#[command(name = "chordsheet", version, about)]
struct Cli {
    /// Write JSON here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Artist used when a song names none
    #[arg(long, global = true)]
    default_artist: Option<String>,

    /// Source label stored on songs without their own
    #[arg(long, global = true)]
    source: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a multi-song document and convert every song
    Songbook {
        /// One marker-delimited document, or one file per page
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Page number of the first file when joining pages
        #[arg(long, default_value_t = 1)]
        start_page: u32,
    },
    /// Convert a single song
    Song {
        /// Chord sheet text file
        file: PathBuf,

        /// Song title (read from the first line otherwise)
        #[arg(long)]
        title: Option<String>,

        /// Artist
        #[arg(long)]
        artist: Option<String>,

        /// Tag to attach, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Convert a JSON array of scraped songs
    Batch {
        /// JSON file of `{text, title?, artist?, tags?, source?}` records
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(artist) = cli.default_artist {
        config = config.with_default_artist(artist);
    }
    if let Some(source) = cli.source.clone() {
        config = config.with_source(source);
    }
    let songbook = Songbook::new(config);

    let conversion = match cli.command {
        Command::Songbook { files, start_page } => {
            let document = if let [file] = files.as_slice() {
                RawDocument::read(file)?
            } else {
                RawDocument::read_pages(&files, start_page)?
            };
            tracing::info!("Read document with {} pages", document.page_count());
            songbook.convert_document(document.as_str())
        }
        Command::Song { file, title, artist, tags } => {
            let input = SongInput {
                text: read_text(&file)?,
                title,
                artist,
                tags,
                source: cli.source,
            };
            let mut conversion = Conversion::default();
            match songbook.convert_song(&input, 1) {
                Ok(song) => conversion.songs.push(song),
                Err(reason) => tracing::warn!("{}: skipped, {reason}", file.display()),
            }
            conversion
        }
        Command::Batch { file } => {
            let inputs = read_song_inputs(&file)?;
            tracing::info!("Converting {} songs from {}", inputs.len(), file.display());
            songbook.convert_batch(&inputs)
        }
    };

    for skipped in &conversion.skipped {
        tracing::info!("Skipped candidate {} (page {:?}): {}", skipped.index, skipped.page, skipped.reason);
    }
    tracing::info!("{}", conversion.report());

    let json = serde_json::to_string_pretty(&conversion.songs)?;
    match cli.output {
        Some(path) => {
            fs_err::write(&path, json)?;
            tracing::info!("Wrote {} songs to {}", conversion.songs.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
