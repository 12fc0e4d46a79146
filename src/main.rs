//! discora
//!
//! # What this program is
//! A terminal tool that tags one album folder in one sitting: it scans a
//! directory for `.mp3` / `.flac` / `.m4a` / `.mp4` files, walks you
//! through confirming the tracklist, asks for album metadata with
//! sensible defaults, finds (or lets you pick) cover art, then writes
//! tags to every confirmed file.
//!
//! # How a session flows
//! **scan -> confirm tracklist -> album metadata -> cover art -> write tags -> summary**
//!
//! - The tracklist step is the only all-or-nothing gate: reject the final
//!   list and nothing on disk changes.
//! - After that gate, files are written one by one; a broken file is
//!   reported and the batch keeps going.
//!
//! # Architecture constraints (on purpose)
//! - `core::*` never touches stdin/stdout directly; every prompt goes
//!   through the `Console` seam so the full flow is testable.
//! - `session` owns the ordering; `main` only parses flags and picks the
//!   directory.

mod console;
mod core;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::metadata::{FALLBACK_ARTIST, FALLBACK_GENRE};
use crate::session::SessionOptions;

/// Command-line arguments for discora
#[derive(Parser, Debug)]
#[command(name = "discora")]
#[command(about = "Interactive batch tagger for one album directory")]
#[command(version)]
struct Args {
    /// Album directory to tag (defaults to the current directory)
    directory: Option<PathBuf>,

    /// Artist offered as the default at the metadata prompts
    #[arg(long, default_value = FALLBACK_ARTIST)]
    artist: String,

    /// Genre offered as the default at the metadata prompts
    #[arg(long, default_value = FALLBACK_GENRE)]
    genre: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discora=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let directory = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    session::run(&SessionOptions {
        directory,
        default_artist: args.artist,
        default_genre: args.genre,
    })
}
