//! One end-to-end tagging session.
//!
//! The order is fixed: banner, scan, tracklist confirmation, album
//! metadata, cover resolution, tag application, summary. Interaction goes
//! through a `Console` and a `CoverPicker` handed in by the caller, so the
//! whole flow runs under tests with scripted input and a canned picker.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use tracing::{info, warn};

use crate::console::Console;
use crate::core::cover::{self, CoverPicker, NativeDialog};
use crate::core::curate::{self, CurationOutcome};
use crate::core::engine::{self, TagWriteOutcome, TrackReport};
use crate::core::library;
use crate::core::metadata::{self, MetadataDefaults};
use crate::core::types::{AlbumMetadata, CoverArt, CoverImage};

/// Command-line knobs the session runs under.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub directory: PathBuf,
    pub default_artist: String,
    pub default_genre: String,
}

/// Run a session on stdin/stdout with the native file dialog.
pub fn run(options: &SessionOptions) -> anyhow::Result<()> {
    let mut console = Console::stdio();
    let mut picker = NativeDialog;
    run_with(&mut console, &mut picker, options)
}

pub fn run_with<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    picker: &mut dyn CoverPicker,
    options: &SessionOptions,
) -> anyhow::Result<()> {
    let directory = options
        .directory
        .canonicalize()
        .with_context(|| format!("cannot open directory {}", options.directory.display()))?;

    console.say("---------------------------------------")?;
    console.say(&format!("discora v{}", env!("CARGO_PKG_VERSION")))?;
    console.say(&format!("Current Directory: {}", directory.display()))?;
    console.say(&format!(
        "Session Timestamp: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    console.say("---------------------------------------")?;

    let scan = library::scan_directory(&directory)
        .with_context(|| format!("cannot scan {}", directory.display()))?;
    if scan.tracks.is_empty() {
        console.say("No supported audio files (.mp3, .flac, .m4a, .mp4) found.")?;
        return Ok(());
    }
    info!(
        tracks = scan.tracks.len(),
        images = scan.images.len(),
        "scan complete"
    );

    let tracklist = match curate::curate_tracklist(console, &scan.tracks)? {
        CurationOutcome::Confirmed(tracks) => tracks,
        CurationOutcome::Aborted => return Ok(()),
    };
    if tracklist.is_empty() {
        console.say("No tracks selected. Nothing to tag.")?;
        return Ok(());
    }

    let defaults = MetadataDefaults::new(
        &directory,
        &options.default_artist,
        &options.default_genre,
    );
    let album = metadata::collect_album_metadata(console, &defaults)?;

    // Resolve a cover path, then read its bytes once for the whole batch.
    // A resolved path that cannot be read downgrades the run to no
    // artwork, and the summary says so honestly.
    let (cover_art, cover_image) = match cover::resolve_cover(console, picker, &scan.images)? {
        Some(art) => match std::fs::read(&art.path) {
            Ok(data) => {
                let image = CoverImage {
                    mime: art.mime,
                    data,
                };
                (Some(art), Some(image))
            }
            Err(e) => {
                warn!(path = %art.path.display(), error = %e, "cannot read cover image");
                console.say(&format!(
                    "Could not read cover art {}. Continuing without artwork.",
                    art.path.display()
                ))?;
                (None, None)
            }
        },
        None => (None, None),
    };

    let reports = engine::apply_tags(console, &tracklist, &album, cover_image.as_ref())?;

    print_summary(console, &album, cover_art.as_ref(), &reports)?;
    Ok(())
}

fn print_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    album: &AlbumMetadata,
    cover: Option<&CoverArt>,
    reports: &[TrackReport],
) -> io::Result<()> {
    console.say("\n--- SESSION SUMMARY ---")?;
    console.say(&format!("Album : {}", album.title))?;
    console.say(&format!("Artist: {}", album.artist))?;
    console.say(&format!("Genre : {}", album.genre))?;
    console.say(&format!("Year  : {}", album.year))?;
    match cover {
        Some(art) => console.say(&format!("Cover : {}", art.path.display()))?,
        None => console.say("Cover : (not embedded)")?,
    }

    let mut tagged = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for report in reports {
        match report.outcome {
            TagWriteOutcome::Tagged => tagged += 1,
            TagWriteOutcome::Skipped(_) => skipped += 1,
            TagWriteOutcome::Failed(_) => failed += 1,
        }
    }
    console.say(&format!(
        "Tracks: {tagged} tagged, {skipped} skipped, {failed} failed"
    ))?;

    for report in reports {
        match &report.outcome {
            TagWriteOutcome::Tagged => {}
            TagWriteOutcome::Skipped(reason) => {
                console.say(&format!("  skipped {}: {}", report.file_name, reason))?;
            }
            TagWriteOutcome::Failed(e) => {
                console.say(&format!("  failed  {}: {}", report.file_name, e))?;
            }
        }
    }

    if skipped == 0 && failed == 0 {
        console.say("\nAll tracks tagged successfully. Execution complete.")?;
    } else {
        console.say("\nExecution complete.")?;
    }
    Ok(())
}
