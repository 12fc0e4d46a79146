//! Batch tag application.
//!
//! One pass over the confirmed tracklist. Every file is written on its
//! own; a failure is reported and the loop moves on, so one corrupt file
//! cannot sink the rest of the batch. Track numbers come from list
//! position, which means an unsupported file still consumes its slot.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::console::Console;
use crate::core::tags::{self, TagError, TrackTags};
use crate::core::types::{AlbumMetadata, CoverImage, CuratedTrack};

/// What happened to one file.
#[derive(Debug)]
pub enum TagWriteOutcome {
    Tagged,
    /// Never attempted; the reason says why.
    Skipped(String),
    Failed(TagError),
}

#[derive(Debug)]
pub struct TrackReport {
    pub file_name: String,
    pub outcome: TagWriteOutcome,
}

pub fn apply_tags<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tracklist: &[CuratedTrack],
    album: &AlbumMetadata,
    cover: Option<&CoverImage>,
) -> io::Result<Vec<TrackReport>> {
    console.say("\n--- APPLYING TAGS ---")?;

    let total = tracklist.len();
    let mut reports = Vec::with_capacity(total);

    for (i, track) in tracklist.iter().enumerate() {
        let number = i + 1;

        let Some(format) = track.file.format else {
            console.say(&format!(
                "  [SKIPPED] Cannot handle file type for {}",
                track.file.name
            ))?;
            reports.push(TrackReport {
                file_name: track.file.name.clone(),
                outcome: TagWriteOutcome::Skipped("unsupported format".to_string()),
            });
            continue;
        };

        console.say(&format!(
            "  [{}/{}] Tagging: {}...",
            number, total, track.title
        ))?;

        let request = TrackTags {
            path: &track.file.path,
            title: &track.title,
            album,
            number,
            total,
            cover,
        };

        let outcome = match tags::write_track(format, &request) {
            Ok(()) => {
                debug!(file = %track.file.name, number, "tagged");
                TagWriteOutcome::Tagged
            }
            Err(e) => {
                warn!(file = %track.file.name, error = %e, "tag write failed");
                console.say(&format!(
                    "  [ERROR] Tagging failed for {}: {e}",
                    track.file.name
                ))?;
                TagWriteOutcome::Failed(e)
            }
        };

        reports.push(TrackReport {
            file_name: track.file.name.clone(),
            outcome,
        });
    }

    Ok(reports)
}
