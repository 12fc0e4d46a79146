//! Interactive tracklist confirmation.
//!
//! Walks the scanned files in order, asking include / skip / rename for
//! each, then shows the final list once for an all-or-nothing confirm.
//! Skipped files leave no hole: the survivors are renumbered 1..n.

use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::core::types::{CuratedTrack, TrackDecision, TrackFile};

/// How the confirmation round ended.
#[derive(Debug)]
pub enum CurationOutcome {
    /// The user approved this list. May be empty if every file was skipped.
    Confirmed(Vec<CuratedTrack>),
    /// The user rejected the final list; nothing gets tagged.
    Aborted,
}

/// Answer token for the per-file prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Include,
    Skip,
    Rename,
}

/// Whole-word match on the lowered answer. `n` skips, `r` or `rename`
/// renames, anything else (including `no`) includes.
fn parse_choice(raw: &str) -> Choice {
    match raw.to_ascii_lowercase().as_str() {
        "n" => Choice::Skip,
        "r" | "rename" => Choice::Rename,
        _ => Choice::Include,
    }
}

/// Title used when the file is included as-is: the file name without its
/// extension.
fn default_title(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

pub fn curate_tracklist<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    files: &[TrackFile],
) -> io::Result<CurationOutcome> {
    console.say("\n--- TRACKLIST CONFIRMATION ---")?;

    let total = files.len();
    let mut confirmed: Vec<CuratedTrack> = Vec::new();

    for (i, file) in files.iter().enumerate() {
        console.say(&format!("\n[{}/{}] File: '{}'", i + 1, total, file.name))?;

        let decision = match parse_choice(&console.ask("  Include? (Y/n/rename): ")?) {
            Choice::Skip => TrackDecision::Skipped,
            Choice::Include => TrackDecision::Included(default_title(&file.name)),
            Choice::Rename => {
                // The prompt numbers the file by its scan position, not by
                // the slot it will land in after earlier skips.
                let title = console.ask(&format!("  Enter new title for track {}: ", i + 1))?;
                TrackDecision::Included(title)
            }
        };

        match decision {
            TrackDecision::Included(title) => confirmed.push(CuratedTrack {
                file: file.clone(),
                title,
            }),
            TrackDecision::Skipped => {
                console.say(&format!("  --> Skipping track: {}", file.name))?;
            }
        }
    }

    console.say("\n--- FINAL TRACKLIST ---")?;
    for (i, track) in confirmed.iter().enumerate() {
        console.say(&format!("  {}. {} ({})", i + 1, track.title, track.file.name))?;
    }

    if console.confirm("Confirm final tracklist order? (Y/n): ")? {
        Ok(CurationOutcome::Confirmed(confirmed))
    } else {
        console.say("Aborting. Please re-run to re-order/re-confirm.")?;
        Ok(CurationOutcome::Aborted)
    }
}
