//! Cover art resolution.
//!
//! Three rungs, tried in order:
//! 1. Exactly one candidate in the folder wins outright.
//! 2. Several candidates get a numbered menu; the first is the default.
//! 3. None at all triggers the manual fallback: native file dialog,
//!    then a typed path, then giving up. Cancelling the dialog drops to
//!    the typed-path rung instead of silently ending the hunt.
//!
//! Resolution only picks a path and a MIME type. Nothing here reads image
//! bytes; the session does that once, right before tagging.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::core::types::CoverArt;

/// Source of a manually chosen image path. Production uses the native
/// file dialog; tests substitute canned pickers.
pub trait CoverPicker {
    /// `None` means the picker was cancelled or could not open.
    fn pick(&mut self) -> Option<PathBuf>;
}

/// Blocking picker backed by the platform file dialog.
pub struct NativeDialog;

impl CoverPicker for NativeDialog {
    fn pick(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select cover art image")
            .add_filter("Image files", &["jpg", "jpeg", "png"])
            .pick_file()
    }
}

pub fn resolve_cover<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    picker: &mut dyn CoverPicker,
    images: &[PathBuf],
) -> io::Result<Option<CoverArt>> {
    match images {
        [] => {}
        [single] => {
            console.say(&format!("\nFound cover art: {}", file_name(single)))?;
            return Ok(Some(CoverArt::from_path(single.clone())));
        }
        _ => {
            console.say(&format!(
                "\n{} images detected. Please choose which one to embed:",
                images.len()
            ))?;
            for (i, image) in images.iter().enumerate() {
                console.say(&format!("  {}. {}", i + 1, file_name(image)))?;
            }

            let raw = console.ask("Select image number or press Enter to use the first: ")?;
            let (index, warn) = choose_index(&raw, images.len());
            if warn {
                console.say("Invalid choice. Defaulting to the first image.")?;
            }

            let chosen = &images[index];
            console.say(&format!("\nUsing cover art: {}", file_name(chosen)))?;
            return Ok(Some(CoverArt::from_path(chosen.clone())));
        }
    }

    console.say("\nNo cover art image (*.jpg/*.png) detected in this folder.")?;
    manual_cover(console, picker)
}

fn manual_cover<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    picker: &mut dyn CoverPicker,
) -> io::Result<Option<CoverArt>> {
    let answer = console.ask("Would you like to select a cover image manually? (Y/n): ")?;
    if declines(&answer) {
        return Ok(None);
    }

    let path = match picker.pick() {
        Some(path) => Some(path),
        None => {
            let typed = console.ask("Enter full path to image file (or press Enter to skip): ")?;
            let typed = typed.trim();
            if typed.is_empty() {
                None
            } else {
                Some(PathBuf::from(typed))
            }
        }
    };

    let Some(path) = path else {
        return Ok(None);
    };

    if !path.is_file() {
        console.say("Provided cover art path does not exist. Skipping cover art.")?;
        return Ok(None);
    }

    console.say(&format!("\nUsing manual cover art: {}", path.display()))?;
    Ok(Some(CoverArt::from_path(path)))
}

/// Menu answer handling. Returns the zero-based index to use plus whether
/// the fallback deserves a warning: an in-range number selects it, digits
/// out of range warn, and anything non-numeric (or blank) silently takes
/// the first image.
fn choose_index(raw: &str, count: usize) -> (usize, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return (0, false);
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => (n - 1, false),
        _ => (0, true),
    }
}

/// Non-empty answers starting with `n` (any case) decline; everything
/// else, including plain Enter, proceeds.
fn declines(raw: &str) -> bool {
    let lowered = raw.trim().to_ascii_lowercase();
    !lowered.is_empty() && lowered.starts_with('n')
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
