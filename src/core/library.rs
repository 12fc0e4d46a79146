use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::{FormatKind, TrackFile};

/// Everything one directory scan found, with both lists already sorted by
/// file name so track numbering and cover selection are deterministic.
#[derive(Debug, Default)]
pub struct Scan {
    pub tracks: Vec<TrackFile>,
    pub images: Vec<PathBuf>,
}

/// Scan a single directory for audio files and cover art candidates.
///
/// Not recursive: an album is one flat folder. Subdirectories, unsupported
/// extensions, and non-UTF-8 names are ignored.
pub fn scan_directory(dir: &Path) -> io::Result<Scan> {
    let mut scan = Scan::default();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            debug!(path = %path.display(), "skipping subdirectory");
            continue;
        }

        let Some(name) = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string)
        else {
            debug!(path = %path.display(), "skipping non-UTF-8 file name");
            continue;
        };

        if let Some(format) = FormatKind::from_path(&path) {
            scan.tracks.push(TrackFile {
                name,
                path,
                format: Some(format),
            });
        } else if is_image(&path) {
            scan.images.push(path);
        } else {
            debug!(file = %name, "ignoring unsupported file");
        }
    }

    scan.tracks.sort_by(|a, b| a.name.cmp(&b.name));
    scan.images.sort();

    Ok(scan)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            ext.eq_ignore_ascii_case("jpg")
                || ext.eq_ignore_ascii_case("jpeg")
                || ext.eq_ignore_ascii_case("png")
        })
        .unwrap_or(false)
}
