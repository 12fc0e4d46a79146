//! Album-level metadata prompts.
//!
//! Four questions, each with a visible default that plain Enter accepts.
//! One answer set covers the whole batch; per-track fields (title, number)
//! come from the curated list instead.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Datelike, Local};

use crate::console::Console;
use crate::core::types::AlbumMetadata;

/// Artist offered when the command line names none.
pub const FALLBACK_ARTIST: &str = "Unknown Smuggler";
/// Genre offered when the command line names none.
pub const FALLBACK_GENRE: &str = "Imperial Underground";

/// Defaults shown at each prompt. Built once per session so the year
/// cannot roll over between prompts.
#[derive(Debug, Clone)]
pub struct MetadataDefaults {
    pub album_title: String,
    pub artist: String,
    pub genre: String,
    pub year: String,
}

impl MetadataDefaults {
    pub fn new(directory: &Path, artist: &str, genre: &str) -> MetadataDefaults {
        MetadataDefaults {
            album_title: infer_album_title(directory),
            artist: artist.to_string(),
            genre: genre.to_string(),
            year: Local::now().year().to_string(),
        }
    }
}

/// The folder name doubles as the default album title.
fn infer_album_title(directory: &Path) -> String {
    directory
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Untitled Album")
        .to_string()
}

pub fn collect_album_metadata<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    defaults: &MetadataDefaults,
) -> io::Result<AlbumMetadata> {
    console.say("\n--- ALBUM METADATA ---")?;

    let title = console.ask_or(
        &format!("Enter Album Title (Default: {}): ", defaults.album_title),
        &defaults.album_title,
    )?;
    let artist = console.ask_or(
        &format!("Enter Artist Name (Default: {}): ", defaults.artist),
        &defaults.artist,
    )?;
    let genre = console.ask_or(
        &format!("Enter Genre (Default: {}): ", defaults.genre),
        &defaults.genre,
    )?;
    let year = console.ask_or(
        &format!("Enter Release Year (Default: {}): ", defaults.year),
        &defaults.year,
    )?;

    Ok(AlbumMetadata {
        title,
        artist,
        genre,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{scripted, transcript};

    fn defaults() -> MetadataDefaults {
        MetadataDefaults {
            album_title: "Dub Sessions".to_string(),
            artist: FALLBACK_ARTIST.to_string(),
            genre: FALLBACK_GENRE.to_string(),
            year: "1976".to_string(),
        }
    }

    #[test]
    fn folder_name_becomes_the_default_album_title() {
        let d = MetadataDefaults::new(Path::new("/music/Dub Sessions"), "a", "g");
        assert_eq!(d.album_title, "Dub Sessions");
        assert_eq!(d.artist, "a");
        assert_eq!(d.genre, "g");
    }

    #[test]
    fn nameless_directory_falls_back_to_untitled() {
        let d = MetadataDefaults::new(Path::new("/"), "a", "g");
        assert_eq!(d.album_title, "Untitled Album");
    }

    #[test]
    fn default_year_is_a_four_digit_number() {
        let d = MetadataDefaults::new(Path::new("/music/x"), "a", "g");
        assert_eq!(d.year.len(), 4);
        assert!(d.year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn enter_accepts_every_default() {
        let mut console = scripted("\n\n\n\n");
        let meta = collect_album_metadata(&mut console, &defaults()).unwrap();
        assert_eq!(meta.title, "Dub Sessions");
        assert_eq!(meta.artist, FALLBACK_ARTIST);
        assert_eq!(meta.genre, FALLBACK_GENRE);
        assert_eq!(meta.year, "1976");
    }

    #[test]
    fn typed_answers_override_and_are_trimmed() {
        let mut console = scripted(" Dub Plates \nLee Perry\n\n2001\n");
        let meta = collect_album_metadata(&mut console, &defaults()).unwrap();
        assert_eq!(meta.title, "Dub Plates");
        assert_eq!(meta.artist, "Lee Perry");
        assert_eq!(meta.genre, FALLBACK_GENRE);
        assert_eq!(meta.year, "2001");
    }

    #[test]
    fn prompts_show_the_defaults() {
        let mut console = scripted("\n\n\n\n");
        collect_album_metadata(&mut console, &defaults()).unwrap();
        let out = transcript(console);
        assert!(out.contains("Enter Album Title (Default: Dub Sessions): "));
        assert!(out.contains("Enter Artist Name (Default: Unknown Smuggler): "));
        assert!(out.contains("Enter Genre (Default: Imperial Underground): "));
        assert!(out.contains("Enter Release Year (Default: 1976): "));
    }
}
