//! Core data types shared by the pipeline stages.
//!
//! Rule of thumb:
//! - These are boring bags of data.
//! - No console code, no filesystem walks, no tag-library calls.
//!
//! Each stage produces one of these and the next stage consumes it;
//! nothing here is mutated after it is built.

use std::path::{Path, PathBuf};

/// Which tag container a file gets, derived from its extension once at scan
/// time. No other code looks at extensions to pick a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `.mp3`: ID3v2 frames.
    Mp3,
    /// `.flac`: Vorbis comments plus picture blocks.
    Flac,
    /// `.m4a` / `.mp4`: ilst metadata atoms.
    Mp4,
}

impl FormatKind {
    /// Detect the container from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<FormatKind> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(FormatKind::Mp3),
            "flac" => Some(FormatKind::Flac),
            "m4a" | "mp4" => Some(FormatKind::Mp4),
            _ => None,
        }
    }
}

/// One audio file discovered by the scan.
#[derive(Debug, Clone)]
pub struct TrackFile {
    /// File name with extension, e.g. `01 intro.mp3`.
    pub name: String,
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Detected container. Always `Some` for scanned files; the engine
    /// skips a file rather than guess if it ever sees `None`.
    pub format: Option<FormatKind>,
}

/// The curator's verdict on a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackDecision {
    /// Tag this file under the given final title.
    Included(String),
    /// Leave the file out entirely; later tracks close the gap.
    Skipped,
}

/// One confirmed entry of the curated tracklist.
///
/// Track numbers are not stored: position in the confirmed list is the
/// number (1-based) and the list length is the total.
#[derive(Debug, Clone)]
pub struct CuratedTrack {
    pub file: TrackFile,
    /// Final title as confirmed by the user.
    pub title: String,
}

/// Album-level fields shared by every track in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumMetadata {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Four-digit year, kept as text because that is what every container
    /// stores.
    pub year: String,
}

/// Image MIME type, derived purely from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// `.png` means PNG; anything else is treated as JPEG. No content
    /// sniffing.
    pub fn from_path(path: &Path) -> ImageMime {
        let is_png = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if is_png { ImageMime::Png } else { ImageMime::Jpeg }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }
}

/// The cover image chosen for the session, before its bytes are read.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub path: PathBuf,
    pub mime: ImageMime,
}

impl CoverArt {
    pub fn from_path(path: PathBuf) -> CoverArt {
        let mime = ImageMime::from_path(&path);
        CoverArt { path, mime }
    }
}

/// Cover image bytes, read once per session and borrowed by every track
/// that embeds artwork.
#[derive(Debug, Clone)]
pub struct CoverImage {
    pub mime: ImageMime,
    pub data: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_kind_covers_the_supported_extensions() {
        assert_eq!(
            FormatKind::from_path(Path::new("a/01 intro.mp3")),
            Some(FormatKind::Mp3)
        );
        assert_eq!(
            FormatKind::from_path(Path::new("02 song.FLAC")),
            Some(FormatKind::Flac)
        );
        assert_eq!(
            FormatKind::from_path(Path::new("b.m4a")),
            Some(FormatKind::Mp4)
        );
        assert_eq!(
            FormatKind::from_path(Path::new("b.Mp4")),
            Some(FormatKind::Mp4)
        );
    }

    #[test]
    fn format_kind_rejects_everything_else() {
        assert_eq!(FormatKind::from_path(Path::new("x.ogg")), None);
        assert_eq!(FormatKind::from_path(Path::new("x.wav")), None);
        assert_eq!(FormatKind::from_path(Path::new("cover.jpg")), None);
        assert_eq!(FormatKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn mime_is_png_only_for_png_extensions() {
        assert_eq!(ImageMime::from_path(Path::new("cover.png")), ImageMime::Png);
        assert_eq!(ImageMime::from_path(Path::new("cover.PNG")), ImageMime::Png);
        assert_eq!(
            ImageMime::from_path(Path::new("cover.jpg")),
            ImageMime::Jpeg
        );
        assert_eq!(
            ImageMime::from_path(Path::new("cover.jpeg")),
            ImageMime::Jpeg
        );
        // Anything that is not .png is reported as JPEG; the resolver only
        // ever feeds this jpg/jpeg/png paths.
        assert_eq!(
            ImageMime::from_path(Path::new("cover.webp")),
            ImageMime::Jpeg
        );
    }

    #[test]
    fn mime_strings_match_what_gets_embedded() {
        assert_eq!(ImageMime::Jpeg.as_str(), "image/jpeg");
        assert_eq!(ImageMime::Png.as_str(), "image/png");
    }

    #[test]
    fn cover_art_derives_its_mime_from_the_path() {
        let art = CoverArt::from_path(PathBuf::from("/album/cover.png"));
        assert_eq!(art.mime, ImageMime::Png);
        assert_eq!(art.path, PathBuf::from("/album/cover.png"));
    }
}
