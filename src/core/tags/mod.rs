//! core/tags/mod.rs
//!
//! Format-dispatched tag writing.
//! Public API:
//! - [`write_track`] writes one track's fields (and optional cover art) to disk.
//!
//! The three containers get different policies on purpose:
//! - MP3 rebuilds its ID3v2 tag from scratch, so stale frames from earlier
//!   tools disappear.
//! - FLAC and MP4 keep their existing tag and overwrite only the fields
//!   written here; unrelated comments and atoms survive.
//! - Cover art goes to MP3 (APIC) and FLAC (picture block). MP4 keeps
//!   whatever artwork it already has.

mod flac;
mod mp3;
mod mp4;

use std::path::Path;

use lofty::tag::{ItemKey, Tag};

use crate::core::types::{AlbumMetadata, CoverImage, FormatKind};

/// Everything one track write needs, borrowed from the engine's batch
/// state. Writers only read from it.
pub struct TrackTags<'a> {
    pub path: &'a Path,
    /// Final title from the curated tracklist.
    pub title: &'a str,
    pub album: &'a AlbumMetadata,
    /// 1-based position in the confirmed tracklist.
    pub number: usize,
    /// Length of the confirmed tracklist.
    pub total: usize,
    pub cover: Option<&'a CoverImage>,
}

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// ID3 rewrite failures from the `id3` crate.
    #[error("{0}")]
    Id3(#[from] id3::Error),
    /// Probe, parse, or save failures from `lofty`.
    #[error("{0}")]
    Lofty(#[from] lofty::error::LoftyError),
    /// The container cannot hold the tag type written here.
    #[error("file does not support {0} tags")]
    Unsupported(&'static str),
}

/// Write one track to disk, choosing the writer by detected format.
pub fn write_track(format: FormatKind, track: &TrackTags<'_>) -> Result<(), TagError> {
    match format {
        FormatKind::Mp3 => mp3::write(track),
        FormatKind::Flac => flac::write(track),
        FormatKind::Mp4 => mp4::write(track),
    }
}

/// The six fields every container gets. `insert_text` replaces any existing
/// item of the same key, so repeat runs do not stack duplicates.
fn apply_text_fields(tag: &mut Tag, track: &TrackTags<'_>) {
    tag.insert_text(ItemKey::TrackArtist, track.album.artist.clone());
    tag.insert_text(ItemKey::TrackTitle, track.title.to_string());
    tag.insert_text(ItemKey::AlbumTitle, track.album.title.clone());
    tag.insert_text(ItemKey::Genre, track.album.genre.clone());
    tag.insert_text(ItemKey::TrackNumber, track.number.to_string());
    tag.insert_text(ItemKey::RecordingDate, track.album.year.clone());
}
