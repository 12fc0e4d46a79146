//! Rebuild the ID3v2 tag of an MP3 from scratch.

use id3::frame::{Picture, PictureType};
use id3::{Tag, TagLike, Version};

use super::{TagError, TrackTags};

/// Write a fresh v2.4 tag over whatever the file carried before. Starting
/// from an empty tag is the point: frames left behind by other tools do
/// not survive a batch run.
pub(super) fn write(track: &TrackTags<'_>) -> Result<(), TagError> {
    let mut tag = Tag::new();

    tag.set_text("TPE1", track.album.artist.clone()); // artist
    tag.set_text("TIT2", track.title.to_string()); // title
    tag.set_text("TALB", track.album.title.clone()); // album
    tag.set_text("TCON", track.album.genre.clone()); // genre
    tag.set_text("TRCK", format!("{}/{}", track.number, track.total));
    tag.set_text("TDRC", track.album.year.clone());

    if let Some(cover) = track.cover {
        let _ = tag.add_frame(Picture {
            mime_type: cover.mime.as_str().to_string(),
            picture_type: PictureType::CoverFront,
            description: "Cover".to_string(),
            data: cover.data.clone(),
        });
    }

    tag.write_to_path(track.path, Version::Id3v24)?;
    Ok(())
}
