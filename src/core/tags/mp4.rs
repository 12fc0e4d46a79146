//! Update the ilst metadata atoms of an MP4/M4A file in place.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

use super::{TagError, TrackTags};

/// Same field policy as FLAC. Cover art is never embedded here; MP4 files
/// keep whatever artwork they already carry.
pub(super) fn write(track: &TrackTags<'_>) -> Result<(), TagError> {
    let mut tagged = Probe::open(track.path)?.read()?;

    let tag = match tagged.tag_mut(TagType::Mp4Ilst) {
        Some(tag) => tag,
        None => {
            tagged.insert_tag(Tag::new(TagType::Mp4Ilst));
            tagged
                .tag_mut(TagType::Mp4Ilst)
                .ok_or(TagError::Unsupported("ilst"))?
        }
    };

    super::apply_text_fields(tag, track);

    tag.save_to_path(track.path, WriteOptions::default())?;
    Ok(())
}
