//! Update the Vorbis comment block of a FLAC file in place.

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};

use crate::core::types::ImageMime;

use super::{TagError, TrackTags};

/// Overwrite the fields we own and leave every other comment alone. When a
/// cover was chosen, only the front cover picture is swapped; back covers,
/// booklet scans, and the rest stay where they are.
pub(super) fn write(track: &TrackTags<'_>) -> Result<(), TagError> {
    let mut tagged = Probe::open(track.path)?.read()?;

    let tag = match tagged.tag_mut(TagType::VorbisComments) {
        Some(tag) => tag,
        None => {
            tagged.insert_tag(Tag::new(TagType::VorbisComments));
            tagged
                .tag_mut(TagType::VorbisComments)
                .ok_or(TagError::Unsupported("Vorbis comment"))?
        }
    };

    super::apply_text_fields(tag, track);

    if let Some(cover) = track.cover {
        let picture = Picture::new_unchecked(
            PictureType::CoverFront,
            Some(picture_mime(cover.mime)),
            None,
            cover.data.clone(),
        );
        tag.remove_picture_type(PictureType::CoverFront);
        tag.push_picture(picture);
    }

    tag.save_to_path(track.path, WriteOptions::default())?;
    Ok(())
}

fn picture_mime(mime: ImageMime) -> MimeType {
    match mime {
        ImageMime::Jpeg => MimeType::Jpeg,
        ImageMime::Png => MimeType::Png,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testfile;
    use crate::core::types::{AlbumMetadata, CoverImage};
    use lofty::file::TaggedFileExt;
    use lofty::prelude::*;
    use lofty::tag::ItemKey;
    use std::path::Path;

    fn album() -> AlbumMetadata {
        AlbumMetadata {
            title: "Dub Sessions".to_string(),
            artist: "Lee Perry".to_string(),
            genre: "Dub".to_string(),
            year: "1976".to_string(),
        }
    }

    fn request<'a>(path: &'a Path, album: &'a AlbumMetadata) -> TrackTags<'a> {
        TrackTags {
            path,
            title: "Bucky Skank",
            album,
            number: 3,
            total: 9,
            cover: None,
        }
    }

    fn flac_file(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, testfile::minimal_flac()).unwrap();
        path
    }

    fn read_vorbis(path: &Path) -> Tag {
        let tagged = Probe::open(path).unwrap().read().unwrap();
        tagged.tag(TagType::VorbisComments).cloned().unwrap()
    }

    /// Seed the file with a tag the writer did not create.
    fn seed(path: &Path, build: impl FnOnce(&mut Tag)) {
        let mut tag = Tag::new(TagType::VorbisComments);
        build(&mut tag);
        tag.save_to_path(path, WriteOptions::default()).unwrap();
    }

    #[test]
    fn writes_fields_into_a_bare_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = flac_file(dir.path(), "03 three.flac");

        let album = album();
        write(&request(&path, &album)).unwrap();

        let tag = read_vorbis(&path);
        assert_eq!(tag.get_string(&ItemKey::TrackArtist), Some("Lee Perry"));
        assert_eq!(tag.get_string(&ItemKey::TrackTitle), Some("Bucky Skank"));
        assert_eq!(tag.get_string(&ItemKey::AlbumTitle), Some("Dub Sessions"));
        assert_eq!(tag.get_string(&ItemKey::Genre), Some("Dub"));
        assert_eq!(tag.get_string(&ItemKey::TrackNumber), Some("3"));
        assert_eq!(tag.get_string(&ItemKey::RecordingDate), Some("1976"));
    }

    // The other half of the MP3 clean-slate policy: on FLAC, fields this
    // tool does not own are kept.
    #[test]
    fn comments_outside_our_six_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = flac_file(dir.path(), "keeper.flac");

        seed(&path, |tag| {
            tag.insert_text(ItemKey::Comment, "ripped 2003".to_string());
            tag.insert_text(ItemKey::TrackTitle, "Old Title".to_string());
        });

        let album = album();
        write(&request(&path, &album)).unwrap();

        let tag = read_vorbis(&path);
        assert_eq!(tag.get_string(&ItemKey::Comment), Some("ripped 2003"));
        assert_eq!(tag.get_string(&ItemKey::TrackTitle), Some("Bucky Skank"));
    }

    #[test]
    fn only_the_front_cover_is_swapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = flac_file(dir.path(), "art.flac");

        seed(&path, |tag| {
            tag.push_picture(Picture::new_unchecked(
                PictureType::CoverBack,
                Some(MimeType::Jpeg),
                None,
                b"back scan".to_vec(),
            ));
            tag.push_picture(Picture::new_unchecked(
                PictureType::CoverFront,
                Some(MimeType::Jpeg),
                None,
                b"old front".to_vec(),
            ));
        });

        let album = album();
        let cover = CoverImage {
            mime: ImageMime::Png,
            data: testfile::png_bytes(),
        };
        let mut request = request(&path, &album);
        request.cover = Some(&cover);
        write(&request).unwrap();

        let tag = read_vorbis(&path);
        assert_eq!(tag.pictures().len(), 2);

        let front = tag
            .pictures()
            .iter()
            .find(|p| p.pic_type() == PictureType::CoverFront)
            .unwrap();
        assert_eq!(front.data(), testfile::png_bytes().as_slice());
        assert_eq!(front.mime_type(), Some(&MimeType::Png));

        let back = tag
            .pictures()
            .iter()
            .find(|p| p.pic_type() == PictureType::CoverBack)
            .unwrap();
        assert_eq!(back.data(), b"back scan".as_slice());
    }

    #[test]
    fn no_cover_leaves_existing_artwork_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = flac_file(dir.path(), "keepart.flac");

        seed(&path, |tag| {
            tag.push_picture(Picture::new_unchecked(
                PictureType::CoverFront,
                Some(MimeType::Jpeg),
                None,
                b"existing front".to_vec(),
            ));
        });

        let album = album();
        write(&request(&path, &album)).unwrap();

        let tag = read_vorbis(&path);
        assert_eq!(tag.pictures().len(), 1);
        assert_eq!(tag.pictures()[0].data(), b"existing front".as_slice());
    }
}
