//! core/mod.rs
//!
//! The brain of the app:
//! - Discover audio files and cover candidates (one-directory scan)
//! - Confirm the tracklist interactively (curation)
//! - Collect album metadata with defaults
//! - Resolve cover art (auto, menu, or manual fallback)
//! - Write tags per container (MP3 / FLAC / MP4)
//!
//! The pipeline is explicit and modular:
//!   (A) scan -> Scan { tracks, images }
//!   (B) curate -> Vec<CuratedTrack>
//!   (C) metadata + cover -> AlbumMetadata, Option<CoverImage>
//!   (D) engine -> Vec<TrackReport>
//!
//! Nothing in here owns a terminal. Every prompt goes through the
//! `Console` the caller passes in, which is what makes the whole
//! pipeline drivable from tests.

pub mod cover;
pub mod curate;
pub mod engine;
pub mod library;
pub mod metadata;
pub mod tags;
pub mod types;
