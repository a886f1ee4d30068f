use std::io;
use std::path::Path;

use lofty::file::{FileType, TaggedFile};
use lofty::prelude::*;
use thiserror::Error;

use super::model::TrackMetadata;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read tags: {0}")]
    Lofty(#[from] lofty::error::LoftyError),

    #[error("failed to open file: {0}")]
    Io(#[from] io::Error),
}

/// Source of per-file metadata.
///
/// The passes only talk to this trait so they can run against fixtures.
pub trait TagReader {
    /// Whether the reader recognises this file type at all.
    fn is_supported(&self, path: &Path) -> bool;

    fn read_tags(&self, path: &Path) -> Result<TrackMetadata, TagError>;
}

/// `TagReader` backed by `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn is_supported(&self, path: &Path) -> bool {
        FileType::from_path(path).is_some()
    }

    fn read_tags(&self, path: &Path) -> Result<TrackMetadata, TagError> {
        let tagged = lofty::probe::read_from_path(path)?;
        let metadata = metadata_from_tagged(&tagged);

        tracing::debug!(
            path = %path.display(),
            title = ?metadata.title,
            artist = ?metadata.artist,
            album = ?metadata.album,
            track = ?metadata.track_number,
            sample_rate = ?metadata.sample_rate_hz,
            bit_depth = ?metadata.bit_depth_bits,
            "tags read"
        );

        Ok(metadata)
    }
}

fn non_empty(value: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn metadata_from_tagged(tagged: &TaggedFile) -> TrackMetadata {
    let properties = tagged.properties();

    let mut metadata = TrackMetadata {
        sample_rate_hz: properties.sample_rate(),
        bit_depth_bits: properties.bit_depth(),
        ..TrackMetadata::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        metadata.title = non_empty(tag.title());
        metadata.artist = non_empty(tag.artist());
        metadata.album = non_empty(tag.album());
        metadata.track_number = tag.track();
    } else {
        tracing::debug!("no tags found in audio file");
    }

    metadata
}
