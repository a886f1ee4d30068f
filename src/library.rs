//! Library access: walking the target directory and reading tags.

mod model;
mod scan;
mod tags;

pub use model::TrackMetadata;
pub use scan::collect_files;
pub use tags::{LoftyTagReader, TagError, TagReader};
