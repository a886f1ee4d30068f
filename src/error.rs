use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a run.
///
/// Per-file problems (unsupported files, failed renames) are reported on the
/// console and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot run this tool inside the target directory")]
    CurrentDirectory,

    #[error("Target directory \"{}\" not found", .0.display())]
    NotFound(PathBuf),

    #[error("Target \"{}\" is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Target directory \"{}\" is empty", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("Invalid album choice \"{input}\", expected a number between 1 and {count}")]
    InvalidAlbumChoice { input: String, count: usize },

    #[error("Failed to walk target directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
