use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Error;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Collect every regular file below `dir`, recursively.
///
/// No extension filtering happens here; unsupported files are weeded out by
/// the tag reader. Entries are sorted by file name within each directory.
/// Unreadable entries below the root are logged and skipped, an unreadable
/// root is an error.
pub fn collect_files(dir: &Path, settings: &LibrarySettings) -> Result<Vec<PathBuf>, Error> {
    let mut files: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::Walk(err)),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "target directory scanned");
    Ok(files)
}
