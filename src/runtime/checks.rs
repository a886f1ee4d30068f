use std::path::{Path, PathBuf};

use crate::error::Error;

/// Make sure `dir` exists, is a directory and is not the working directory.
///
/// Returns the canonical path, so the folder can later be renamed inside its
/// real parent even when given as a relative path.
pub fn validate_target(dir: &Path, cwd: &Path) -> Result<PathBuf, Error> {
    if !dir.exists() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let target = dir.canonicalize()?;
    let cwd = cwd.canonicalize()?;
    if target == cwd {
        return Err(Error::CurrentDirectory);
    }

    Ok(target)
}
