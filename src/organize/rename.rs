use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// `fs::rename` that refuses to replace an existing entry.
///
/// Renaming a path onto itself is a no-op.
pub fn rename_without_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    if from == to {
        return Ok(());
    }
    if fs::symlink_metadata(to).is_ok() {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("\"{}\" already exists", to.display()),
        ));
    }
    fs::rename(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn existing_target_is_left_untouched() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.flac");
        let b = dir.path().join("b.flac");
        fs::write(&a, b"AAAA").unwrap();
        fs::write(&b, b"BBBB").unwrap();

        let err = rename_without_overwrite(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&a).unwrap(), b"AAAA");
        assert_eq!(fs::read(&b).unwrap(), b"BBBB");
    }

    #[test]
    fn same_path_is_a_no_op() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("01. A.flac");
        fs::write(&a, b"AAAA").unwrap();

        rename_without_overwrite(&a, &a).unwrap();
        assert_eq!(fs::read(&a).unwrap(), b"AAAA");
    }

    #[test]
    fn free_target_is_renamed() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.flac");
        let b = dir.path().join("01. A.flac");
        fs::write(&a, b"AAAA").unwrap();

        rename_without_overwrite(&a, &b).unwrap();
        assert!(!a.exists());
        assert_eq!(fs::read(&b).unwrap(), b"AAAA");
    }
}
