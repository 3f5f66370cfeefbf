//! Recursive directory traversal.
//!
//! [`walk_files`] produces a lazy, single-pass iterator over every regular
//! file in a directory subtree. Directories are entered but never yielded.
//! Each call builds a fresh traversal — restarting means calling
//! [`walk_files`] again, never resuming a spent iterator.
//!
//! ## Guarantees
//!
//! - A missing or non-directory root fails with
//!   [`WalkError::DirectoryNotFound`] before any iteration happens.
//! - Entries are visited in sorted file-name order, so traversal is
//!   deterministic for a fixed filesystem state.
//! - Symlinks are neither followed nor yielded, which also makes symlink
//!   cycles a non-issue.
//! - A file that vanishes between enumeration and stat is skipped, not an
//!   error. Consumers that act on yielded paths re-check existence
//!   themselves (see [`fs::for_each_file`](crate::fs::for_each_file)).

use crate::path::{self, PathError, PathInput};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("path error: {0}")]
    Path(#[from] PathError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Lazy iterator over the regular files under a root directory.
///
/// Yields `Ok(path)` per file; IO failures during descent surface as
/// `Err(WalkError::Io)` in-stream.
pub struct FileWalk {
    inner: walkdir::IntoIter,
}

impl Iterator for FileWalk {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    // file_type() is the symlink itself when links are not
                    // followed, so symlinks never pass this check
                    if entry.file_type().is_file() {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(err) => {
                    // vanished mid-walk: tolerated race, skip
                    if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) {
                        continue;
                    }
                    match err.into_io_error() {
                        Some(io_err) => return Some(Err(WalkError::Io(io_err))),
                        None => continue,
                    }
                }
            }
        }
    }
}

/// Start a fresh traversal of `root`, yielding every regular file beneath it.
///
/// Fails up front with [`WalkError::DirectoryNotFound`] when `root` does not
/// exist or is not a directory.
pub fn walk_files(root: impl Into<PathInput>) -> Result<FileWalk, WalkError> {
    let root = path::normalize(root)?;
    if !root.is_dir() {
        return Err(WalkError::DirectoryNotFound(root));
    }

    let inner = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    Ok(FileWalk { inner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_text;
    use tempfile::TempDir;

    fn collect(root: &std::path::Path) -> Vec<PathBuf> {
        walk_files(root)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn visits_every_file_exactly_once() {
        let tmp = TempDir::new().unwrap();
        write_text(&tmp.path().join("a.txt"), "a");
        std::fs::create_dir_all(tmp.path().join("sub/deep")).unwrap();
        write_text(&tmp.path().join("sub/b.txt"), "b");
        write_text(&tmp.path().join("sub/deep/c.txt"), "c");

        let mut names: Vec<String> = collect(tmp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn directories_are_never_yielded() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("only/dirs/here")).unwrap();
        assert!(collect(tmp.path()).is_empty());
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect(tmp.path()).is_empty());
    }

    #[test]
    fn missing_root_fails_up_front() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            walk_files(missing.as_path()),
            Err(WalkError::DirectoryNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn file_root_fails_up_front() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        write_text(&file, "x");
        assert!(matches!(
            walk_files(file.as_path()),
            Err(WalkError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn traversal_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        for name in ["z.txt", "a.txt", "m.txt"] {
            write_text(&tmp.path().join(name), name);
        }
        assert_eq!(collect(tmp.path()), collect(tmp.path()));
    }

    #[test]
    fn each_call_restarts_from_scratch() {
        let tmp = TempDir::new().unwrap();
        write_text(&tmp.path().join("a.txt"), "a");
        write_text(&tmp.path().join("b.txt"), "b");

        let mut first = walk_files(tmp.path()).unwrap();
        first.next().unwrap().unwrap();

        // a fresh walk sees both files regardless of the spent iterator
        assert_eq!(collect(tmp.path()).len(), 2);
    }

    #[test]
    fn accepts_text_path_input() {
        let tmp = TempDir::new().unwrap();
        write_text(&tmp.path().join("a.txt"), "a");
        let as_text = tmp.path().to_string_lossy().to_string();
        let count = walk_files(as_text).unwrap().filter_map(Result::ok).count();
        assert_eq!(count, 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_yielded() {
        let tmp = TempDir::new().unwrap();
        write_text(&tmp.path().join("real.txt"), "x");
        std::os::unix::fs::symlink(tmp.path().join("real.txt"), tmp.path().join("link.txt"))
            .unwrap();

        let names: Vec<String> = collect(tmp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["real.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycles_do_not_loop() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        write_text(&sub.join("a.txt"), "a");
        std::os::unix::fs::symlink(tmp.path(), sub.join("loop")).unwrap();

        assert_eq!(collect(tmp.path()).len(), 1);
    }
}
