//! Filesystem operations: per-file dispatch, type filtering, and directory
//! lifecycle.
//!
//! - [`for_each_file`] — eager dispatch: walk a directory (or take a single
//!   file) and invoke a caller-supplied action on every regular file. The
//!   lazy equivalent is [`walk_files`](crate::walk::walk_files), which yields
//!   the same paths without invoking anything.
//! - [`filter_type`] — delete files whose extension is (blacklist) or is not
//!   (whitelist) in a given set.
//! - [`dir_create`] / [`dir_delete`] — idempotent directory lifecycle.
//!
//! ## Failure policy
//!
//! An error returned by the action aborts the remaining batch immediately;
//! there is no partial-failure aggregation. Callers that want to keep going
//! wrap their action and record failures themselves. The two tolerated races
//! are files vanishing between enumeration and action, and between
//! enumeration and deletion — both are skipped silently. Deletion is
//! best-effort, not transactional: an error mid-delete leaves the tree
//! partially filtered and surfaces the underlying error.

use crate::path::{self, PathError, PathInput};
use crate::walk::{self, WalkError};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("walk error: {0}")]
    Walk(#[from] WalkError),
    #[error("path error: {0}")]
    Path(#[from] PathError),
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A set of file extensions, each normalized to exactly one leading dot.
///
/// Membership is tested case-sensitively against a path's final suffix
/// (`Path::extension`), so `.gz` matches `archive.tar.gz` but `.tar.gz` as a
/// set entry never matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Build a set from extensions given with or without a leading dot.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let normalized = extensions
            .iter()
            .map(|ext| {
                let ext = ext.as_ref();
                match ext.strip_prefix('.') {
                    Some(rest) => format!(".{rest}"),
                    None => format!(".{ext}"),
                }
            })
            .collect();
        Self(normalized)
    }

    /// Whether the path's final suffix is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.0.contains(&format!(".{ext}")))
    }
}

/// Apply `action` to every regular file under `target`.
///
/// - Directory target: files are enumerated via
///   [`walk_files`](crate::walk::walk_files); each path is re-checked to
///   still be a regular file before the action runs (vanished files are
///   skipped).
/// - Single-file target: the action runs once, on that path.
/// - Anything else (missing path, special file): no-op.
///
/// The action is a pre-bound closure — extra per-batch arguments are
/// captured by the caller. It runs strictly sequentially, in traversal
/// order, and its first error aborts the batch. The error type is generic so
/// actions can thread their own error through the dispatcher, as long as it
/// can absorb dispatch failures via `From<FsError>`.
pub fn for_each_file<E, F>(target: impl Into<PathInput>, mut action: F) -> Result<(), E>
where
    F: FnMut(&Path) -> Result<(), E>,
    E: From<FsError>,
{
    let target = path::normalize(target)
        .map_err(FsError::from)
        .map_err(E::from)?;

    if target.is_dir() {
        let files = walk::walk_files(target.as_path())
            .map_err(FsError::from)
            .map_err(E::from)?;
        for file in files {
            let file = file.map_err(FsError::from).map_err(E::from)?;
            // re-check: the file may have vanished since enumeration
            if file.is_file() {
                action(&file)?;
            }
        }
    } else if target.is_file() {
        action(&target)?;
    }

    Ok(())
}

/// Delete files in a directory tree based on their extension.
///
/// Whitelist mode (`blacklist_mode = false`) keeps only files whose suffix
/// is in `file_types`; blacklist mode removes exactly those files and keeps
/// everything else. Extensions are accepted with or without a leading dot.
/// Re-running on an already-filtered tree is a no-op.
pub fn filter_type<S: AsRef<str>>(
    directory: impl Into<PathInput>,
    file_types: &[S],
    blacklist_mode: bool,
) -> Result<(), FsError> {
    let directory = path::normalize(directory)?;
    let extensions = ExtensionSet::new(file_types);

    for file in walk::walk_files(directory.as_path())? {
        let file = file?;
        let matches = extensions.matches(&file);
        let delete = if blacklist_mode { matches } else { !matches };
        if !delete {
            continue;
        }
        // re-check right before unlinking: the entry may have vanished or
        // been replaced by a directory since enumeration
        if !file.is_file() {
            continue;
        }
        match std::fs::remove_file(&file) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return Err(FsError::PermissionDenied(file));
            }
            Err(err) => return Err(FsError::Io(err)),
        }
    }

    Ok(())
}

/// Create a directory, including missing parents. Idempotent.
pub fn dir_create(directory: impl Into<PathInput>) -> Result<(), FsError> {
    let directory = path::normalize(directory)?;
    match std::fs::create_dir_all(&directory) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            Err(FsError::PermissionDenied(directory))
        }
        Err(err) => Err(FsError::Io(err)),
    }
}

/// Delete a directory and all of its contents. Idempotent: a missing
/// directory is a no-op, never an error.
pub fn dir_delete(directory: impl Into<PathInput>) -> Result<(), FsError> {
    let directory = path::normalize(directory)?;
    if !directory.is_dir() {
        return Ok(());
    }
    match std::fs::remove_dir_all(&directory) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            Err(FsError::PermissionDenied(directory))
        }
        Err(err) => Err(FsError::Io(err)),
    }
}
