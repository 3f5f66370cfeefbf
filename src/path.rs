//! Path input normalization.
//!
//! Every public operation in this crate accepts its path argument as
//! `impl Into<PathInput>`, so callers can hand over text, raw UTF-8 bytes, or
//! a native path value interchangeably. [`normalize`] collapses all three into
//! a plain [`PathBuf`].
//!
//! ## Normalization policy
//!
//! `normalize` is structural only: byte inputs are UTF-8 decoded, nothing
//! else is touched. Relative paths stay relative, symlinks are not resolved,
//! and the path is never checked for existence — existence is the concern of
//! whichever operation consumes the path. Native inputs pass through
//! unchanged, so the function is idempotent. Keeping one uniform policy here
//! means suffix checks and equality comparisons behave the same no matter
//! which input form a caller used.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("invalid path encoding (not UTF-8): {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

/// A path argument in any of the accepted input forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// Plain text, e.g. `"images/photo.jpg"`.
    Text(String),
    /// Raw bytes, decoded as UTF-8 by [`normalize`].
    Bytes(Vec<u8>),
    /// An already-native path value, passed through unchanged.
    Native(PathBuf),
}

impl From<&str> for PathInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&[u8]> for PathInput {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for PathInput {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&Path> for PathInput {
    fn from(value: &Path) -> Self {
        Self::Native(value.to_path_buf())
    }
}

impl From<PathBuf> for PathInput {
    fn from(value: PathBuf) -> Self {
        Self::Native(value)
    }
}

impl From<&PathBuf> for PathInput {
    fn from(value: &PathBuf) -> Self {
        Self::Native(value.clone())
    }
}

/// Convert any accepted path input into a [`PathBuf`].
///
/// Byte inputs that are not valid UTF-8 fail with
/// [`PathError::InvalidEncoding`]; text and native inputs cannot fail.
pub fn normalize(input: impl Into<PathInput>) -> Result<PathBuf, PathError> {
    match input.into() {
        PathInput::Text(text) => Ok(PathBuf::from(text)),
        PathInput::Bytes(bytes) => Ok(PathBuf::from(String::from_utf8(bytes)?)),
        PathInput::Native(path) => Ok(path),
    }
}
