//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides which files to touch) and the [`codec`](super::codec)
//! (which does the actual pixel work), so a mock codec can stand in during
//! tests without changing operation logic.

use crate::fs::ExtensionSet;
use std::path::PathBuf;

/// File extensions treated as images by default.
pub const DEFAULT_IMAGE_TYPES: &[&str] = &[
    ".png", ".jpg", ".gif", ".webp", ".tiff", ".bmp", ".jpe", ".jfif", ".jif",
];

/// Options shared by all image operations.
#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Extensions eligible for transformation; anything else is skipped.
    /// Accepted with or without a leading dot.
    pub image_types: Vec<String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            image_types: DEFAULT_IMAGE_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ImageOptions {
    pub(crate) fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::new(&self.image_types)
    }
}

/// Parameters for a nearest-neighbor resize.
///
/// `source` and `output` may be the same path (resize in place).
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}
