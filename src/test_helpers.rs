//! Shared fixture builders for the forfiles test suite.
//!
//! Tests operate on real temporary directories (`tempfile::TempDir`); these
//! helpers keep fixture setup to one line per file.

use std::path::Path;

/// Write a small text file, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Write a solid-color image; the encode format follows the extension.
pub fn write_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([0, 0, 255]))
        .save(path)
        .unwrap();
}
