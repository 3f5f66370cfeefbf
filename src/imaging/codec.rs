//! Image codec trait and shared types.
//!
//! The [`ImageCodec`] trait is the narrow boundary between the per-file image
//! operations and the pixel-level work: identify dimensions, resize to an
//! output path, re-encode as PNG. The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec), backed by the pure-Rust
//! `image` crate.

use super::params::ResizeParams;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The codec cannot decode this file — wrong or unknown format, or
    /// corrupt content.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("codec failure: {0}")]
    Codec(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image codecs.
///
/// All three operations are transactional at the call boundary: any decoded
/// raster a codec holds must be released when the call returns, on success
/// and on error alike.
pub trait ImageCodec {
    /// Read image dimensions without transforming anything.
    fn identify(&self, path: &Path) -> Result<Dimensions, CodecError>;

    /// Decode the source, resize with nearest-neighbor resampling, and
    /// encode to the output path. Source and output may be the same path.
    fn resize(&self, params: &ResizeParams) -> Result<(), CodecError>;

    /// Decode the source and re-encode it as PNG at `output`. The source
    /// file itself is left untouched.
    fn convert(&self, source: &Path, output: &Path) -> Result<(), CodecError>;
}
