//! Per-file image operations: resize, scale, and PNG conversion.
//!
//! Each operation accepts a single file or a directory. Directories are
//! dispatched through [`fs::for_each_file`], so every regular file in the
//! subtree is considered; files whose extension is outside
//! [`ImageOptions::image_types`] are skipped, as are files that vanish
//! mid-batch or whose content the codec cannot decode. Any other codec or IO
//! failure aborts the remaining batch.
//!
//! The `*_with` variants take an explicit [`ImageCodec`]; the plain
//! functions use the production [`RustCodec`].

use super::codec::{CodecError, ImageCodec};
use super::params::{ImageOptions, ResizeParams};
use super::rust_codec::RustCodec;
use crate::fs::{self, ExtensionSet, FsError};
use crate::path::{self, PathInput};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("filesystem error: {0}")]
    Fs(#[from] FsError),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Codec failures that mean "this file is not a transformable image right
/// now" rather than a real fault: undecodable content, or a file that
/// vanished between enumeration and the codec opening it.
fn skippable(err: &CodecError) -> bool {
    match err {
        CodecError::UnsupportedFormat(_) => true,
        CodecError::Io(io_err) => io_err.kind() == io::ErrorKind::NotFound,
        CodecError::Codec(_) => false,
    }
}

/// Resize an image, or every image in a directory, to exactly
/// `width` × `height` pixels (nearest-neighbor, saved back in place).
pub fn resize(
    path: impl Into<PathInput>,
    width: u32,
    height: u32,
    options: &ImageOptions,
) -> Result<(), ImageError> {
    resize_with(&RustCodec::new(), path, width, height, options)
}

/// [`resize`] with an explicit codec.
pub fn resize_with(
    codec: &impl ImageCodec,
    path: impl Into<PathInput>,
    width: u32,
    height: u32,
    options: &ImageOptions,
) -> Result<(), ImageError> {
    let types = options.extension_set();
    fs::for_each_file::<ImageError, _>(path, |file| resize_single(codec, file, width, height, &types))
}

fn resize_single(
    codec: &impl ImageCodec,
    path: &Path,
    width: u32,
    height: u32,
    types: &ExtensionSet,
) -> Result<(), ImageError> {
    if !types.matches(path) {
        return Ok(());
    }
    let params = ResizeParams {
        source: path.to_path_buf(),
        output: path.to_path_buf(),
        width,
        height,
    };
    match codec.resize(&params) {
        Ok(()) => Ok(()),
        Err(err) if skippable(&err) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Scale an image, or every image in a directory, by per-axis factors.
///
/// New dimensions are `width * width_factor` and `height * height_factor`,
/// truncated to whole pixels.
pub fn scale(
    path: impl Into<PathInput>,
    width_factor: f64,
    height_factor: f64,
    options: &ImageOptions,
) -> Result<(), ImageError> {
    scale_with(&RustCodec::new(), path, width_factor, height_factor, options)
}

/// [`scale`] with an explicit codec.
pub fn scale_with(
    codec: &impl ImageCodec,
    path: impl Into<PathInput>,
    width_factor: f64,
    height_factor: f64,
    options: &ImageOptions,
) -> Result<(), ImageError> {
    let types = options.extension_set();
    fs::for_each_file::<ImageError, _>(path, |file| {
        scale_single(codec, file, width_factor, height_factor, &types)
    })
}

fn scale_single(
    codec: &impl ImageCodec,
    path: &Path,
    width_factor: f64,
    height_factor: f64,
    types: &ExtensionSet,
) -> Result<(), ImageError> {
    if !types.matches(path) {
        return Ok(());
    }
    let dims = match codec.identify(path) {
        Ok(dims) => dims,
        Err(err) if skippable(&err) => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    let params = ResizeParams {
        source: path.to_path_buf(),
        output: path.to_path_buf(),
        width: (f64::from(dims.width) * width_factor) as u32,
        height: (f64::from(dims.height) * height_factor) as u32,
    };
    match codec.resize(&params) {
        Ok(()) => Ok(()),
        Err(err) if skippable(&err) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Convert an image, or every image in a directory, to PNG.
///
/// A `.png` input is returned unchanged. Anything else in the image-type set
/// is re-encoded at the sibling path with a `.png` extension; the original
/// file is removed only after the PNG has been written successfully.
///
/// Returns the resulting path for a single-file target, `None` for directory
/// targets and for single files outside the image-type set.
pub fn to_png(
    path: impl Into<PathInput>,
    options: &ImageOptions,
) -> Result<Option<PathBuf>, ImageError> {
    to_png_with(&RustCodec::new(), path, options)
}

/// [`to_png`] with an explicit codec.
pub fn to_png_with(
    codec: &impl ImageCodec,
    path: impl Into<PathInput>,
    options: &ImageOptions,
) -> Result<Option<PathBuf>, ImageError> {
    let target = path::normalize(path).map_err(FsError::from)?;
    let types = options.extension_set();

    if target.is_dir() {
        fs::for_each_file::<ImageError, _>(target.as_path(), |file| {
            to_png_single(codec, file, &types).map(|_| ())
        })?;
        return Ok(None);
    }
    if target.is_file() {
        return to_png_single(codec, &target, &types);
    }
    Ok(None)
}

fn to_png_single(
    codec: &impl ImageCodec,
    path: &Path,
    types: &ExtensionSet,
) -> Result<Option<PathBuf>, ImageError> {
    if path.extension().is_some_and(|ext| ext == "png") {
        return Ok(Some(path.to_path_buf()));
    }
    if !types.matches(path) {
        return Ok(None);
    }

    let output = path.with_extension("png");
    match codec.convert(path, &output) {
        Ok(()) => {}
        Err(err) if skippable(&err) => return Ok(None),
        Err(err) => return Err(err.into()),
    }

    // the original goes away only once the PNG exists on disk
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(FsError::Io(err).into()),
    }
    Ok(Some(output))
}
