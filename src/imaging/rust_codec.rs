//! Pure-Rust image codec — zero external dependencies.
//!
//! Built on the `image` crate with an explicit codec feature list, so
//! everything is statically linked into the binary.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode | `ImageReader` with content-based format sniffing |
//! | Resize | `DynamicImage::resize_exact` with `FilterType::Nearest` |
//! | Encode | `save_with_format`, format chosen from the output extension |
//!
//! Nearest-neighbor resampling is deliberate: it is deterministic and
//! introduces no interpolation artifacts, so repeated runs produce
//! byte-identical pixel data.
//!
//! Decoded rasters live on the stack of a single codec call and are dropped
//! when it returns, success or failure.

use super::codec::{CodecError, Dimensions, ImageCodec};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Extensions whose encoders are compiled in, mapped to their format.
///
/// Decoding does not consult this table (formats are sniffed from content);
/// it exists to pick the encode format for an output path, including the
/// JPEG aliases (`jpe`, `jfif`, `jif`) that `ImageFormat::from_path` does
/// not know about.
const FORMAT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("jpe", ImageFormat::Jpeg),
    ("jfif", ImageFormat::Jpeg),
    ("jif", ImageFormat::Jpeg),
    ("gif", ImageFormat::Gif),
    ("webp", ImageFormat::WebP),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("bmp", ImageFormat::Bmp),
];

/// Pure-Rust codec using the `image` crate.
#[derive(Debug, Default)]
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

fn encode_format(path: &Path) -> Result<ImageFormat, CodecError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            FORMAT_CANDIDATES
                .iter()
                .find(|(candidate, _)| ext.eq_ignore_ascii_case(candidate))
                .map(|(_, format)| *format)
        })
        .ok_or_else(|| CodecError::UnsupportedFormat(path.to_path_buf()))
}

/// Open and decode an image, sniffing the format from file content rather
/// than trusting the extension.
fn load_image(path: &Path) -> Result<DynamicImage, CodecError> {
    let reader = ImageReader::open(path)
        .map_err(CodecError::Io)?
        .with_guessed_format()
        .map_err(CodecError::Io)?;
    reader.decode().map_err(|err| match err {
        image::ImageError::IoError(io_err) => CodecError::Io(io_err),
        // unknown format and corrupt content both mean "not a decodable
        // image", which callers treat as skippable
        image::ImageError::Unsupported(_) | image::ImageError::Decoding(_) => {
            CodecError::UnsupportedFormat(path.to_path_buf())
        }
        other => CodecError::Codec(other.to_string()),
    })
}

fn save_image(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), CodecError> {
    image.save_with_format(path, format).map_err(|err| match err {
        image::ImageError::IoError(io_err) => CodecError::Io(io_err),
        other => CodecError::Codec(format!("failed to encode {}: {other}", path.display())),
    })
}

impl ImageCodec for RustCodec {
    fn identify(&self, path: &Path) -> Result<Dimensions, CodecError> {
        let reader = ImageReader::open(path)
            .map_err(CodecError::Io)?
            .with_guessed_format()
            .map_err(CodecError::Io)?;
        let (width, height) = reader.into_dimensions().map_err(|err| match err {
            image::ImageError::IoError(io_err) => CodecError::Io(io_err),
            _ => CodecError::UnsupportedFormat(path.to_path_buf()),
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), CodecError> {
        let format = encode_format(&params.output)?;
        let image = load_image(&params.source)?;
        let resized = image.resize_exact(params.width, params.height, FilterType::Nearest);
        save_image(&resized, &params.output, format)
    }

    fn convert(&self, source: &Path, output: &Path) -> Result<(), CodecError> {
        let image = load_image(source)?;
        save_image(&image, output, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{write_image, write_text};
    use tempfile::TempDir;

    #[test]
    fn identify_reads_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("image.png");
        write_image(&path, 120, 80);

        let dims = RustCodec::new().identify(&path).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 120,
                height: 80
            }
        );
    }

    #[test]
    fn resize_produces_exact_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("image.jpg");
        write_image(&path, 200, 200);

        RustCodec::new()
            .resize(&ResizeParams {
                source: path.clone(),
                output: path.clone(),
                width: 50,
                height: 50,
            })
            .unwrap();

        let resized = image::open(&path).unwrap();
        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 50);
    }

    #[test]
    fn convert_reencodes_as_png() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("image.jpg");
        let output = tmp.path().join("image.png");
        write_image(&source, 10, 10);

        RustCodec::new().convert(&source, &output).unwrap();

        // the source is left in place; deletion is the caller's decision
        assert!(source.exists());
        let reader = ImageReader::open(&output)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Png));
    }

    #[test]
    fn non_image_content_is_unsupported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fake.jpg");
        write_text(&path, "this is not an image");

        let result = RustCodec::new().identify(&path);
        assert!(matches!(result, Err(CodecError::UnsupportedFormat(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = RustCodec::new().identify(&tmp.path().join("missing.png"));
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn unknown_output_extension_is_unsupported() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("image.png");
        write_image(&source, 10, 10);

        let result = RustCodec::new().resize(&ResizeParams {
            source: source.clone(),
            output: tmp.path().join("out.xyz"),
            width: 5,
            height: 5,
        });
        assert!(matches!(result, Err(CodecError::UnsupportedFormat(_))));
    }
}
