//! Image transforms over single files or whole directory trees.
//!
//! The module is split into:
//! - **Codec**: the [`ImageCodec`] trait + [`RustCodec`] (pixel work)
//! - **Parameters**: data structures describing image operations
//! - **Operations**: resize / scale / PNG conversion, dispatched over
//!   files or directories

pub mod codec;
pub mod operations;
mod params;
pub mod rust_codec;

pub use codec::{CodecError, Dimensions, ImageCodec};
pub use operations::{
    ImageError, resize, resize_with, scale, scale_with, to_png, to_png_with,
};
pub use params::{DEFAULT_IMAGE_TYPES, ImageOptions, ResizeParams};
pub use rust_codec::RustCodec;
