//! # forfiles
//!
//! Batch file utilities: walk a directory tree and apply an operation to
//! every qualifying file. The built-in operations filter files by extension
//! and transform raster images (resize, scale, convert to PNG), but the
//! walk-and-dispatch engine takes any per-file action.
//!
//! ```no_run
//! use forfiles::{filter_type, scale, ImageOptions};
//!
//! // keep only text files and PNGs under ./assets
//! filter_type("assets", &[".txt", ".png"], false)?;
//!
//! // double the size of every image under ./assets
//! scale("assets", 2.0, 2.0, &ImageOptions::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`path`] | Normalizes text / byte / native path inputs into one canonical form |
//! | [`walk`] | Lazy, deterministic recursive traversal yielding regular files |
//! | [`fs`] | Per-file action dispatch, extension filtering, directory lifecycle |
//! | [`imaging`] | Image operations behind an [`ImageCodec`] boundary |
//!
//! # Design Decisions
//!
//! ## Actions Are Pre-Bound Closures
//!
//! A per-file action is any `FnMut(&Path) -> Result<(), E>`. Per-batch
//! arguments (target dimensions, scale factors, options) are captured by the
//! closure, so the dispatcher stays ignorant of what each operation needs.
//! The first action error aborts the batch — callers wanting
//! partial-failure tolerance catch inside their action.
//!
//! ## Everything Is Synchronous and Sequential
//!
//! One thread, one pass, at most one action per discovered file, invoked in
//! traversal order. There is no parallel walking, no async I/O, and no
//! process-wide state; every call is self-contained.
//!
//! ## Pure-Rust Imaging
//!
//! Pixel work goes through the [`ImageCodec`] trait, implemented on the
//! `image` crate ([`RustCodec`]) with nearest-neighbor resampling — fully
//! deterministic output with no system dependencies. Tests swap in a
//! recording mock.
//!
//! ## Race Tolerance
//!
//! Directory trees mutate under concurrent writers. Files that vanish
//! between enumeration and action (or deletion) are skipped silently; every
//! destructive step re-checks `is_file` immediately before acting. All other
//! failures surface immediately as typed errors — nothing in this crate
//! exits the process.

pub mod fs;
pub mod imaging;
pub mod path;
pub mod walk;

pub use fs::{ExtensionSet, FsError, dir_create, dir_delete, filter_type, for_each_file};
pub use imaging::{
    DEFAULT_IMAGE_TYPES, ImageCodec, ImageError, ImageOptions, RustCodec, resize, scale, to_png,
};
pub use path::{PathError, PathInput, normalize};
pub use walk::{FileWalk, WalkError, walk_files};

#[cfg(test)]
pub(crate) mod test_helpers;
