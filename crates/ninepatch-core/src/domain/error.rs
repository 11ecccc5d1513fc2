//! Failures local to a single nine-patch file.

use std::io;
use std::path::PathBuf;

use image::{ColorType, ImageError};

/// Why a nine-patch file could not be fixed.
///
/// Every variant is scoped to one file; the traversal reports it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    /// The file could not be read or decoded as an image.
    #[error("unable to read image [{}]: {source}", .path.display())]
    Decode { path: PathBuf, source: ImageError },

    /// The decoded image has no red/green/blue channels the rule understands.
    #[error("unsupported color model {color:?} in [{}]", .path.display())]
    UnsupportedColorModel { path: PathBuf, color: ColorType },

    /// The corrected image could not be encoded back to PNG.
    #[error("unable to encode bitmap for [{}]: {source}", .path.display())]
    Encode { path: PathBuf, source: ImageError },

    /// The encoded image could not be written over the original file.
    #[error("unable to flush bitmap to file [{}]: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
