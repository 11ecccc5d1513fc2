//! ninepatch-adapters - external adapters for ninepatch-fix.
//!
//! This crate provides adapters for:
//! - Filesystem traversal that classifies nine-patch files
//! - PNG decoding and atomic re-persistence

pub mod fs;
pub mod store;

pub use fs::{is_nine_patch, FsNinePatchSource, NINE_PATCH_SUFFIX};
pub use store::PngFileStore;
