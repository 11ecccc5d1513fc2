//! ninepatch-core - domain logic for stripping red nine-patch borders.
//!
//! This crate holds the pixel rule, the border scan, the per-file fixer and
//! the traversal driver. All I/O goes through the traits in [`ports`].

pub mod domain;
pub mod fixer;
pub mod ports;
pub mod runner;

pub use domain::{
    border_coordinates, fix_border, is_red_artifact, strip_red, AlphaPolicy, FileReport,
    FixError, FixOutcome, PackedArgb, RunSummary,
};
pub use fixer::{BorderFixer, FixOptions};
pub use ports::{ImageStore, NinePatchSource, ProgressEvent, ProgressSink, SourceEntry};
pub use runner::fix_tree;
