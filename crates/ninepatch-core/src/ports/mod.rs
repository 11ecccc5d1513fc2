//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external adapters.

mod image_store;
mod nine_patch_source;
mod progress;

pub use image_store::ImageStore;
pub use nine_patch_source::{NinePatchSource, SourceEntry};
pub use progress::{ProgressEvent, ProgressSink};
