//! Core domain types for nine-patch border fixing.

mod border;
mod color;
mod error;
mod report;

pub use border::{border_coordinates, fix_border};
pub use color::{is_red_artifact, strip_red, AlphaPolicy, PackedArgb};
pub use error::FixError;
pub use report::{FileReport, FixOutcome, RunSummary};
