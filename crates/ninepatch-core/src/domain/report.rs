//! Per-file reports and run summaries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What happened to a nine-patch file after its border was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixOutcome {
    /// At least one pixel was corrected and the file was rewritten.
    Rewritten,
    /// No border pixel matched; the file was not touched.
    Unchanged,
    /// Pixels would have been corrected, but this is a dry run.
    WouldRewrite,
}

/// Result of processing a single nine-patch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the processed file.
    pub path: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of border pixels corrected (or that would be).
    pub pixels_fixed: usize,
    /// Whether the file was rewritten.
    pub outcome: FixOutcome,
}

/// Totals for a whole traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Existing paths visited (files of any kind and directories).
    pub visited: usize,
    /// Qualifying `.9.png` files handed to the fixer.
    pub nine_patches: usize,
    /// Files rewritten on disk.
    pub rewritten: usize,
    /// Files left untouched because nothing matched, or because of a dry run.
    pub unchanged: usize,
    /// Files or directories that could not be processed.
    pub failed: usize,
    /// Paths that did not exist.
    pub missing: usize,
}

impl RunSummary {
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
