//! Progress reporting port for UI integration.

use std::path::PathBuf;

use crate::domain::{FileReport, RunSummary};

/// Events emitted while walking a tree.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// An existing path is being processed.
    Visiting {
        /// Path being processed.
        path: PathBuf,
    },
    /// A path did not exist.
    Missing {
        /// Path that was requested.
        path: PathBuf,
    },
    /// A path could not be inspected or listed.
    Unreadable {
        /// Offending path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },
    /// A nine-patch file was processed.
    Completed {
        /// The per-file report.
        report: FileReport,
    },
    /// A nine-patch file was skipped because of an error.
    Failed {
        /// Path to the file.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },
    /// The whole tree has been processed.
    Finished {
        /// Totals for the run.
        summary: RunSummary,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
