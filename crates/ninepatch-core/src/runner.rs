//! Drives a [`BorderFixer`] over every entry of a [`NinePatchSource`].

use tracing::{debug, warn};

use crate::domain::{FixOutcome, RunSummary};
use crate::fixer::BorderFixer;
use crate::ports::{ImageStore, NinePatchSource, ProgressEvent, ProgressSink, SourceEntry};

/// Walks `source`, fixing each nine-patch file through `store`.
///
/// Entries are pulled one at a time, so a file is completely processed
/// before the next path is even classified. Failures never stop the walk.
pub fn fix_tree(
    source: &dyn NinePatchSource,
    store: &dyn ImageStore,
    fixer: &BorderFixer,
    sink: &dyn ProgressSink,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for entry in source.entries() {
        match entry {
            SourceEntry::Missing(path) => {
                debug!("Missing path: {}", path.display());
                summary.missing += 1;
                sink.on_event(ProgressEvent::Missing { path });
            }
            SourceEntry::Unreadable { path, reason } => {
                debug!("Cannot read {}: {reason}", path.display());
                summary.failed += 1;
                sink.on_event(ProgressEvent::Unreadable { path, reason });
            }
            SourceEntry::Directory(path) | SourceEntry::Other(path) => {
                summary.visited += 1;
                sink.on_event(ProgressEvent::Visiting { path });
            }
            SourceEntry::NinePatch(path) => {
                summary.visited += 1;
                summary.nine_patches += 1;
                sink.on_event(ProgressEvent::Visiting { path: path.clone() });

                match fixer.process_file(store, &path) {
                    Ok(report) => {
                        match report.outcome {
                            FixOutcome::Rewritten => summary.rewritten += 1,
                            FixOutcome::Unchanged | FixOutcome::WouldRewrite => {
                                summary.unchanged += 1;
                            }
                        }
                        sink.on_event(ProgressEvent::Completed { report });
                    }
                    Err(e) => {
                        warn!("Skipping {}: {e}", path.display());
                        summary.failed += 1;
                        sink.on_event(ProgressEvent::Failed {
                            path,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }
    }

    sink.on_event(ProgressEvent::Finished { summary });
    summary
}
