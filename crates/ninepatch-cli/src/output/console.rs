//! Plain-text progress lines.

use std::path::{Path, PathBuf};

use ninepatch_core::{FixOutcome, ProgressEvent, ProgressSink, RunSummary};

/// Destination of a formatted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Prints one human-readable line per event.
///
/// Progress goes to stdout; failures go to stderr and are printed even when
/// quiet.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressSink for ConsoleReporter {
    fn on_event(&self, event: ProgressEvent) {
        let (stream, line) = format_event(&event);
        match stream {
            Stream::Stderr => eprintln!("{line}"),
            Stream::Stdout if !self.quiet => println!("{line}"),
            Stream::Stdout => {}
        }
    }
}

/// Formats an event as a console line.
pub fn format_event(event: &ProgressEvent) -> (Stream, String) {
    match event {
        ProgressEvent::Visiting { path } => (
            Stream::Stdout,
            format!("Processing file [{}]", absolute(path).display()),
        ),
        ProgressEvent::Missing { path } => (
            Stream::Stdout,
            format!("File [{}] does not exist", absolute(path).display()),
        ),
        ProgressEvent::Unreadable { path, reason } => (
            Stream::Stderr,
            format!("error: cannot read [{}]: {reason}", path.display()),
        ),
        ProgressEvent::Completed { report } => {
            let path = report.path.display();
            let n = report.pixels_fixed;
            let line = match report.outcome {
                FixOutcome::Rewritten => {
                    format!("Flushing bitmap to file [{path}] ({n} pixel(s) fixed)")
                }
                FixOutcome::WouldRewrite => {
                    format!("Would flush bitmap to file [{path}] ({n} pixel(s) to fix)")
                }
                FixOutcome::Unchanged => format!("No changes in bitmap of file [{path}]"),
            };
            (Stream::Stdout, line)
        }
        ProgressEvent::Failed { reason, .. } => (Stream::Stderr, format!("error: {reason}")),
        ProgressEvent::Finished { summary } => (Stream::Stdout, summary_line(summary)),
    }
}

/// Absolute form of `path`, or the path as given if the cwd is unavailable.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// One-line totals for the end of a run.
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Done: {} nine-patch file(s), {} rewritten, {} unchanged, {} failed",
        summary.nine_patches, summary.rewritten, summary.unchanged, summary.failed
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ninepatch_core::FileReport;

    use super::*;

    fn report(outcome: FixOutcome, pixels_fixed: usize) -> ProgressEvent {
        ProgressEvent::Completed {
            report: FileReport {
                path: PathBuf::from("res/a.9.png"),
                width: 4,
                height: 4,
                pixels_fixed,
                outcome,
            },
        }
    }

    #[test]
    fn test_visiting_line() {
        let event = ProgressEvent::Visiting {
            path: "res".into(),
        };
        let expected = std::env::current_dir().unwrap().join("res");
        assert_eq!(
            format_event(&event),
            (
                Stream::Stdout,
                format!("Processing file [{}]", expected.display())
            )
        );
    }

    #[test]
    fn test_absolute_paths_kept_as_given() {
        let event = ProgressEvent::Missing {
            path: "/nonexistent/res".into(),
        };
        let (stream, line) = format_event(&event);
        assert_eq!(stream, Stream::Stdout);
        assert_eq!(line, "File [/nonexistent/res] does not exist");
    }

    #[test]
    fn test_completed_lines() {
        let (_, line) = format_event(&report(FixOutcome::Rewritten, 3));
        assert_eq!(line, "Flushing bitmap to file [res/a.9.png] (3 pixel(s) fixed)");

        let (_, line) = format_event(&report(FixOutcome::Unchanged, 0));
        assert_eq!(line, "No changes in bitmap of file [res/a.9.png]");

        let (_, line) = format_event(&report(FixOutcome::WouldRewrite, 2));
        assert!(line.starts_with("Would flush"));
    }

    #[test]
    fn test_failures_go_to_stderr() {
        let event = ProgressEvent::Failed {
            path: "a.9.png".into(),
            reason: "unable to read image [a.9.png]: truncated".into(),
        };
        let (stream, line) = format_event(&event);
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(line, "error: unable to read image [a.9.png]: truncated");

        let event = ProgressEvent::Unreadable {
            path: "locked".into(),
            reason: "permission denied".into(),
        };
        assert_eq!(
            format_event(&event),
            (
                Stream::Stderr,
                "error: cannot read [locked]: permission denied".to_string()
            )
        );
    }

    #[test]
    fn test_summary_line() {
        let summary = RunSummary {
            nine_patches: 3,
            rewritten: 1,
            unchanged: 1,
            failed: 1,
            ..RunSummary::default()
        };
        assert_eq!(
            summary_line(&summary),
            "Done: 3 nine-patch file(s), 1 rewritten, 1 unchanged, 1 failed"
        );
    }
}
