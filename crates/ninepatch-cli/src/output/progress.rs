//! Spinner adapter using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use ninepatch_core::{ProgressEvent, ProgressSink};

use super::console::{format_event, summary_line, Stream};

/// Single-line spinner showing the current path.
///
/// The total number of files is unknown until the walk ends, so this is a
/// spinner rather than a bar. Missing paths and errors are printed above it.
pub struct SpinnerReporter {
    bar: IndicatifBar,
}

impl SpinnerReporter {
    #[must_use]
    pub fn new() -> Self {
        let bar = IndicatifBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} {wide_msg}")
        {
            bar.set_style(style);
        }
        Self { bar }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for SpinnerReporter {
    fn on_event(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Visiting { path } => {
                self.bar.set_message(path.display().to_string());
                self.bar.inc(1);
            }
            ProgressEvent::Finished { summary } => {
                self.bar.finish_with_message(summary_line(&summary));
            }
            ProgressEvent::Completed { .. } => {}
            other => {
                let (stream, line) = format_event(&other);
                self.bar.suspend(|| match stream {
                    Stream::Stdout => println!("{line}"),
                    Stream::Stderr => eprintln!("{line}"),
                });
            }
        }
    }
}
