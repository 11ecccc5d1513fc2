//! JSON Lines output adapter.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use ninepatch_core::{FileReport, ProgressEvent, ProgressSink};
use tracing::warn;

use super::console::format_event;

/// Writes one JSON object per processed nine-patch file.
///
/// Missing paths and failures have no JSON record; they are reported on
/// stderr as plain text.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a new JSON output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, report: &FileReport) -> Result<()> {
        let json = serde_json::to_string(report)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn on_event(&self, event: ProgressEvent) {
        let result = match &event {
            ProgressEvent::Completed { report } => self.write(report),
            ProgressEvent::Finished { .. } => self.flush(),
            other => {
                if let Some(line) = diagnostic_line(other) {
                    eprintln!("{line}");
                }
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("Failed to write JSON output: {e:#}");
        }
    }
}

/// Plain-text stderr line for events that never become a JSON record.
fn diagnostic_line(event: &ProgressEvent) -> Option<String> {
    match event {
        ProgressEvent::Missing { .. }
        | ProgressEvent::Unreadable { .. }
        | ProgressEvent::Failed { .. } => Some(format_event(event).1),
        ProgressEvent::Visiting { .. }
        | ProgressEvent::Completed { .. }
        | ProgressEvent::Finished { .. } => None,
    }
}
