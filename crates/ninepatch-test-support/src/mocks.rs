//! Mock implementations of core port traits.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use image::error::{EncodingError, ImageFormatHint};
use image::{DynamicImage, ImageError, ImageFormat};
use ninepatch_core::{
    FileReport, FixError, ImageStore, NinePatchSource, ProgressEvent, ProgressSink, RunSummary,
    SourceEntry,
};

/// Mock implementation of `NinePatchSource` for testing.
///
/// Yields pre-classified entries and tracks iteration for assertions.
pub struct MockNinePatchSource {
    entries: Vec<SourceEntry>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockNinePatchSource {
    /// Creates a new mock source with the given entries.
    #[must_use]
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        Self {
            entries,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl NinePatchSource for MockNinePatchSource {
    fn entries(&self) -> Box<dyn Iterator<Item = SourceEntry> + Send + '_> {
        if let Ok(mut c) = self.iteration_count.lock() {
            *c += 1;
        }
        Box::new(self.entries.iter().cloned())
    }
}

/// In-memory `ImageStore` for testing.
///
/// Paths not inserted fail to load like an unreadable file would.
#[derive(Default)]
pub struct MockImageStore {
    images: Mutex<HashMap<PathBuf, DynamicImage>>,
    loads: Mutex<usize>,
    saves: Mutex<Vec<PathBuf>>,
    fail_saves: bool,
}

impl MockImageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose `save` always fails with an encode error.
    #[must_use]
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Stores `image` under `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, image: DynamicImage) {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), image);
    }

    /// Returns the image currently stored under `path`.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<DynamicImage> {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path.as_ref())
            .cloned()
    }

    /// Returns the number of `load` calls.
    #[must_use]
    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the paths passed to successful `save` calls, in order.
    #[must_use]
    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ImageStore for MockImageStore {
    fn load(&self, path: &Path) -> Result<DynamicImage, FixError> {
        *self.loads.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        self.get(path).ok_or_else(|| FixError::Decode {
            path: path.to_path_buf(),
            source: ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "no such image")),
        })
    }

    fn save(&self, path: &Path, image: &DynamicImage) -> Result<(), FixError> {
        if self.fail_saves {
            return Err(FixError::Encode {
                path: path.to_path_buf(),
                source: ImageError::Encoding(EncodingError::new(
                    ImageFormatHint::Exact(ImageFormat::Png),
                    "mock encoder refused",
                )),
            });
        }
        self.insert(path, image.clone());
        self.saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());
        Ok(())
    }
}

/// Mock implementation of `ProgressSink` for testing.
///
/// Captures events for later assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the paths of all `Visiting` events, in order.
    #[must_use]
    pub fn visited(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Visiting { path } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Returns the reports of all `Completed` events, in order.
    #[must_use]
    pub fn reports(&self) -> Vec<FileReport> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Completed { report } => Some(report),
                _ => None,
            })
            .collect()
    }

    /// Returns the number of `Failed` events.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Failed { .. }))
            .count()
    }

    /// Returns the number of `Missing` events.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Missing { .. }))
            .count()
    }

    /// Returns the summary from the `Finished` event, if any.
    #[must_use]
    pub fn finished_summary(&self) -> Option<RunSummary> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished { summary } => Some(*summary),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_iterates_entries() {
        let source = MockNinePatchSource::new(vec![
            SourceEntry::Directory("res".into()),
            SourceEntry::NinePatch("res/a.9.png".into()),
        ]);
        assert_eq!(source.entries().count(), 2);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_store_round_trip() {
        let store = MockImageStore::new();
        assert!(store.load(Path::new("a.9.png")).is_err());

        store
            .save(Path::new("a.9.png"), &DynamicImage::new_rgba8(2, 2))
            .unwrap();
        assert!(store.load(Path::new("a.9.png")).is_ok());
        assert_eq!(store.load_count(), 2);
        assert_eq!(store.saved_paths(), vec![PathBuf::from("a.9.png")]);
    }

    #[test]
    fn test_failing_store_keeps_original() {
        let store = MockImageStore::failing_saves();
        store.insert("a.9.png", DynamicImage::new_rgba8(1, 1));

        let err = store
            .save(Path::new("a.9.png"), &DynamicImage::new_rgba8(5, 5))
            .unwrap_err();
        assert!(matches!(err, FixError::Encode { .. }));
        assert_eq!(store.get("a.9.png").unwrap().width(), 1);
        assert!(store.saved_paths().is_empty());
    }

    #[test]
    fn test_mock_progress_sink() {
        let sink = MockProgressSink::new();
        sink.on_event(ProgressEvent::Visiting {
            path: "res".into(),
        });
        sink.on_event(ProgressEvent::Finished {
            summary: RunSummary::default(),
        });

        assert_eq!(sink.visited(), vec![PathBuf::from("res")]);
        assert_eq!(sink.finished_summary(), Some(RunSummary::default()));
    }
}
