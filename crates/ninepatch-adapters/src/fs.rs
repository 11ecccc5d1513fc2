//! Filesystem adapter for finding nine-patch files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ninepatch_core::{NinePatchSource, SourceEntry};
use tracing::{debug, warn};

/// File name suffix of nine-patch assets, compared case-insensitively.
pub const NINE_PATCH_SUFFIX: &str = ".9.png";

/// Filesystem nine-patch source rooted at a single path.
///
/// The root may be a file or a directory. Directories are walked depth-first
/// with an explicit worklist; symlinks are followed and loops are not detected.
pub struct FsNinePatchSource {
    root: PathBuf,
}

impl FsNinePatchSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl NinePatchSource for FsNinePatchSource {
    fn entries(&self) -> Box<dyn Iterator<Item = SourceEntry> + Send + '_> {
        Box::new(Walk {
            pending: vec![self.root.clone()],
        })
    }
}

/// Lazy depth-first walk. Children are pushed when their parent is yielded.
struct Walk {
    pending: Vec<PathBuf>,
}

impl Iterator for Walk {
    type Item = SourceEntry;

    fn next(&mut self) -> Option<SourceEntry> {
        let path = self.pending.pop()?;
        Some(self.classify(path))
    }
}

impl Walk {
    fn classify(&mut self, path: PathBuf) -> SourceEntry {
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Path does not exist: {}", path.display());
                return SourceEntry::Missing(path);
            }
            Err(e) => {
                warn!("Failed to stat {}: {e}", path.display());
                return SourceEntry::Unreadable {
                    path,
                    reason: e.to_string(),
                };
            }
        };

        if metadata.is_file() {
            if is_nine_patch(&path) {
                SourceEntry::NinePatch(path)
            } else {
                SourceEntry::Other(path)
            }
        } else if metadata.is_dir() {
            match list_dir(&path) {
                Ok(mut children) => {
                    debug!("{} entries in {}", children.len(), path.display());
                    // Reverse so the smallest name is popped first.
                    children.reverse();
                    self.pending.extend(children);
                    SourceEntry::Directory(path)
                }
                Err(e) => {
                    warn!("Failed to read directory {}: {e}", path.display());
                    SourceEntry::Unreadable {
                        path,
                        reason: e.to_string(),
                    }
                }
            }
        } else {
            SourceEntry::Other(path)
        }
    }
}

/// Lists the immediate children of `dir`, sorted by name.
fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    children.sort();
    Ok(children)
}

/// Checks if a path names a nine-patch asset.
#[must_use]
pub fn is_nine_patch(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| name.ends_with(NINE_PATCH_SUFFIX))
}
