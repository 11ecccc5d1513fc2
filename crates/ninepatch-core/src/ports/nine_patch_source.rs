//! Source port for walking a tree of candidate paths.

use std::path::PathBuf;

/// One classified path produced by a [`NinePatchSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// A regular file whose name ends with the nine-patch marker.
    NinePatch(PathBuf),
    /// A directory; its children follow as separate entries.
    Directory(PathBuf),
    /// Any other existing path. Never opened.
    Other(PathBuf),
    /// The path does not exist.
    Missing(PathBuf),
    /// The path exists but could not be inspected or listed.
    Unreadable {
        /// Offending path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },
}

/// Port for enumerating paths to consider.
///
/// Implementations should be lazy: the runner fully processes one entry
/// before asking for the next.
pub trait NinePatchSource: Send + Sync {
    /// Returns the classified entries of this source.
    fn entries(&self) -> Box<dyn Iterator<Item = SourceEntry> + Send + '_>;
}
