//! PNG persistence adapter.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use ninepatch_core::{FixError, ImageStore};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads images from disk and writes them back as PNG.
///
/// Writes never leave a partially written file behind: the image is encoded
/// in memory, written to a sibling temporary file and renamed over the
/// original.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFileStore;

impl PngFileStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageStore for PngFileStore {
    fn load(&self, path: &Path) -> Result<DynamicImage, FixError> {
        let decode = || -> image::ImageResult<DynamicImage> {
            ImageReader::open(path)?.with_guessed_format()?.decode()
        };
        decode().map_err(|source| FixError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&self, path: &Path, image: &DynamicImage) -> Result<(), FixError> {
        let mut encoded = Cursor::new(Vec::new());
        image
            .write_to(&mut encoded, ImageFormat::Png)
            .map_err(|source| FixError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        let encoded = encoded.into_inner();
        debug!("Encoded {} bytes for {}", encoded.len(), path.display());

        replace_file(path, &encoded).map_err(|source| FixError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Atomically replaces `path` with `bytes`, keeping its permissions.
///
/// Symlinks are resolved first so the link target is rewritten and the link
/// itself survives.
fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
