//! Image persistence port.

use std::path::Path;

use image::DynamicImage;

use crate::domain::FixError;

/// Port for decoding and re-persisting images.
pub trait ImageStore: Send + Sync {
    /// Decodes the image stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::Decode`] if the file cannot be read or decoded.
    fn load(&self, path: &Path) -> Result<DynamicImage, FixError>;

    /// Replaces the image stored at `path`.
    ///
    /// On error the previously stored image must be left intact.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::Encode`] or [`FixError::Write`].
    fn save(&self, path: &Path, image: &DynamicImage) -> Result<(), FixError>;
}
