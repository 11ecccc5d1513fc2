//! Per-file border fixing.

use std::path::Path;

use image::{ColorType, DynamicImage};
use tracing::{debug, info};

use crate::domain::{fix_border, AlphaPolicy, FileReport, FixError, FixOutcome};
use crate::ports::ImageStore;

/// Options controlling how a file is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOptions {
    /// Alpha handling for corrected pixels.
    pub alpha: AlphaPolicy,
    /// Scan and report, but never write.
    pub dry_run: bool,
}

/// Strips red artifacts from nine-patch borders.
#[derive(Debug, Clone, Default)]
pub struct BorderFixer {
    options: FixOptions,
}

impl BorderFixer {
    #[must_use]
    pub const fn new(options: FixOptions) -> Self {
        Self { options }
    }

    /// Fixes the border of a decoded image in place.
    ///
    /// Returns the number of corrected pixels. Grayscale images cannot hold a
    /// red artifact and always yield 0.
    ///
    /// # Errors
    ///
    /// Returns the image's [`ColorType`] if it is not a model with separate
    /// red, green and blue channels or plain grayscale.
    pub fn fix_image(&self, image: &mut DynamicImage) -> Result<usize, ColorType> {
        let alpha = self.options.alpha;
        let fixed = match image {
            DynamicImage::ImageRgb8(buf) => fix_border(buf, alpha),
            DynamicImage::ImageRgba8(buf) => fix_border(buf, alpha),
            DynamicImage::ImageRgb16(buf) => fix_border(buf, alpha),
            DynamicImage::ImageRgba16(buf) => fix_border(buf, alpha),
            DynamicImage::ImageRgb32F(buf) => fix_border(buf, alpha),
            DynamicImage::ImageRgba32F(buf) => fix_border(buf, alpha),
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => 0,
            other => return Err(other.color()),
        };
        Ok(fixed)
    }

    /// Loads, fixes and, if anything changed, re-persists one file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixError`] if the file cannot be decoded, has an unsupported
    /// color model, or cannot be written back. The stored file is unchanged in
    /// every error case.
    pub fn process_file(&self, store: &dyn ImageStore, path: &Path) -> Result<FileReport, FixError> {
        let mut image = store.load(path)?;
        let (width, height) = (image.width(), image.height());

        let pixels_fixed = self
            .fix_image(&mut image)
            .map_err(|color| FixError::UnsupportedColorModel {
                path: path.to_path_buf(),
                color,
            })?;

        let outcome = if pixels_fixed == 0 {
            debug!("No border artifacts in {}", path.display());
            FixOutcome::Unchanged
        } else if self.options.dry_run {
            debug!(
                "Dry run: {pixels_fixed} pixel(s) would change in {}",
                path.display()
            );
            FixOutcome::WouldRewrite
        } else {
            store.save(path, &image)?;
            info!("Rewrote {} ({pixels_fixed} pixel(s))", path.display());
            FixOutcome::Rewritten
        };

        Ok(FileReport {
            path: path.to_path_buf(),
            width,
            height,
            pixels_fixed,
            outcome,
        })
    }
}
