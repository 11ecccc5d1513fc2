//! Synthetic nine-patch builders for testing.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageResult, Rgba, RgbaImage};

/// Fully transparent black.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
/// Opaque blue, never touched by the rule.
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Builder for creating synthetic RGBA nine-patch images.
#[derive(Debug, Clone)]
pub struct NinePatchBuilder {
    image: RgbaImage,
}

impl NinePatchBuilder {
    /// Creates a fully transparent image.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Creates an image with every pixel set to `rgba`.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(rgba)),
        }
    }

    /// Sets a single pixel.
    #[must_use]
    pub fn pixel(mut self, x: u32, y: u32, rgba: [u8; 4]) -> Self {
        self.image.put_pixel(x, y, Rgba(rgba));
        self
    }

    /// Paints every border pixel with `rgba`.
    #[must_use]
    pub fn border(mut self, rgba: [u8; 4]) -> Self {
        let (w, h) = self.image.dimensions();
        for (x, y, px) in self.image.enumerate_pixels_mut() {
            if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
                *px = Rgba(rgba);
            }
        }
        self
    }

    /// Paints stretch guides in pure red on the top row and left column,
    /// the way a broken exporter leaves them.
    ///
    /// Guides cover the middle third of each edge, so corners stay untouched
    /// on images at least 3px wide and tall.
    #[must_use]
    pub fn red_guides(mut self, red: u8) -> Self {
        let (w, h) = self.image.dimensions();
        for x in w / 3..(2 * w).div_ceil(3) {
            self.image.put_pixel(x, 0, Rgba([red, 0, 0, 255]));
        }
        for y in h / 3..(2 * h).div_ceil(3) {
            self.image.put_pixel(0, y, Rgba([red, 0, 0, 255]));
        }
        self
    }

    /// Returns the raw RGBA buffer.
    #[must_use]
    pub fn rgba(self) -> RgbaImage {
        self.image
    }

    /// Returns the image as a `DynamicImage`.
    #[must_use]
    pub fn build(self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.image)
    }

    /// Encodes the image as PNG into `dir/name` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(self, dir: &Path, name: &str) -> ImageResult<PathBuf> {
        let path = dir.join(name);
        self.image.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }

    // === Scenarios ===

    /// 2x2 image: top-left is a dim red artifact, the rest is opaque blue.
    #[must_use]
    pub fn two_by_two_scenario() -> Self {
        Self::filled(2, 2, BLUE).pixel(0, 0, [10, 0, 0, 255])
    }

    /// 5x5 transparent image with a red pixel only in the center.
    #[must_use]
    pub fn interior_artifact_scenario() -> Self {
        Self::new(5, 5).pixel(2, 2, [50, 0, 0, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];

    #[test]
    fn test_red_guides_leave_corners() {
        let img = NinePatchBuilder::new(9, 9).red_guides(255).rgba();
        assert_eq!(*img.get_pixel(0, 0), Rgba(TRANSPARENT));
        assert_eq!(*img.get_pixel(4, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 4), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(8, 4), Rgba(TRANSPARENT));
    }

    #[test]
    fn test_border_paints_frame_only() {
        let img = NinePatchBuilder::new(3, 3).border(BLACK).rgba();
        assert_eq!(*img.get_pixel(1, 1), Rgba(TRANSPARENT));
        assert_eq!(img.pixels().filter(|p| **p == Rgba(BLACK)).count(), 8);
    }
}
