//! Packed colours and the red-artifact rule.
//!
//! Nine-patch exporters sometimes leave the 1px guide border painted in a
//! pure red instead of black. A pixel is such an artifact when its red channel
//! is non-zero while green and blue are exactly zero. Alpha never takes part in
//! the decision.

use image::Primitive;
use serde::{Deserialize, Serialize};

/// What happens to the alpha channel of a corrected pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaPolicy {
    /// Keep the pixel's alpha; only red, green and blue are zeroed.
    #[default]
    Preserve,
    /// Zero alpha as well, leaving a fully transparent black pixel.
    Clear,
}

/// Returns true when the channels describe a pure-red border artifact.
///
/// Works for any channel depth the image crate decodes; "zero" is the
/// primitive's minimum value (0 for integers, 0.0 for floats).
pub fn is_red_artifact<T: Primitive>(red: T, green: T, blue: T) -> bool {
    let zero = T::DEFAULT_MIN_VALUE;
    red > zero && green == zero && blue == zero
}

/// Applies the rule in place to one pixel's channels.
///
/// `channels` is in RGB or RGBA order. Slices with fewer than three channels
/// (grayscale) are never artifacts. Returns whether the pixel changed.
pub fn strip_red<T: Primitive>(channels: &mut [T], alpha: AlphaPolicy) -> bool {
    let [red, green, blue, rest @ ..] = channels else {
        return false;
    };
    if !is_red_artifact(*red, *green, *blue) {
        return false;
    }

    let zero = T::DEFAULT_MIN_VALUE;
    *red = zero;
    *green = zero;
    *blue = zero;
    if alpha == AlphaPolicy::Clear {
        if let Some(a) = rest.first_mut() {
            *a = zero;
        }
    }
    true
}

/// A 32-bit colour packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedArgb(pub u32);

impl PackedArgb {
    /// Packs four 8-bit channels.
    #[must_use]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the corrected colour, or `None` if this is not an artifact.
    #[must_use]
    pub fn fixed(self, alpha: AlphaPolicy) -> Option<Self> {
        let mut channels = [self.red(), self.green(), self.blue(), self.alpha()];
        strip_red(&mut channels, alpha)
            .then(|| Self::from_channels(channels[3], channels[0], channels[1], channels[2]))
    }
}

impl From<image::Rgba<u8>> for PackedArgb {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::from_channels(a, r, g, b)
    }
}

impl From<PackedArgb> for image::Rgba<u8> {
    fn from(color: PackedArgb) -> Self {
        Self([color.red(), color.green(), color.blue(), color.alpha()])
    }
}
