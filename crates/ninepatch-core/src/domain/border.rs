//! Border scan over the 1px nine-patch guide frame.

use image::{ImageBuffer, Pixel};

use super::color::{strip_red, AlphaPolicy};

/// Yields every border pixel exactly once.
///
/// Order: top row, bottom row, then the left and right columns without the
/// corners already covered by the rows. Zero-sized images yield nothing.
pub fn border_coordinates(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let (width, height) = if width == 0 || height == 0 {
        (0, 0)
    } else {
        (width, height)
    };
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);

    let top = (0..width).map(|x| (x, 0));
    let bottom_len = if last_y > 0 { width } else { 0 };
    let bottom = (0..bottom_len).map(move |x| (x, last_y));

    // Rows between the first and the last.
    let inner = 1..last_y;
    let right_rows = if last_x > 0 { inner.clone() } else { 0..0 };
    let left = inner.map(|y| (0, y));
    let right = right_rows.map(move |y| (last_x, y));

    top.chain(bottom).chain(left).chain(right)
}

/// Applies the red-artifact rule to each border pixel of `buffer`.
///
/// Returns the number of pixels that changed; the image is modified iff the
/// count is non-zero.
pub fn fix_border<P>(buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>, alpha: AlphaPolicy) -> usize
where
    P: Pixel,
{
    let (width, height) = buffer.dimensions();
    border_coordinates(width, height)
        .filter(|&(x, y)| strip_red(buffer.get_pixel_mut(x, y).channels_mut(), alpha))
        .count()
}
