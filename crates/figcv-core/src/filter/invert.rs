//! Grayscale inversion.

use crate::decode::RasterImage;
use crate::luminance::to_grayscale;

/// Convert to grayscale and invert every sample (`255 - v`).
///
/// The result always has one channel; color information is lost. Applying
/// `invert` to its own output restores the grayscale intensities exactly.
pub fn invert(image: &RasterImage) -> RasterImage {
    let mut gray = to_grayscale(image);
    for v in gray.pixels.iter_mut() {
        *v = 255 - *v;
    }
    gray
}
