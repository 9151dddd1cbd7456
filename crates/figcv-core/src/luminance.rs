//! Grayscale conversion using ITU-R BT.601 coefficients.
//!
//! BT.601 is the weighting used by common computer-vision color converters,
//! so intensities here line up with thresholds tuned against them.

use crate::decode::RasterImage;

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.clamp(0.0, 255.0).round() as u8
}

/// Convert a raster to a single-channel grayscale raster.
///
/// 1-channel input is copied unchanged. 3- and 4-channel input is treated as
/// RGB(A); alpha is ignored. For other channel counts the first channel is
/// used.
pub fn to_grayscale(image: &RasterImage) -> RasterImage {
    let c = image.channels as usize;
    let pixels: Vec<u8> = match c {
        1 => image.pixels.clone(),
        3 | 4 => image
            .pixels
            .chunks_exact(c)
            .map(|px| luma_u8(px[0], px[1], px[2]))
            .collect(),
        _ => image.pixels.chunks_exact(c.max(1)).map(|px| px[0]).collect(),
    };
    RasterImage::new(image.width, image.height, 1, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(0, 0, 0), 0);
        assert_eq!(luma_u8(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_green_dominates() {
        assert!(luma_u8(0, 255, 0) > luma_u8(255, 0, 0));
        assert!(luma_u8(255, 0, 0) > luma_u8(0, 0, 255));
    }

    #[test]
    fn test_to_grayscale_rgb() {
        let img = RasterImage::new(2, 1, 3, vec![255, 0, 0, 10, 10, 10]);
        let gray = to_grayscale(&img);

        assert_eq!(gray.channels, 1);
        assert_eq!(gray.pixels, vec![76, 10]);
    }

    #[test]
    fn test_to_grayscale_gray_is_copy() {
        let img = RasterImage::new(3, 1, 1, vec![1, 2, 3]);
        assert_eq!(to_grayscale(&img), img);
    }

    #[test]
    fn test_to_grayscale_rgba_ignores_alpha() {
        let img = RasterImage::new(1, 1, 4, vec![100, 100, 100, 0]);
        assert_eq!(to_grayscale(&img).pixels, vec![100]);
    }
}
