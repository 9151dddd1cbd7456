//! Core raster types shared by every image-valued operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is empty or its format is not recognized.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster with 8-bit samples.
///
/// Pixels are stored row-major and interleaved: sample `c` of pixel `(x, y)`
/// lives at `(y * width + x) * channels + c`. Decoded images are RGB
/// (3 channels); grayscale derivatives such as [`crate::filter::invert`]
/// have a single channel.
///
/// An image with zero width or height is the "empty" raster. Operations that
/// fail softly return it instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Samples per pixel.
    pub channels: u8,
    /// Interleaved sample data, `width * height * channels` bytes.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a raster from dimensions and interleaved sample data.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * channels as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Create a raster where every sample holds `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        let len = width as usize * height as usize * channels as usize;
        Self::new(width, height, channels, vec![value; len])
    }

    /// The empty (zero-sized) raster.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            channels: 3,
            pixels: Vec::new(),
        }
    }

    /// Create a 3-channel raster from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, 3, img.into_raw())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Check if this is an empty raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let idx = (y as usize * self.width as usize + x as usize) * c;
        &self.pixels[idx..idx + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_raster_creation() {
        let img = RasterImage::new(100, 50, 3, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.stride(), 300);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_raster_empty() {
        assert!(RasterImage::empty().is_empty());
        assert!(RasterImage::new(0, 10, 1, vec![]).is_empty());
    }

    #[test]
    fn test_pixel_access() {
        let img = RasterImage::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.pixel(1, 0), &[4, 5, 6]);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "Invalid or unsupported image format"
        );
    }
}
