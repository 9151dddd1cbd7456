//! Figure extraction: crop a raster to a caller-supplied rectangle.
//!
//! Regions usually come from upstream detection and may be malformed.
//! Coordinates are first clamped to be non-negative; the rectangle
//! `(x1, y1, x2 - x1, y2 - y1)` must then be non-empty and lie entirely
//! inside the image. The region is never clamped against the image size.
//!
//! # Example
//!
//! ```ignore
//! let region = FigureRegion::new(-5, 10, -3, 8);
//! let figure = extract_figure(&region, &image)?; // 8x10, starting at (0, 0)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::decode::RasterImage;

/// Errors that reject a crop rectangle.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CropError {
    /// The rectangle has no area after clamping.
    #[error("Invalid crop region: {width}x{height}")]
    InvalidRegion { width: i64, height: i64 },

    /// The rectangle extends past the raster.
    #[error(
        "Crop region ({x}, {y}, {width}x{height}) exceeds image bounds {image_width}x{image_height}"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        image_width: u32,
        image_height: u32,
    },
}

/// A crop target given by its edges.
///
/// `x2` and `y2` are exclusive. Values may be negative or reversed; see
/// [`extract_figure`] for how they are sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureRegion {
    pub y1: i64,
    pub y2: i64,
    pub x1: i64,
    pub x2: i64,
}

impl FigureRegion {
    /// Build a region, in the `y1, y2, x1, x2` field order.
    pub fn new(y1: i64, y2: i64, x1: i64, x2: i64) -> Self {
        Self { y1, y2, x1, x2 }
    }

    /// Copy with every coordinate clamped to be `>= 0`.
    pub fn clamped(&self) -> Self {
        Self {
            y1: self.y1.max(0),
            y2: self.y2.max(0),
            x1: self.x1.max(0),
            x2: self.x2.max(0),
        }
    }
}

/// Crop `image` to `region`.
///
/// # Errors
///
/// - `CropError::InvalidRegion` if the clamped rectangle has a non-positive
///   width or height.
/// - `CropError::OutOfBounds` if it extends past the raster.
pub fn extract_figure(
    region: &FigureRegion,
    image: &RasterImage,
) -> Result<RasterImage, CropError> {
    let r = region.clamped();
    let (x, y) = (r.x1, r.y1);
    let (width, height) = (r.x2 - r.x1, r.y2 - r.y1);

    if width <= 0 || height <= 0 {
        warn!(?region, width, height, "rejected empty crop region");
        return Err(CropError::InvalidRegion { width, height });
    }
    if x + width > image.width as i64 || y + height > image.height as i64 {
        warn!(
            ?region,
            image_width = image.width,
            image_height = image.height,
            "rejected crop region outside image"
        );
        return Err(CropError::OutOfBounds {
            x,
            y,
            width,
            height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    // Bounds checked above, so every value fits the image's u32 range
    let (x, y, w, h) = (x as usize, y as usize, width as usize, height as usize);
    let c = image.channels as usize;
    let stride = image.stride();

    let mut output = Vec::with_capacity(w * h * c);
    for row in y..y + h {
        let start = row * stride + x * c;
        output.extend_from_slice(&image.pixels[start..start + w * c]);
    }

    Ok(RasterImage::new(w as u32, h as u32, image.channels, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
