//! Named defaults for the fixed pipeline parameters.
//!
//! Contour extraction, JPEG encoding and rotation all run with constants
//! that callers rely on for reproducible results. They live here as
//! configuration values so they can be adjusted without touching the
//! algorithms.

use serde::{Deserialize, Serialize};

use crate::filter::Kernel;

/// JPEG quality used when no options are given.
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Sample value used to fill pixels exposed by rotation (white).
pub const ROTATION_BACKGROUND: u8 = 255;

/// Binarization intensity threshold for contour extraction.
pub const CONTOUR_THRESHOLD: u8 = 40;

/// Radius of the square structuring element used by the contour close.
pub const CLOSE_RADIUS: u32 = 2;

/// Parameters of the binarize + close stage that precedes contour tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Samples strictly greater than this map to `foreground`.
    pub threshold: u8,
    /// Value written for foreground pixels in the binary mask.
    pub foreground: u8,
    /// Structuring element of the morphological close.
    pub close_kernel: Kernel,
    /// Anchor of the structuring element, `(x, y)` within the kernel.
    pub close_anchor: (u32, u32),
}

impl Default for ContourConfig {
    fn default() -> Self {
        let size = 2 * CLOSE_RADIUS + 1;
        Self {
            threshold: CONTOUR_THRESHOLD,
            foreground: 255,
            close_kernel: Kernel::new(size, size),
            close_anchor: (CLOSE_RADIUS, CLOSE_RADIUS),
        }
    }
}

/// JPEG encoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JpegOptions {
    /// Compression quality, 0-100. Values below 1 are treated as 1.
    pub quality: u8,
    /// Emit a progressive JPEG.
    pub progressive: bool,
    /// Compute optimized Huffman tables.
    pub optimize: bool,
    /// Restart interval in MCUs; 0 disables restart markers.
    pub restart_interval: u16,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            progressive: false,
            optimize: false,
            restart_interval: 0,
        }
    }
}

impl JpegOptions {
    /// Default options with a different quality.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }
}
