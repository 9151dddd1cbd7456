//! Stateless raster filters: gaussian blur, morphology and inversion.
//!
//! Every function borrows its input and returns a newly allocated raster.
//! Filters run independently on each channel.
//!
//! # Border handling
//!
//! - Gaussian blur reflects across the edge without repeating the edge
//!   sample (`dcb|abcdefgh|gfe`).
//! - Dilation and erosion only consider samples inside the image, so the
//!   border never introduces foreground or background.

mod gaussian;
mod invert;
mod morphology;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gaussian::{gaussian_blur, gaussian_weights};
pub use invert::invert;
pub use morphology::{dilate, dilate_anchored, erode, erode_anchored};

/// Errors that can occur when validating filter parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A kernel dimension is zero.
    #[error("Invalid kernel {width}x{height}: dimensions must be positive")]
    EmptyKernel { width: u32, height: u32 },

    /// Gaussian windows must have odd dimensions to have a center tap.
    #[error("Invalid gaussian kernel {width}x{height}: dimensions must be odd")]
    EvenKernel { width: u32, height: u32 },

    /// The anchor lies outside the structuring element.
    #[error("Anchor ({x}, {y}) lies outside the {width}x{height} kernel")]
    AnchorOutOfKernel {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A filter window or structuring element size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kernel {
    /// Horizontal extent in pixels.
    pub width: u32,
    /// Vertical extent in pixels.
    pub height: u32,
}

impl Kernel {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A `size`x`size` kernel.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// The anchor at the kernel center.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    fn validate(&self) -> Result<(), FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::EmptyKernel {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
