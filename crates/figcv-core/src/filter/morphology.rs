//! Dilation and erosion with a rectangular structuring element.
//!
//! A rectangle is separable, so each operation runs as a horizontal
//! min/max pass followed by a vertical one.

use super::{FilterError, Kernel};
use crate::decode::RasterImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MorphOp {
    Dilate,
    Erode,
}

impl MorphOp {
    #[inline]
    fn pick(self, a: u8, b: u8) -> u8 {
        match self {
            MorphOp::Dilate => a.max(b),
            MorphOp::Erode => a.min(b),
        }
    }

    #[inline]
    fn identity(self) -> u8 {
        match self {
            MorphOp::Dilate => u8::MIN,
            MorphOp::Erode => u8::MAX,
        }
    }
}

/// Dilate with a rectangular element anchored at its center.
pub fn dilate(image: &RasterImage, kernel: Kernel) -> Result<RasterImage, FilterError> {
    dilate_anchored(image, kernel, kernel.center())
}

/// Erode with a rectangular element anchored at its center.
pub fn erode(image: &RasterImage, kernel: Kernel) -> Result<RasterImage, FilterError> {
    erode_anchored(image, kernel, kernel.center())
}

/// Dilate with a rectangular element anchored at `anchor`.
pub fn dilate_anchored(
    image: &RasterImage,
    kernel: Kernel,
    anchor: (u32, u32),
) -> Result<RasterImage, FilterError> {
    morph(image, kernel, anchor, MorphOp::Dilate)
}

/// Erode with a rectangular element anchored at `anchor`.
pub fn erode_anchored(
    image: &RasterImage,
    kernel: Kernel,
    anchor: (u32, u32),
) -> Result<RasterImage, FilterError> {
    morph(image, kernel, anchor, MorphOp::Erode)
}

fn morph(
    image: &RasterImage,
    kernel: Kernel,
    anchor: (u32, u32),
    op: MorphOp,
) -> Result<RasterImage, FilterError> {
    kernel.validate()?;
    if anchor.0 >= kernel.width || anchor.1 >= kernel.height {
        return Err(FilterError::AnchorOutOfKernel {
            x: anchor.0,
            y: anchor.1,
            width: kernel.width,
            height: kernel.height,
        });
    }
    if image.is_empty() {
        return Ok(image.clone());
    }

    let (w, h, c) = (
        image.width as i64,
        image.height as i64,
        image.channels as usize,
    );
    // Window for output x covers x - ax ..= x - ax + kw - 1
    let (x_lo, x_hi) = (-(anchor.0 as i64), kernel.width as i64 - 1 - anchor.0 as i64);
    let (y_lo, y_hi) = (-(anchor.1 as i64), kernel.height as i64 - 1 - anchor.1 as i64);

    let mut horizontal = vec![0u8; image.pixels.len()];
    for y in 0..h {
        let row = (y * w) as usize * c;
        for x in 0..w {
            let from = (x + x_lo).max(0);
            let to = (x + x_hi).min(w - 1);
            for ch in 0..c {
                let mut acc = op.identity();
                for sx in from..=to {
                    acc = op.pick(acc, image.pixels[row + sx as usize * c + ch]);
                }
                horizontal[row + x as usize * c + ch] = acc;
            }
        }
    }

    let mut output = vec![0u8; image.pixels.len()];
    for y in 0..h {
        let from = (y + y_lo).max(0);
        let to = (y + y_hi).min(h - 1);
        for x in 0..w {
            for ch in 0..c {
                let mut acc = op.identity();
                for sy in from..=to {
                    acc = op.pick(acc, horizontal[(sy * w + x) as usize * c + ch]);
                }
                output[(y * w + x) as usize * c + ch] = acc;
            }
        }
    }

    Ok(RasterImage::new(image.width, image.height, image.channels, output))
}
