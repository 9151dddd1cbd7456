//! Rotation about the image center with bilinear resampling.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each output pixel we compute the
//! source position it comes from and interpolate the four surrounding
//! samples. With `c = (w / 2, h / 2)` and a positive angle turning content
//! counter-clockwise on screen (y down):
//!
//! ```text
//! src_x =  cos(θ) * (dst_x - dst_cx) - sin(θ) * (dst_y - dst_cy) + src_cx
//! src_y =  sin(θ) * (dst_x - dst_cx) + cos(θ) * (dst_y - dst_cy) + src_cy
//! ```
//!
//! Neighbors that fall outside the source read as the background value
//! ([`ROTATION_BACKGROUND`], white), so exposed areas blend into white.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ROTATION_BACKGROUND;
use crate::decode::RasterImage;

/// Output canvas of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationCanvas {
    /// Same size as the input; content rotated past the frame is clipped.
    #[default]
    Fixed,
    /// Grown to the rotated bounds so no content is lost.
    Expand,
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated, the corners extend beyond the original bounds.
/// This returns the smallest axis-aligned box that holds the whole rotated
/// image, as `(new_width, new_height)`.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    if abs_angle < 0.001 || (360.0 - abs_angle).abs() < 0.001 || (abs_angle - 180.0).abs() < 0.001
    {
        return (width, height);
    }
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();
    let (w, h) = (width as f64, height as f64);

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate on a canvas the same size as the input.
///
/// Content that rotates past the frame is clipped and the exposed corners
/// are filled with white.
pub fn rotate_in_place(image: &RasterImage, angle_degrees: f64) -> RasterImage {
    rotate(image, angle_degrees, RotationCanvas::Fixed)
}

/// Rotate about the image center by `angle_degrees` (positive is
/// counter-clockwise on screen).
pub fn rotate(image: &RasterImage, angle_degrees: f64, canvas: RotationCanvas) -> RasterImage {
    let angle_normalized = angle_degrees % 360.0;
    if image.is_empty() || angle_normalized.abs() < 0.001 {
        return image.clone();
    }

    let (dst_w, dst_h) = match canvas {
        RotationCanvas::Fixed => (image.width, image.height),
        RotationCanvas::Expand => compute_rotated_bounds(image.width, image.height, angle_degrees),
    };
    debug!(
        width = image.width,
        height = image.height,
        dst_w,
        dst_h,
        angle_degrees,
        "rotating image"
    );

    let angle_rad = angle_degrees.to_radians();
    let (sin, cos) = angle_rad.sin_cos();

    let src_cx = image.width as f64 / 2.0;
    let src_cy = image.height as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let c = image.channels as usize;
    let mut output = vec![0u8; dst_w as usize * dst_h as usize * c];
    let mut sample = vec![0u8; c];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let dx = dst_x as f64 - dst_cx;
            let dy = dst_y as f64 - dst_cy;

            let src_x = cos * dx - sin * dy + src_cx;
            let src_y = sin * dx + cos * dy + src_cy;

            sample_bilinear(image, src_x, src_y, &mut sample);

            let dst_idx = (dst_y as usize * dst_w as usize + dst_x as usize) * c;
            output[dst_idx..dst_idx + c].copy_from_slice(&sample);
        }
    }

    RasterImage::new(dst_w, dst_h, image.channels, output)
}

/// Sample at a fractional position, reading out-of-bounds neighbors as the
/// background value.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64, out: &mut [u8]) {
    let (w, h) = (image.width as i64, image.height as i64);
    let c = image.channels as usize;

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    if x0 < -1 || y0 < -1 || x0 >= w || y0 >= h {
        out.fill(ROTATION_BACKGROUND);
        return;
    }

    let fetch = |px: i64, py: i64, ch: usize| -> f64 {
        if px < 0 || py < 0 || px >= w || py >= h {
            ROTATION_BACKGROUND as f64
        } else {
            image.pixels[(py as usize * image.width as usize + px as usize) * c + ch] as f64
        }
    };

    for (ch, slot) in out.iter_mut().enumerate() {
        let v = fetch(x0, y0, ch) * (1.0 - fx) * (1.0 - fy)
            + fetch(x0 + 1, y0, ch) * fx * (1.0 - fy)
            + fetch(x0, y0 + 1, ch) * (1.0 - fx) * fy
            + fetch(x0 + 1, y0 + 1, ch) * fx * fy;
        *slot = v.clamp(0.0, 255.0).round() as u8;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
