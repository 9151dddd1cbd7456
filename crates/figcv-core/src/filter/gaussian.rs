//! Separable gaussian blur with a caller-chosen window.
//!
//! The standard deviation is derived from the window size:
//!
//! ```text
//! sigma = 0.3 * ((n - 1) * 0.5 - 1) + 0.8
//! ```
//!
//! Windows of 1, 3, 5 and 7 taps use fixed binomial-like tables instead.

use super::{FilterError, Kernel};
use crate::decode::RasterImage;

const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
    ],
];

/// 1-D gaussian weights for an `n`-tap window, normalized to sum to 1.
pub fn gaussian_weights(n: u32) -> Vec<f32> {
    if n % 2 == 1 && n <= 7 {
        return SMALL_KERNELS[(n / 2) as usize].to_vec();
    }

    let sigma = 0.3 * ((n as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let scale = -0.5 / (sigma * sigma);
    let mid = (n as f64 - 1.0) * 0.5;

    let raw: Vec<f64> = (0..n)
        .map(|i| {
            let d = i as f64 - mid;
            (scale * d * d).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| (w / sum) as f32).collect()
}

/// Blur an image with a `kernel.width` x `kernel.height` gaussian window.
///
/// # Errors
///
/// Returns `FilterError::EmptyKernel` for a zero dimension and
/// `FilterError::EvenKernel` when either dimension is even.
pub fn gaussian_blur(image: &RasterImage, kernel: Kernel) -> Result<RasterImage, FilterError> {
    kernel.validate()?;
    if kernel.width % 2 == 0 || kernel.height % 2 == 0 {
        return Err(FilterError::EvenKernel {
            width: kernel.width,
            height: kernel.height,
        });
    }
    if image.is_empty() {
        return Ok(image.clone());
    }

    let kx = gaussian_weights(kernel.width);
    let ky = gaussian_weights(kernel.height);
    let (w, h, c) = (
        image.width as usize,
        image.height as usize,
        image.channels as usize,
    );
    let rx = (kx.len() / 2) as i64;
    let ry = (ky.len() / 2) as i64;

    // Horizontal pass into a float buffer
    let mut horizontal = vec![0.0f32; image.pixels.len()];
    for y in 0..h {
        let row = y * w * c;
        for x in 0..w {
            for ch in 0..c {
                let mut acc = 0.0f32;
                for (i, weight) in kx.iter().enumerate() {
                    let sx = reflect_101(x as i64 + i as i64 - rx, w);
                    acc += weight * image.pixels[row + sx * c + ch] as f32;
                }
                horizontal[row + x * c + ch] = acc;
            }
        }
    }

    // Vertical pass
    let mut output = vec![0u8; image.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                let mut acc = 0.0f32;
                for (i, weight) in ky.iter().enumerate() {
                    let sy = reflect_101(y as i64 + i as i64 - ry, h);
                    acc += weight * horizontal[(sy * w + x) * c + ch];
                }
                output[(y * w + x) * c + ch] = acc.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    Ok(RasterImage::new(image.width, image.height, image.channels, output))
}

/// Map an index outside `0..len` back inside by mirroring about the edge
/// samples without repeating them.
#[inline]
fn reflect_101(i: i64, len: usize) -> usize {
    let len = len as i64;
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut i = i.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    i as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(size: u32) -> RasterImage {
        let mut img = RasterImage::filled(size, size, 1, 0);
        let mid = (size / 2) as usize;
        img.pixels[mid * size as usize + mid] = 255;
        img
    }

    #[test]
    fn test_weights_sum_to_one() {
        for n in [1, 3, 5, 7, 9, 11, 21] {
            let sum: f32 = gaussian_weights(n).iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "n={} sum={}", n, sum);
        }
    }

    #[test]
    fn test_weights_symmetric_and_peaked() {
        let w = gaussian_weights(9);
        assert_eq!(w.len(), 9);
        for i in 0..4 {
            assert!((w[i] - w[8 - i]).abs() < 1e-6);
            assert!(w[i] < w[i + 1]);
        }
    }

    #[test]
    fn test_small_kernel_table() {
        assert_eq!(gaussian_weights(3), vec![0.25, 0.5, 0.25]);
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(2, 5), 2);
        assert_eq!(reflect_101(-3, 1), 0);
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        let img = RasterImage::filled(20, 10, 3, 120);
        let result = gaussian_blur(&img, Kernel::new(5, 5)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let img = impulse(11);
        let result = gaussian_blur(&img, Kernel::new(3, 3)).unwrap();

        // Center weight 0.5 * 0.5
        assert_eq!(result.pixels[5 * 11 + 5], 64);
        assert!(result.pixels[5 * 11 + 4] > 0);
        assert_eq!(result.pixels[0], 0);
    }

    #[test]
    fn test_blur_asymmetric_kernel() {
        let img = impulse(11);
        let result = gaussian_blur(&img, Kernel::new(5, 1)).unwrap();

        // Only the center row is touched
        assert!(result.pixels[5 * 11 + 3] > 0);
        assert_eq!(result.pixels[4 * 11 + 5], 0);
    }

    #[test]
    fn test_blur_identity_kernel() {
        let img = impulse(7);
        let result = gaussian_blur(&img, Kernel::new(1, 1)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_blur_rejects_even_kernel() {
        let img = impulse(7);
        assert_eq!(
            gaussian_blur(&img, Kernel::new(4, 3)),
            Err(FilterError::EvenKernel {
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_blur_rejects_empty_kernel() {
        let img = impulse(7);
        assert!(matches!(
            gaussian_blur(&img, Kernel::new(0, 3)),
            Err(FilterError::EmptyKernel { .. })
        ));
    }

    #[test]
    fn test_blur_does_not_mutate_input() {
        let img = impulse(9);
        let before = img.clone();
        let _ = gaussian_blur(&img, Kernel::new(5, 5)).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_blur_tiny_image() {
        let img = RasterImage::filled(1, 1, 3, 77);
        let result = gaussian_blur(&img, Kernel::new(9, 9)).unwrap();
        assert_eq!(result.pixels, vec![77, 77, 77]);
    }
}
