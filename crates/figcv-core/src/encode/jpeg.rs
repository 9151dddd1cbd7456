//! JPEG encoding.
//!
//! Uses the `jpeg-encoder` crate, which exposes the progressive, optimized
//! Huffman table and restart interval switches needed by [`JpegOptions`].

use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};
use thiserror::Error;

use crate::config::{JpegOptions, DEFAULT_JPEG_QUALITY};
use crate::decode::RasterImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A dimension exceeds what a JPEG frame header can hold.
    #[error("Invalid dimensions: {width}x{height} exceeds the JPEG limit of 65535")]
    InvalidDimensions { width: u32, height: u32 },

    /// No JPEG color type matches this channel count.
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    /// JPEG encoding failed.
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode a raster to JPEG with the given quality and default options.
///
/// An empty raster encodes to an empty buffer without invoking the codec.
pub fn encode(image: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_with_options(image, &JpegOptions::with_quality(quality))
}

/// Encode a raster to JPEG.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web
/// * Below 60: Low quality, visible artifacts
pub fn encode_with_options(
    image: &RasterImage,
    options: &JpegOptions,
) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Ok(Vec::new());
    }

    let expected = image.pixel_count() * image.channels as usize;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let (Ok(width), Ok(height)) = (u16::try_from(image.width), u16::try_from(image.height))
    else {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    };

    let color_type = match image.channels {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        other => return Err(EncodeError::UnsupportedChannels(other)),
    };

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, options.quality.clamp(1, 100));
    encoder.set_progressive(options.progressive);
    // jpeg-encoder corrupts scans that mix optimized tables with restart
    // markers. Restart markers win.
    if options.restart_interval > 0 {
        encoder.set_restart_interval(options.restart_interval);
        if options.optimize {
            tracing::debug!(
                restart_interval = options.restart_interval,
                "optimized huffman tables disabled with restart markers"
            );
        }
    } else {
        encoder.set_optimized_huffman_tables(options.optimize);
    }

    encoder
        .encode(&image.pixels, width, height, color_type)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode with default options and write the result to `path`.
pub fn write_jpeg<P: AsRef<Path>>(path: P, image: &RasterImage) -> Result<(), EncodeError> {
    let bytes = encode(image, DEFAULT_JPEG_QUALITY)?;
    std::fs::write(path.as_ref(), bytes)?;
    tracing::debug!(path = %path.as_ref().display(), "wrote jpeg");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn gradient(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
            }
        }
        RasterImage::new(width, height, 3, pixels)
    }

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_basic() {
        let jpeg = encode(&gradient(100, 100), 90).unwrap();
        assert_jpeg_markers(&jpeg);
    }

    #[test]
    fn test_encode_empty_image_returns_empty_buffer() {
        let jpeg = encode(&RasterImage::empty(), 80).unwrap();
        assert!(jpeg.is_empty());
    }

    #[test]
    fn test_encode_grayscale() {
        let jpeg = encode(&RasterImage::filled(10, 10, 1, 30), 80).unwrap();
        assert_jpeg_markers(&jpeg);
    }

    #[test]
    fn test_encode_quality_clamping() {
        let img = RasterImage::filled(10, 10, 3, 128);
        assert!(encode(&img, 0).is_ok());
        assert!(encode(&img, 255).is_ok());
    }

    #[test]
    fn test_encode_invalid_pixel_data() {
        let img = RasterImage {
            width: 100,
            height: 100,
            channels: 3,
            pixels: vec![128u8; 99 * 100 * 3],
        };
        assert!(matches!(
            encode(&img, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_unsupported_channels() {
        let img = RasterImage {
            width: 2,
            height: 2,
            channels: 2,
            pixels: vec![0u8; 8],
        };
        assert!(matches!(
            encode(&img, 90),
            Err(EncodeError::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_encode_oversized_dimensions() {
        let img = RasterImage {
            width: 70_000,
            height: 1,
            channels: 1,
            pixels: vec![0u8; 70_000],
        };
        assert!(matches!(
            encode(&img, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    fn max_diff(a: &RasterImage, b: &RasterImage) -> u8 {
        a.pixels
            .iter()
            .zip(&b.pixels)
            .map(|(&x, &y)| x.abs_diff(y))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_encode_with_all_options() {
        let source = gradient(64, 48);
        for progressive in [false, true] {
            let options = JpegOptions {
                quality: 70,
                progressive,
                optimize: true,
                restart_interval: 4,
            };
            let jpeg = encode_with_options(&source, &options).unwrap();
            assert_jpeg_markers(&jpeg);

            let img = decode(&jpeg).unwrap();
            assert_eq!((img.width, img.height), (64, 48));
            assert!(
                max_diff(&source, &img) < 40,
                "progressive={progressive} diff={}",
                max_diff(&source, &img)
            );
        }
    }

    #[test]
    fn test_optimized_tables_without_restarts() {
        let source = gradient(64, 48);
        let options = JpegOptions {
            quality: 70,
            progressive: false,
            optimize: true,
            restart_interval: 0,
        };
        let img = decode(&encode_with_options(&source, &options).unwrap()).unwrap();
        assert!(max_diff(&source, &img) < 40);
    }

    #[test]
    fn test_encode_deterministic() {
        let img = gradient(20, 20);
        assert_eq!(encode(&img, 80).unwrap(), encode(&img, 80).unwrap());
    }

    #[test]
    fn test_write_jpeg() {
        let path = std::env::temp_dir().join(format!("figcv-write-{}.jpg", std::process::id()));
        write_jpeg(&path, &gradient(12, 8)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let img = decode(&bytes).unwrap();
        assert_eq!((img.width, img.height), (12, 8));
    }

    #[test]
    fn test_write_jpeg_bad_path() {
        let path = std::env::temp_dir()
            .join("figcv-missing-dir")
            .join("nested")
            .join("out.jpg");
        assert!(matches!(
            write_jpeg(&path, &gradient(4, 4)),
            Err(EncodeError::Io(_))
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode;
    use proptest::prelude::*;

    proptest! {
        /// Property: decode(encode(image)) preserves the dimensions.
        #[test]
        fn prop_roundtrip_preserves_dimensions(
            (width, height) in (1u32..=40, 1u32..=40),
            quality in 1u8..=100,
            channels in prop::sample::select(vec![1u8, 3]),
        ) {
            let len = (width * height * channels as u32) as usize;
            let pixels: Vec<u8> = (0..len).map(|i| ((i * 37) % 256) as u8).collect();
            let img = RasterImage::new(width, height, channels, pixels);

            let jpeg = encode(&img, quality).unwrap();
            let decoded = decode(&jpeg).unwrap();

            prop_assert_eq!(decoded.width, width);
            prop_assert_eq!(decoded.height, height);
        }

        /// Property: every quality value produces a valid JPEG.
        #[test]
        fn prop_all_quality_values_work(quality in 0u8..=255) {
            let img = RasterImage::filled(10, 10, 3, 128);
            let jpeg = encode(&img, quality);
            prop_assert!(jpeg.is_ok(), "Quality {} should work after clamping", quality);
        }
    }
}
