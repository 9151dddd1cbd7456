//! Contour extraction: binarize, close, trace.
//!
//! # Pipeline
//!
//! 1. **Binarize**: a pixel is foreground when any of its samples exceeds
//!    [`ContourConfig::threshold`]. No grayscale conversion happens first.
//! 2. **Close**: one dilation then one erosion with the configured
//!    rectangular element, bridging small gaps in the mask.
//! 3. **Trace**: Suzuki-Abe border following (`imageproc`), keeping either
//!    the outermost borders or every border in the hierarchy.
//! 4. **Compress**: straight runs collapse to their end points.
//!
//! Hierarchy links are not returned; the result is a flat list.

mod chain;

use image::{GrayImage, Luma};
use imageproc::contours::BorderType;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ContourConfig;
use crate::decode::RasterImage;
use crate::filter::{dilate_anchored, erode_anchored, FilterError};
use crate::geometry::{Contour, Point};

pub use chain::compress_chain;

/// Which borders to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMode {
    /// Only outer borders that no other border encloses.
    External,
    /// Every outer border and hole border.
    #[default]
    All,
}

impl RetrievalMode {
    /// Parse a host-supplied mode name. `"external"` selects
    /// [`RetrievalMode::External`]; anything else means the full hierarchy.
    pub fn from_mode_name(name: &str) -> Self {
        if name == "external" {
            RetrievalMode::External
        } else {
            RetrievalMode::All
        }
    }
}

/// Trace contours with the default binarize and close parameters.
///
/// Returns an empty list when the image has no foreground.
///
/// # Errors
///
/// Never fails with the default configuration; see [`find_contours_with`].
pub fn find_contours(
    image: &RasterImage,
    mode: RetrievalMode,
) -> Result<Vec<Contour>, FilterError> {
    find_contours_with(image, mode, &ContourConfig::default())
}

/// Trace contours with explicit binarize and close parameters.
///
/// # Errors
///
/// `FilterError` when `config.close_kernel` is empty or its anchor lies
/// outside it.
pub fn find_contours_with(
    image: &RasterImage,
    mode: RetrievalMode,
    config: &ContourConfig,
) -> Result<Vec<Contour>, FilterError> {
    if image.is_empty() {
        return Ok(Vec::new());
    }

    let mask = binarize(image, config);
    let dilated = dilate_anchored(&mask, config.close_kernel, config.close_anchor)?;
    let closed = erode_anchored(&dilated, config.close_kernel, config.close_anchor)?;

    let traced = imageproc::contours::find_contours::<i32>(&framed_mask(&closed));
    let total = traced.len();

    let contours: Vec<Contour> = traced
        .into_iter()
        .filter(|c| match mode {
            RetrievalMode::External => c.border_type == BorderType::Outer && c.parent.is_none(),
            RetrievalMode::All => true,
        })
        .map(|c| {
            let points: Vec<Point> = c
                .points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            compress_chain(&points)
        })
        .collect();

    debug!(
        width = image.width,
        height = image.height,
        ?mode,
        traced = total,
        kept = contours.len(),
        "traced contours"
    );

    Ok(contours)
}

/// Copy a mask into a grayscale buffer with a one-pixel background frame.
///
/// The tracer never starts an outer border in column 0, so foreground that
/// touches the image edge must be moved off it. Traced points are shifted
/// back by (-1, -1).
fn framed_mask(mask: &RasterImage) -> GrayImage {
    GrayImage::from_fn(mask.width + 2, mask.height + 2, |x, y| {
        if x == 0 || y == 0 || x > mask.width || y > mask.height {
            Luma([0])
        } else {
            Luma([mask.pixel(x - 1, y - 1)[0]])
        }
    })
}

/// Single-channel mask: `config.foreground` where any sample exceeds the
/// threshold, 0 elsewhere.
pub fn binarize(image: &RasterImage, config: &ContourConfig) -> RasterImage {
    let c = (image.channels as usize).max(1);
    let pixels: Vec<u8> = image
        .pixels
        .chunks_exact(c)
        .map(|px| {
            if px.iter().any(|&v| v > config.threshold) {
                config.foreground
            } else {
                0
            }
        })
        .collect();
    RasterImage::new(image.width, image.height, 1, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{bounding_rect, AxisAlignedBox};

    fn fill_rect(img: &mut RasterImage, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) {
        let c = img.channels as usize;
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = (y * img.width + x) as usize * c;
                for ch in 0..c {
                    img.pixels[idx + ch] = value;
                }
            }
        }
    }

    #[test]
    fn test_mode_name_parsing() {
        assert_eq!(RetrievalMode::from_mode_name("external"), RetrievalMode::External);
        assert_eq!(RetrievalMode::from_mode_name("all"), RetrievalMode::All);
        assert_eq!(RetrievalMode::from_mode_name("tree"), RetrievalMode::All);
        assert_eq!(RetrievalMode::from_mode_name("EXTERNAL"), RetrievalMode::All);
    }

    #[test]
    fn test_blank_image_has_no_contours() {
        let img = RasterImage::filled(32, 32, 3, 0);
        assert!(find_contours(&img, RetrievalMode::External).unwrap().is_empty());
        assert!(find_contours(&img, RetrievalMode::All).unwrap().is_empty());
    }

    #[test]
    fn test_empty_image_has_no_contours() {
        let img = RasterImage::empty();
        assert!(find_contours(&img, RetrievalMode::All).unwrap().is_empty());
    }

    #[test]
    fn test_filled_square_yields_its_corners() {
        let mut img = RasterImage::filled(30, 30, 1, 0);
        fill_rect(&mut img, 5, 5, 15, 15, 255);

        let contours = find_contours(&img, RetrievalMode::External).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
        assert_eq!(
            bounding_rect(&contours[0]).unwrap(),
            AxisAlignedBox::new(5, 5, 10, 10)
        );
    }

    #[test]
    fn test_ring_external_vs_all() {
        let mut img = RasterImage::filled(40, 40, 1, 0);
        fill_rect(&mut img, 5, 5, 35, 35, 255);
        fill_rect(&mut img, 12, 12, 28, 28, 0);

        assert_eq!(find_contours(&img, RetrievalMode::External).unwrap().len(), 1);
        assert_eq!(find_contours(&img, RetrievalMode::All).unwrap().len(), 2);
    }

    #[test]
    fn test_nested_object_excluded_from_external() {
        let mut img = RasterImage::filled(60, 60, 1, 0);
        fill_rect(&mut img, 5, 5, 55, 55, 255);
        fill_rect(&mut img, 12, 12, 48, 48, 0);
        fill_rect(&mut img, 25, 25, 35, 35, 255);

        assert_eq!(find_contours(&img, RetrievalMode::External).unwrap().len(), 1);
        assert_eq!(find_contours(&img, RetrievalMode::All).unwrap().len(), 3);
    }

    #[test]
    fn test_close_bridges_small_gap() {
        let mut img = RasterImage::filled(40, 20, 1, 0);
        fill_rect(&mut img, 5, 5, 15, 15, 255);
        fill_rect(&mut img, 17, 5, 27, 15, 255);

        let contours = find_contours(&img, RetrievalMode::External).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(
            bounding_rect(&contours[0]).unwrap(),
            AxisAlignedBox::new(5, 5, 22, 10)
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = ContourConfig::default();
        let img = RasterImage::new(2, 1, 1, vec![40, 41]);
        assert_eq!(binarize(&img, &config).pixels, vec![0, 255]);
    }

    #[test]
    fn test_any_channel_counts_as_foreground() {
        let config = ContourConfig::default();
        let img = RasterImage::new(2, 1, 3, vec![0, 0, 90, 30, 30, 30]);
        let mask = binarize(&img, &config);
        assert_eq!(mask.channels, 1);
        assert_eq!(mask.pixels, vec![255, 0]);
    }

    #[test]
    fn test_dim_pixels_are_background() {
        let mut img = RasterImage::filled(30, 30, 3, 0);
        fill_rect(&mut img, 5, 5, 15, 15, 40);
        assert!(find_contours(&img, RetrievalMode::All).unwrap().is_empty());
    }

    #[test]
    fn test_left_edge_block_is_outer() {
        let mut img = RasterImage::filled(30, 30, 3, 0);
        fill_rect(&mut img, 0, 5, 10, 15, 255);

        for mode in [RetrievalMode::External, RetrievalMode::All] {
            let contours = find_contours(&img, mode).unwrap();
            assert_eq!(contours.len(), 1, "{mode:?}");
            assert_eq!(
                bounding_rect(&contours[0]).unwrap(),
                AxisAlignedBox::new(0, 5, 10, 10)
            );
        }
    }

    #[test]
    fn test_white_page_is_one_border() {
        let img = RasterImage::filled(20, 20, 3, 255);

        for mode in [RetrievalMode::External, RetrievalMode::All] {
            let contours = find_contours(&img, mode).unwrap();
            assert_eq!(contours.len(), 1, "{mode:?}");
            assert_eq!(contours[0].len(), 4);
            assert_eq!(
                bounding_rect(&contours[0]).unwrap(),
                AxisAlignedBox::new(0, 0, 20, 20)
            );
        }
    }

    #[test]
    fn test_single_pixel_image() {
        let img = RasterImage::filled(1, 1, 3, 255);

        for mode in [RetrievalMode::External, RetrievalMode::All] {
            let contours = find_contours(&img, mode).unwrap();
            assert_eq!(contours, vec![vec![Point::new(0, 0)]], "{mode:?}");
        }
    }

    #[test]
    fn test_edge_blocks_on_every_side() {
        let mut img = RasterImage::filled(40, 40, 1, 0);
        fill_rect(&mut img, 0, 15, 6, 25, 255);
        fill_rect(&mut img, 34, 15, 40, 25, 255);
        fill_rect(&mut img, 15, 0, 25, 6, 255);
        fill_rect(&mut img, 15, 34, 25, 40, 255);

        assert_eq!(find_contours(&img, RetrievalMode::External).unwrap().len(), 4);
        assert_eq!(find_contours(&img, RetrievalMode::All).unwrap().len(), 4);
    }

    #[test]
    fn test_custom_config_rejects_bad_anchor() {
        let config = ContourConfig {
            close_anchor: (9, 9),
            ..ContourConfig::default()
        };
        let img = RasterImage::filled(8, 8, 1, 255);
        assert!(find_contours_with(&img, RetrievalMode::All, &config).is_err());
    }
}
