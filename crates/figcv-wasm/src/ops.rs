//! Byte-level operations behind the bindings.
//!
//! Each function takes encoded JPEG bytes (or a decoded contour), runs one
//! core operation and encodes the result with the default [`JpegOptions`].
//! Nothing here touches `JsValue`, so the whole layer runs in native tests.

use std::path::Path;

use figcv_core::contour::RetrievalMode;
use figcv_core::decode::{decode, DecodeError};
use figcv_core::encode::{encode_with_options, write_jpeg};
use figcv_core::filter::{dilate, erode, gaussian_blur, invert, Kernel};
use figcv_core::geometry::{self, AxisAlignedBox, Contour, Point, RotatedBox};
use figcv_core::transform::{extract_figure, rotate_in_place};
use figcv_core::{FigureRegion, JpegOptions, RasterImage};

use crate::error::BindingError;

fn reencode(image: &RasterImage) -> Result<Vec<u8>, BindingError> {
    Ok(encode_with_options(image, &JpegOptions::default())?)
}

/// Crop the decoded image to `region`.
///
/// # Errors
///
/// Soft `Crop` or `UndecodableFigure` errors for a rejected rectangle or
/// bytes that are not an image. An empty buffer is a hard `Decode` error.
pub fn extract_figure_bytes(region: &FigureRegion, bytes: &[u8]) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes).map_err(|err| match err {
        DecodeError::CorruptedFile(msg) => BindingError::UndecodableFigure(msg),
        other => BindingError::Decode(other),
    })?;
    let figure = extract_figure(region, &image)?;
    reencode(&figure)
}

/// Trace contours in the decoded image.
pub fn find_contours_bytes(bytes: &[u8], mode: &str) -> Result<Vec<Contour>, BindingError> {
    let image = decode(bytes)?;
    Ok(figcv_core::find_contours(
        &image,
        RetrievalMode::from_mode_name(mode),
    )?)
}

/// Minimum-area rotated rectangle of a contour.
///
/// # Errors
///
/// `Geometry` for an empty contour.
pub fn min_area_rect(contour: &[Point]) -> Result<RotatedBox, BindingError> {
    Ok(geometry::min_area_rect(contour)?)
}

/// Closed perimeter of a contour.
///
/// # Errors
///
/// Soft `Geometry` error for fewer than 2 points.
pub fn arc_length(contour: &[Point]) -> Result<f64, BindingError> {
    Ok(geometry::arc_length(contour)?)
}

/// Inclusive axis-aligned bounding box.
///
/// # Errors
///
/// Soft `Geometry` error for an empty contour.
pub fn bounding_rect(contour: &[Point]) -> Result<AxisAlignedBox, BindingError> {
    Ok(geometry::bounding_rect(contour)?)
}

/// Unsigned polygon area; 0 for fewer than 3 points.
pub fn contour_area(contour: &[Point]) -> f64 {
    geometry::contour_area(contour)
}

/// Decode and write the image to `path` as JPEG.
pub fn imwrite_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), BindingError> {
    let image = decode(bytes)?;
    write_jpeg(path, &image)?;
    Ok(())
}

/// Decode and re-encode with the default options.
pub fn imencode_bytes(bytes: &[u8]) -> Result<Vec<u8>, BindingError> {
    reencode(&decode(bytes)?)
}

/// Rotate about the center by `angle_degrees`, keeping the canvas size.
///
/// # Errors
///
/// `Decode` or `Encode` when the bytes cannot be read or written back.
pub fn rotate_in_place_bytes(bytes: &[u8], angle_degrees: f64) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes)?;
    reencode(&rotate_in_place(&image, angle_degrees))
}

/// Gaussian blur with a `kernel`-sized window.
///
/// # Arguments
///
/// * `bytes` - Encoded JPEG
/// * `kernel` - Window size; both dimensions odd
///
/// # Errors
///
/// `Filter` for an even kernel dimension, `Decode` for bad bytes.
pub fn gauss_bytes(bytes: &[u8], kernel: Kernel) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes)?;
    reencode(&gaussian_blur(&image, kernel)?)
}

/// Erode with a rectangular structuring element of size `kernel`.
///
/// # Errors
///
/// `Decode` for bad bytes, `Filter` for an unusable kernel.
pub fn erode_bytes(bytes: &[u8], kernel: Kernel) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes)?;
    reencode(&erode(&image, kernel)?)
}

/// Dilate with a rectangular structuring element of size `kernel`.
///
/// # Errors
///
/// `Decode` for bad bytes, `Filter` for an unusable kernel.
pub fn dilate_bytes(bytes: &[u8], kernel: Kernel) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes)?;
    reencode(&dilate(&image, kernel)?)
}

/// Grayscale inversion; the output JPEG has a single channel.
///
/// # Errors
///
/// `Decode` for bad bytes.
pub fn invert_bytes(bytes: &[u8]) -> Result<Vec<u8>, BindingError> {
    let image = decode(bytes)?;
    reencode(&invert(&image))
}
