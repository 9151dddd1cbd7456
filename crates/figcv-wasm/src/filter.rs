//! WASM bindings for the raster filters.
//!
//! Kernels are passed as `[width, height]`. Each function decodes the input,
//! filters it and returns a new JPEG.

use wasm_bindgen::prelude::*;

use crate::ops;
use crate::types::kernel_from_slice;

/// Gaussian blur. Both kernel dimensions must be odd; sigma follows from
/// the size.
#[wasm_bindgen]
pub fn gauss(image: &[u8], kernel: Vec<i32>) -> Result<Vec<u8>, JsValue> {
    let kernel = kernel_from_slice(&kernel)?;
    Ok(ops::gauss_bytes(image, kernel)?)
}

/// Erode with a rectangular structuring element.
#[wasm_bindgen]
pub fn erode(image: &[u8], kernel: Vec<i32>) -> Result<Vec<u8>, JsValue> {
    let kernel = kernel_from_slice(&kernel)?;
    Ok(ops::erode_bytes(image, kernel)?)
}

/// Dilate with a rectangular structuring element.
#[wasm_bindgen]
pub fn dilate(image: &[u8], kernel: Vec<i32>) -> Result<Vec<u8>, JsValue> {
    let kernel = kernel_from_slice(&kernel)?;
    Ok(ops::dilate_bytes(image, kernel)?)
}

/// Convert to grayscale and invert. The result is a single-channel JPEG.
#[wasm_bindgen]
pub fn invert(image: &[u8]) -> Result<Vec<u8>, JsValue> {
    Ok(ops::invert_bytes(image)?)
}
