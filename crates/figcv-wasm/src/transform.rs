//! WASM bindings for figure cropping and rotation.

use wasm_bindgen::prelude::*;

use crate::error::or_sentinel;
use crate::ops;
use crate::types::JsFigureRegion;

/// Crop a JPEG to `region`.
///
/// Negative coordinates are clamped to 0. A region that is empty or extends
/// past the image, or non-empty bytes that do not decode, yield an empty
/// `Uint8Array` and a console warning.
///
/// # Errors
///
/// Throws if `image` is empty.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const figure = extractFigure(new FigureRegion(y1, y2, x1, x2), jpeg);
/// if (figure.byteLength === 0) {
///   // detection produced an unusable rectangle
/// }
/// ```
#[wasm_bindgen(js_name = extractFigure)]
pub fn extract_figure(region: &JsFigureRegion, image: &[u8]) -> Result<Vec<u8>, JsValue> {
    let result = ops::extract_figure_bytes(&region.to_region(), image);
    Ok(or_sentinel(result, Vec::new())?)
}

/// Rotate a JPEG about its center by `angle_degrees` (counter-clockwise).
///
/// The output keeps the input's width and height: corners rotated out of
/// the frame are clipped and exposed areas are filled with white.
#[wasm_bindgen(js_name = rotateInPlace)]
pub fn rotate_in_place(image: &[u8], angle_degrees: f64) -> Result<Vec<u8>, JsValue> {
    Ok(ops::rotate_in_place_bytes(image, angle_degrees)?)
}
