//! WASM bindings for contour tracing and measurement.
//!
//! Contours cross the boundary as `[[x, y], ...]` arrays. Rectangles are
//! returned as `{x, y, width, height}` objects and rotated boxes as
//! `{x, y, width, height, angle}`, where `x`/`y` is the center.
//!
//! `arcLength` and `boundingRect` return `-1` for contours with too few
//! points instead of throwing.

use wasm_bindgen::prelude::*;

use crate::error::{or_sentinel, warn_console, SENTINEL};
use crate::ops;
use crate::types::{contour_from_js, contour_to_pairs, to_js};

/// Trace contours. `mode` is `"external"` for outermost borders only; any
/// other value returns every border.
#[wasm_bindgen(js_name = findContours)]
pub fn find_contours(image: &[u8], mode: &str) -> Result<JsValue, JsValue> {
    let contours = ops::find_contours_bytes(image, mode)?;
    let pairs: Vec<Vec<[i32; 2]>> = contours.iter().map(|c| contour_to_pairs(c)).collect();
    Ok(to_js(&pairs)?)
}

/// Minimum-area rotated rectangle; `width` is always the shorter side.
///
/// # Errors
///
/// Throws for an empty or malformed contour.
#[wasm_bindgen(js_name = minAreaRect)]
pub fn min_area_rect(contour: JsValue) -> Result<JsValue, JsValue> {
    let contour = contour_from_js(contour)?;
    let rect = ops::min_area_rect(&contour)?;
    Ok(to_js(&rect)?)
}

/// Closed perimeter, or `-1` for fewer than 2 points.
#[wasm_bindgen(js_name = arcLength)]
pub fn arc_length(contour: JsValue) -> Result<f64, JsValue> {
    let contour = contour_from_js(contour)?;
    Ok(or_sentinel(ops::arc_length(&contour), SENTINEL)?)
}

/// Axis-aligned bounding box, or `-1` for an empty contour.
#[wasm_bindgen(js_name = boundingRect)]
pub fn bounding_rect(contour: JsValue) -> Result<JsValue, JsValue> {
    let contour = contour_from_js(contour)?;
    match ops::bounding_rect(&contour) {
        Ok(rect) => Ok(to_js(&rect)?),
        Err(err) if err.is_soft() => {
            warn_console(&err.to_string());
            Ok(JsValue::from_f64(SENTINEL))
        }
        Err(err) => Err(err.into()),
    }
}

/// Polygon area, `0` for fewer than 3 points.
#[wasm_bindgen(js_name = contourArea)]
pub fn contour_area(contour: JsValue) -> Result<f64, JsValue> {
    let contour = contour_from_js(contour)?;
    Ok(ops::contour_area(&contour))
}
