//! WASM-compatible wrapper types and argument marshalling.
//!
//! Host values arrive as plain numbers, arrays and objects. This module turns
//! them into core types and back:
//!
//! - `[width, height]` kernels into [`Kernel`]
//! - `[[x, y], ...]` arrays into [`Contour`]s
//! - crop targets into [`FigureRegion`] through the [`JsFigureRegion`] class

use figcv_core::{Contour, FigureRegion, Kernel, Point};
use wasm_bindgen::prelude::*;

use crate::error::BindingError;

/// A crop target for `extractFigure`.
///
/// All four edges are required; the core clamps negative values and rejects
/// empty or out-of-bounds rectangles.
///
/// ```typescript
/// const region = new FigureRegion(y1, y2, x1, x2);
/// const figure = extractFigure(region, jpegBytes);
/// ```
#[wasm_bindgen(js_name = FigureRegion)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsFigureRegion {
    y1: i32,
    y2: i32,
    x1: i32,
    x2: i32,
}

#[wasm_bindgen(js_class = FigureRegion)]
impl JsFigureRegion {
    #[wasm_bindgen(constructor)]
    pub fn new(y1: i32, y2: i32, x1: i32, x2: i32) -> JsFigureRegion {
        JsFigureRegion { y1, y2, x1, x2 }
    }

    #[wasm_bindgen(getter)]
    pub fn y1(&self) -> i32 {
        self.y1
    }

    #[wasm_bindgen(getter)]
    pub fn y2(&self) -> i32 {
        self.y2
    }

    #[wasm_bindgen(getter)]
    pub fn x1(&self) -> i32 {
        self.x1
    }

    #[wasm_bindgen(getter)]
    pub fn x2(&self) -> i32 {
        self.x2
    }
}

impl JsFigureRegion {
    /// Convert to the core region type.
    pub(crate) fn to_region(&self) -> FigureRegion {
        FigureRegion::new(
            self.y1 as i64,
            self.y2 as i64,
            self.x1 as i64,
            self.x2 as i64,
        )
    }
}

/// Read a `[width, height]` kernel.
///
/// # Errors
///
/// `KernelArity` unless exactly two values are given, `KernelSize` unless
/// both are positive.
pub(crate) fn kernel_from_slice(values: &[i32]) -> Result<Kernel, BindingError> {
    let [width, height] = values else {
        return Err(BindingError::KernelArity(values.len()));
    };
    if *width <= 0 || *height <= 0 {
        return Err(BindingError::KernelSize {
            width: *width,
            height: *height,
        });
    }
    Ok(Kernel::new(*width as u32, *height as u32))
}

/// Build a contour from `[x, y]` pairs.
pub(crate) fn contour_from_pairs(pairs: Vec<[i32; 2]>) -> Contour {
    pairs.into_iter().map(Point::from).collect()
}

/// Flatten a contour to `[x, y]` pairs.
pub(crate) fn contour_to_pairs(contour: &[Point]) -> Vec<[i32; 2]> {
    contour.iter().map(|&p| p.into()).collect()
}

/// Read a contour from a JavaScript `[[x, y], ...]` array.
pub(crate) fn contour_from_js(value: JsValue) -> Result<Contour, BindingError> {
    let pairs: Vec<[i32; 2]> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| BindingError::MalformedContour(e.to_string()))?;
    Ok(contour_from_pairs(pairs))
}

/// Convert a serializable result to a JavaScript value.
pub(crate) fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, BindingError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| BindingError::Serialization(e.to_string()))
}
