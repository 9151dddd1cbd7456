//! Errors raised at the JavaScript boundary.
//!
//! Core failures split into two classes here:
//!
//! - **Soft** failures (a rejected crop rectangle or crop source, a contour
//!   with too few points) become sentinel values: `-1` or an empty `Uint8Array`.
//! - **Hard** failures (undecodable bytes, malformed arguments, I/O) are
//!   thrown as JavaScript `Error`s.

use figcv_core::{CropError, DecodeError, EncodeError, FilterError, GeometryError};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Sentinel returned for soft failures of scalar measurements.
pub const SENTINEL: f64 = -1.0;

/// Errors surfaced by the bindings.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Crop(#[from] CropError),

    /// The bytes handed to `extractFigure` did not decode to an image.
    #[error("Cannot crop undecodable image: {0}")]
    UndecodableFigure(String),

    /// A kernel must be given as exactly `[width, height]`.
    #[error("Kernel must have exactly 2 elements, got {0}")]
    KernelArity(usize),

    /// Kernel dimensions must be positive.
    #[error("Kernel dimensions must be positive, got {width}x{height}")]
    KernelSize { width: i32, height: i32 },

    /// A contour value could not be read as `[[x, y], ...]`.
    #[error("Malformed contour: {0}")]
    MalformedContour(String),

    /// A result could not be converted to a JavaScript value.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl BindingError {
    /// Whether this failure maps to a sentinel instead of an exception.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            BindingError::Crop(_)
                | BindingError::UndecodableFigure(_)
                | BindingError::Geometry(GeometryError::DegenerateContour { .. })
        )
    }
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Replace a soft failure with `sentinel`, reporting it on the console.
/// Hard failures pass through.
pub(crate) fn or_sentinel<T>(
    result: Result<T, BindingError>,
    sentinel: T,
) -> Result<T, BindingError> {
    match result {
        Err(err) if err.is_soft() => {
            warn_console(&err.to_string());
            Ok(sentinel)
        }
        other => other,
    }
}

/// Mirror a soft failure to the browser console.
pub(crate) fn warn_console(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
