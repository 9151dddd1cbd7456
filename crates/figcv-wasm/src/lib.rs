//! FigCV WASM - WebAssembly bindings for FigCV
//!
//! This crate exposes the figcv-core operations to JavaScript/TypeScript.
//! Images cross the boundary as JPEG bytes (`Uint8Array`); every
//! image-valued function decodes its input and returns a fresh JPEG.
//!
//! # Module Structure
//!
//! - `transform` - `extractFigure`, `rotateInPlace`
//! - `filter` - `gauss`, `erode`, `dilate`, `invert`
//! - `geometry` - `findContours`, `minAreaRect`, `arcLength`, `boundingRect`, `contourArea`
//! - `encode` - `imencode`, `imwrite`
//! - `ops` - the same operations on plain Rust values, used by the bindings
//! - `types` - argument marshalling (`FigureRegion`, kernels, contours)
//!
//! # Usage
//!
//! ```typescript
//! import init, { findContours, boundingRect, extractFigure, FigureRegion } from '@figcv/wasm';
//!
//! await init();
//!
//! const page = new Uint8Array(await file.arrayBuffer());
//! for (const contour of findContours(page, 'external')) {
//!   const box = boundingRect(contour);
//!   const figure = extractFigure(
//!     new FigureRegion(box.y, box.y + box.height, box.x, box.x + box.width),
//!     page,
//!   );
//! }
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod error;
mod filter;
mod geometry;
pub mod ops;
mod transform;
mod types;

pub use encode::{imencode, imwrite};
pub use error::{BindingError, SENTINEL};
pub use filter::{dilate, erode, gauss, invert};
pub use geometry::{arc_length, bounding_rect, contour_area, find_contours, min_area_rect};
pub use transform::{extract_figure, rotate_in_place};
pub use types::JsFigureRegion;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
