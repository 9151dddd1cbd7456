//! Raster decoding: the entry boundary for every image-valued operation.
//!
//! Encoded buffers are decoded into a fresh [`RasterImage`] before any
//! processing. EXIF orientation is applied so that pixel coordinates match
//! what a viewer displays.
//!
//! # Examples
//!
//! ```ignore
//! use figcv_core::decode::decode;
//!
//! let bytes = std::fs::read("page.jpg").unwrap();
//! let image = decode(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod jpeg;
mod types;

pub use jpeg::{decode, decode_no_orientation, get_orientation};
pub use types::{DecodeError, Orientation, RasterImage};
