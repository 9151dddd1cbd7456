//! Raster encoding: the exit boundary for image-valued operations.
//!
//! The only exchanged format is JPEG. [`encode`] uses the default option set
//! (quality 80, baseline, standard tables, no restart markers) unless a
//! quality is given; [`encode_with_options`] exposes every switch.
//!
//! # Examples
//!
//! ```ignore
//! use figcv_core::{decode::RasterImage, encode::encode};
//!
//! let gray = RasterImage::filled(100, 100, 3, 128);
//! let jpeg_bytes = encode(&gray, 80).unwrap();
//! ```

mod jpeg;

pub use jpeg::{encode, encode_with_options, write_jpeg, EncodeError};
