//! FigCV Core - figure and shape analysis for scanned pages
//!
//! This crate provides the processing core behind the FigCV bindings:
//! JPEG decoding and encoding, raster filters, contour tracing, contour
//! geometry, figure cropping and rotation.
//!
//! Every operation borrows its inputs and returns a freshly allocated
//! result. Failures are reported through per-module error types; the host
//! binding layer decides how to surface them.
//!
//! # Pipeline
//!
//! ```text
//! bytes -> decode -> [filter] -> contour::find_contours -> geometry::*
//!                 \-> transform::{extract_figure, rotate_in_place} -> encode -> bytes
//! ```

pub mod config;
pub mod contour;
pub mod decode;
pub mod encode;
pub mod filter;
pub mod geometry;
pub mod luminance;
pub mod transform;

pub use config::{ContourConfig, JpegOptions, DEFAULT_JPEG_QUALITY, ROTATION_BACKGROUND};
pub use contour::{find_contours, find_contours_with, RetrievalMode};
pub use decode::{decode, DecodeError, RasterImage};
pub use encode::{encode, encode_with_options, EncodeError};
pub use filter::{dilate, erode, gaussian_blur, invert, FilterError, Kernel};
pub use geometry::{
    arc_length, bounding_rect, contour_area, min_area_rect, AxisAlignedBox, Contour,
    GeometryError, Point, RotatedBox,
};
pub use transform::{extract_figure, rotate_in_place, CropError, FigureRegion};
