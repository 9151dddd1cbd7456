//! Geometric measurements on traced contours.
//!
//! Contours are ordered integer point sequences in pixel coordinates
//! (x right, y down), implicitly closed. This module measures them:
//!
//! - [`arc_length`] / [`contour_area`] for perimeter and polygon area
//! - [`bounding_rect`] for the tight axis-aligned pixel box
//! - [`min_area_rect`] for the smallest enclosing box at any rotation
//!
//! Measurements that need a minimum number of points return
//! [`GeometryError`] instead of a sentinel value.

mod measure;
mod min_area_rect;
mod types;

pub use measure::{
    arc_length, bounding_rect, contour_area, signed_contour_area, MIN_ARC_POINTS,
    MIN_BOUNDING_POINTS,
};
pub use min_area_rect::{convex_hull, min_area_rect};
pub use types::{contour_from_pairs, AxisAlignedBox, Contour, GeometryError, Point, RotatedBox};
