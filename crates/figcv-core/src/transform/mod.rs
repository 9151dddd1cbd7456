//! Raster-to-raster transforms: figure cropping and rotation.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x right, y down
//! - Crop regions are integer pixel edges, right and bottom exclusive
//! - Rotation angles are in degrees, positive = counter-clockwise on screen

mod crop;
mod rotation;

pub use crop::{extract_figure, CropError, FigureRegion};
pub use rotation::{compute_rotated_bounds, rotate, rotate_in_place, RotationCanvas};
