//! Point-set types and the geometry error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by geometric measurements.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The contour has too few points for the measurement.
    #[error("Degenerate contour: {actual} point(s), at least {required} required")]
    DegenerateContour { required: usize, actual: usize },

    /// The contour has no points at all.
    #[error("Empty contour")]
    EmptyContour,
}

/// An integer pixel-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An ordered point sequence, implicitly closed from the last point back to
/// the first.
pub type Contour = Vec<Point>;

/// Build a contour from `(x, y)` pairs.
pub fn contour_from_pairs(pairs: &[(i32, i32)]) -> Contour {
    pairs.iter().copied().map(Point::from).collect()
}

/// An axis-aligned pixel rectangle.
///
/// `width` and `height` count pixels, so a single point has a 1x1 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl AxisAlignedBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the pixel `p` lies inside the box.
    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && py >= y && px < x + self.width as i64 && py < y + self.height as i64
    }
}

/// A rectangle at arbitrary orientation.
///
/// `width` is always the shorter side and `height` the longer one. `angle`
/// is the direction of the `width` side in degrees, measured from the +x axis
/// toward +y and normalized to `[0, 180)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedBox {
    #[serde(rename = "x")]
    pub center_x: f64,
    #[serde(rename = "y")]
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl RotatedBox {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The four corners, in order around the box.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let theta = self.angle.to_radians();
        let (ux, uy) = (theta.cos(), theta.sin());
        let (vx, vy) = (-uy, ux);
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let (cx, cy) = (self.center_x, self.center_y);

        [
            (cx - ux * hw - vx * hh, cy - uy * hw - vy * hh),
            (cx + ux * hw - vx * hh, cy + uy * hw - vy * hh),
            (cx + ux * hw + vx * hh, cy + uy * hw + vy * hh),
            (cx - ux * hw + vx * hh, cy - uy * hw + vy * hh),
        ]
    }
}
