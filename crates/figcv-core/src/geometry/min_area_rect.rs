//! Convex hull and minimum-area enclosing rectangle.
//!
//! # Algorithm
//!
//! The minimum-area rectangle around a point set has one side collinear
//! with an edge of the set's convex hull. For every hull edge we project the
//! hull onto the edge direction `u` and its normal `v`; the extents along
//! `u` and `v` give a candidate rectangle and the smallest one wins.
//!
//! ```text
//!          v
//!          ^     +-----------+
//!          |    /  hull     /
//!          |   /           /
//!          +--*----------*-----> u   (edge p_i -> p_i+1)
//! ```

use super::{GeometryError, Point, RotatedBox};

/// Convex hull of a point set (Andrew's monotone chain).
///
/// Duplicate and collinear boundary points are dropped. The hull of a single
/// distinct point is that point; collinear input yields its two endpoints.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_unstable_by_key(|p| (p.x, p.y));
    pts.dedup();

    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Z component of `(a - o) x (b - o)`, computed in i64.
#[inline]
fn cross(o: Point, a: Point, b: Point) -> i64 {
    let (ox, oy) = (o.x as i64, o.y as i64);
    (a.x as i64 - ox) * (b.y as i64 - oy) - (a.y as i64 - oy) * (b.x as i64 - ox)
}

/// Smallest-area rectangle, at any orientation, enclosing every point.
///
/// The result reports the shorter side as `width`; `angle` is the direction
/// of that side in `[0, 180)` degrees.
///
/// # Errors
///
/// `GeometryError::EmptyContour` when `points` is empty.
pub fn min_area_rect(points: &[Point]) -> Result<RotatedBox, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyContour);
    }

    let hull = convex_hull(points);
    if hull.len() == 1 {
        return Ok(RotatedBox {
            center_x: hull[0].x as f64,
            center_y: hull[0].y as f64,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
        });
    }

    let pts: Vec<(f64, f64)> = hull.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    let n = pts.len();

    let mut best: Option<Candidate> = None;
    for i in 0..n {
        let (ox, oy) = pts[i];
        let (nx, ny) = pts[(i + 1) % n];
        let len = (nx - ox).hypot(ny - oy);
        let (ux, uy) = ((nx - ox) / len, (ny - oy) / len);
        let (vx, vy) = (-uy, ux);

        let (mut u_min, mut u_max, mut v_min, mut v_max) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for &(px, py) in &pts {
            let (dx, dy) = (px - ox, py - oy);
            let pu = dx * ux + dy * uy;
            let pv = dx * vx + dy * vy;
            u_min = u_min.min(pu);
            u_max = u_max.max(pu);
            v_min = v_min.min(pv);
            v_max = v_max.max(pv);
        }

        let area = (u_max - u_min) * (v_max - v_min);
        if best.as_ref().map_or(true, |b| area < b.area) {
            let (mu, mv) = ((u_min + u_max) / 2.0, (v_min + v_max) / 2.0);
            best = Some(Candidate {
                area,
                center: (ox + ux * mu + vx * mv, oy + uy * mu + vy * mv),
                side_u: u_max - u_min,
                side_v: v_max - v_min,
                angle_u: uy.atan2(ux).to_degrees(),
            });
        }
    }

    // n >= 2, so the loop ran at least once
    let Some(best) = best else {
        return Err(GeometryError::EmptyContour);
    };

    let (width, height, angle) = if best.side_u <= best.side_v {
        (best.side_u, best.side_v, best.angle_u)
    } else {
        (best.side_v, best.side_u, best.angle_u + 90.0)
    };

    Ok(RotatedBox {
        center_x: best.center.0,
        center_y: best.center.1,
        width,
        height,
        angle: normalize_angle(angle),
    })
}

struct Candidate {
    area: f64,
    center: (f64, f64),
    side_u: f64,
    side_v: f64,
    angle_u: f64,
}

/// Fold an angle in degrees into `[0, 180)`.
fn normalize_angle(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(180.0);
    if a >= 180.0 - 1e-9 {
        0.0
    } else {
        a
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
