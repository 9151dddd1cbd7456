//! Perimeter, area and axis-aligned bounds of a contour.

use super::{AxisAlignedBox, GeometryError, Point};

/// Minimum number of points for a closed perimeter.
pub const MIN_ARC_POINTS: usize = 2;

/// Minimum number of points for a bounding rectangle.
pub const MIN_BOUNDING_POINTS: usize = 1;

/// Closed-polygon perimeter: the Euclidean length of every consecutive edge
/// plus the closing edge from the last point back to the first.
///
/// # Errors
///
/// `GeometryError::DegenerateContour` for fewer than [`MIN_ARC_POINTS`] points.
pub fn arc_length(points: &[Point]) -> Result<f64, GeometryError> {
    if points.len() < MIN_ARC_POINTS {
        return Err(GeometryError::DegenerateContour {
            required: MIN_ARC_POINTS,
            actual: points.len(),
        });
    }

    let n = points.len();
    Ok((0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let dx = (b.x as f64) - (a.x as f64);
            let dy = (b.y as f64) - (a.y as f64);
            dx.hypot(dy)
        })
        .sum())
}

/// Shoelace area keeping its sign.
///
/// Positive when the points run counter-clockwise in a y-up frame, which is
/// clockwise on screen. Fewer than 3 points give `0.0`.
pub fn signed_contour_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            (a.x as f64) * (b.y as f64) - (b.x as f64) * (a.y as f64)
        })
        .sum();
    twice / 2.0
}

/// Absolute polygon area; `0.0` for fewer than 3 points.
pub fn contour_area(points: &[Point]) -> f64 {
    signed_contour_area(points).abs()
}

/// Tightest axis-aligned pixel rectangle containing every point.
///
/// Bounds are inclusive, so the width is `max_x - min_x + 1`.
///
/// # Errors
///
/// `GeometryError::DegenerateContour` for an empty contour.
pub fn bounding_rect(points: &[Point]) -> Result<AxisAlignedBox, GeometryError> {
    let Some(first) = points.first() else {
        return Err(GeometryError::DegenerateContour {
            required: MIN_BOUNDING_POINTS,
            actual: 0,
        });
    };

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let span = |lo: i32, hi: i32| (hi as i64 - lo as i64 + 1).min(u32::MAX as i64) as u32;
    Ok(AxisAlignedBox::new(
        min_x,
        min_y,
        span(min_x, max_x),
        span(min_y, max_y),
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-500i32..500, -500i32..500), 0..40)
            .prop_map(|v| v.into_iter().map(Point::from).collect())
    }

    proptest! {
        /// Property: every point lies inside its bounding rectangle.
        #[test]
        fn prop_bounding_rect_contains_points(points in points_strategy()) {
            prop_assume!(!points.is_empty());
            let rect = bounding_rect(&points).unwrap();
            for p in &points {
                prop_assert!(rect.contains(*p));
            }
        }

        /// Property: area is invariant under reversing the point order.
        #[test]
        fn prop_area_winding_invariant(points in points_strategy()) {
            let reversed: Vec<Point> = points.iter().rev().copied().collect();
            prop_assert!((contour_area(&points) - contour_area(&reversed)).abs() < 1e-6);
        }

        /// Property: perimeter is invariant under translation.
        #[test]
        fn prop_perimeter_translation_invariant(
            points in points_strategy(),
            (dx, dy) in (-100i32..100, -100i32..100),
        ) {
            prop_assume!(points.len() >= 2);
            let moved: Vec<Point> = points.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect();
            let a = arc_length(&points).unwrap();
            let b = arc_length(&moved).unwrap();
            prop_assert!((a - b).abs() < 1e-6);
        }

        /// Property: a closed path crosses its bounding box twice in each axis.
        #[test]
        fn prop_perimeter_spans_box_twice(points in points_strategy()) {
            prop_assume!(points.len() >= 2);
            let rect = bounding_rect(&points).unwrap();
            let span = (rect.width.max(rect.height) - 1) as f64;
            prop_assert!(arc_length(&points).unwrap() + 1e-9 >= 2.0 * span);
        }
    }
}
