//! Chain compression of traced borders.

use crate::geometry::Point;

/// Drop every point that continues the straight run it sits on.
///
/// A traced border moves one pixel at a time, so a point is redundant when
/// the step arriving at it has the same direction as the step leaving it.
/// The sequence is treated as closed. Contours of one or two points are
/// returned unchanged.
pub fn compress_chain(points: &[Point]) -> Vec<Point> {
    let mut pts: &[Point] = points;
    // Some tracers close the loop by repeating the start point
    if pts.len() > 1 && pts.first() == pts.last() {
        pts = &pts[..pts.len() - 1];
    }

    let n = pts.len();
    if n <= 2 {
        return pts.to_vec();
    }

    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| pts[i])
        .collect();

    if kept.is_empty() {
        pts.to_vec()
    } else {
        kept
    }
}

#[inline]
fn step(from: Point, to: Point) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}
