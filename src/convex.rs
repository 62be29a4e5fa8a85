//! ## Convex Hull
//!
//! Andrew's monotone-chain convex hull, plus a pre-filter that discards
//! points strictly inside the quadrilateral spanned by the four axis-extreme
//! points before running the chain construction. The pre-filter typically
//! eliminates the bulk of the input for well-distributed point sets.

use crate::geometry::Point;
use crate::polygon::point_in_polygon;
use crate::predicates::orient2d;
use std::cmp::Ordering;
use tracing::debug;

/// Orientation of the triangle (p1, p2, p3), robust sign.
pub(crate) fn cross(p1: Point, p2: Point, p3: Point) -> f64 {
    orient2d(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y)
}

// NaN sorts below any non-NaN value, matching the lexicographic order the
// chain construction assumes.
fn f64_less(a: f64, b: f64) -> bool {
    a < b || (a.is_nan() && !b.is_nan())
}

fn cmp_coord(a: f64, b: f64) -> Ordering {
    if f64_less(a, b) {
        Ordering::Less
    } else if f64_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn cmp_points(p: &Point, q: &Point) -> Ordering {
    if p.x == q.x {
        cmp_coord(p.y, q.y)
    } else {
        cmp_coord(p.x, q.x)
    }
}

/// Computes the convex hull of the points with Andrew's monotone chain.
///
/// The points are sorted lexicographically (x, then y); the lower chain is
/// built left to right and the upper chain right to left, popping while the
/// turn is not strictly convex. The returned hull lists the vertices once,
/// without repeating the starting vertex at the end.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut points = points.to_vec();
    points.sort_by(cmp_points);

    let mut lower: Vec<Point> = Vec::new();
    for &p in &points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::new();
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Computes the convex hull after culling points that cannot lie on it.
///
/// Finds the leftmost, topmost, rightmost and bottommost points (first
/// occurrence wins ties), discards every point strictly inside the
/// quadrilateral they span, and runs [`convex_hull`] on the survivors plus
/// the four extremes.
pub fn fast_convex_hull(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut left = points[0];
    let mut top = points[0];
    let mut right = points[0];
    let mut bottom = points[0];

    for &p in points {
        if p.x < left.x {
            left = p;
        }
        if p.x > right.x {
            right = p;
        }
        if p.y < top.y {
            top = p;
        }
        if p.y > bottom.y {
            bottom = p;
        }
    }

    let cull = [left, top, right, bottom];
    let mut filtered = cull.to_vec();
    for &p in points {
        if !point_in_polygon(p, &cull) {
            filtered.push(p);
        }
    }
    debug!(
        "Convex hull pre-filter kept {} of {} points",
        filtered.len(),
        points.len()
    );

    convex_hull(&filtered)
}
