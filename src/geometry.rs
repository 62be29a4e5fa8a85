//! ## Geometry Primitives
//!
//! This module defines the 2D point and axis-aligned bounding box types used
//! throughout the crate, together with the squared-distance helpers needed by
//! the concave hull search (point to segment, segment to segment, and segment
//! to box distances). Squared distances are used everywhere a comparison is
//! all that matters, so no square roots are taken.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point with double-precision coordinates.
///
/// Points are plain values; equality is componentwise. Coordinates must be
/// finite — the algorithms in this crate leave behavior on NaN or infinite
/// coordinates undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the squared Euclidean distance to another point.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// An axis-aligned bounding box stored as componentwise min/max corners.
///
/// The empty box has min = +inf and max = -inf, so that it intersects
/// nothing and extending it by any box yields that box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Returns the empty box.
    pub fn empty() -> Self {
        Rect {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Returns the degenerate box covering a single point.
    pub fn of_point(p: Point) -> Self {
        Rect {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Returns the bounding box of the segment (a, b).
    pub fn of_segment(a: Point, b: Point) -> Self {
        Rect {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the area of the box.
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// Returns the margin (half the perimeter) of the box.
    pub fn margin(&self) -> f64 {
        (self.max_x - self.min_x) + (self.max_y - self.min_y)
    }

    /// Returns the area of the smallest box containing both `self` and `other`.
    pub fn enlarged_area(&self, other: &Rect) -> f64 {
        (self.max_x.max(other.max_x) - self.min_x.min(other.min_x))
            * (self.max_y.max(other.max_y) - self.min_y.min(other.min_y))
    }

    /// Returns the area of the overlap between `self` and `other`.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);
        (max_x - min_x).max(0.0) * (max_y - min_y).max(0.0)
    }

    /// Returns true if `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Returns true if `self` and `other` overlap (boundaries included).
    pub fn intersects(&self, other: &Rect) -> bool {
        other.min_x <= self.max_x
            && other.min_y <= self.max_y
            && other.max_x >= self.min_x
            && other.max_y >= self.min_y
    }

    /// Returns true if the point lies inside the box (boundaries included).
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Grows `self` to cover `other`.
    pub fn extend(&mut self, other: &Rect) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }
}

/// Returns the squared distance from point `p` to the segment (a, b).
///
/// The projection of `p` onto the line through `a` and `b` is clamped to the
/// segment, so endpoints are handled correctly and a degenerate segment
/// falls back to point distance.
pub fn sq_seg_dist(p: Point, a: Point, b: Point) -> f64 {
    let mut x = a.x;
    let mut y = a.y;
    let mut dx = b.x - x;
    let mut dy = b.y - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    dx = p.x - x;
    dy = p.y - y;

    dx * dx + dy * dy
}

/// Returns the squared distance between the segments (x0,y0)-(x1,y1) and
/// (x2,y2)-(x3,y3).
///
/// Port of Dan Sunday's segment-to-segment distance
/// (http://geomalgorithms.com/a07-_distance.html), with the closest-point
/// parameters clamped on both segments.
#[allow(clippy::too_many_arguments)]
pub fn sq_seg_seg_dist(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) -> f64 {
    let ux = x1 - x0;
    let uy = y1 - y0;
    let vx = x3 - x2;
    let vy = y3 - y2;
    let wx = x0 - x2;
    let wy = y0 - y2;
    let a = ux * ux + uy * uy;
    let b = ux * vx + uy * vy;
    let c = vx * vx + vy * vy;
    let d = ux * wx + uy * wy;
    let e = vx * wx + vy * wy;
    let big_d = a * c - b * b;

    let mut s_n;
    let mut s_d = big_d;
    let mut t_n;
    let mut t_d = big_d;

    if big_d == 0.0 {
        // the segments are parallel
        s_n = 0.0;
        s_d = 1.0;
        t_n = e;
        t_d = c;
    } else {
        s_n = b * e - c * d;
        t_n = a * e - b * d;
        if s_n < 0.0 {
            s_n = 0.0;
            t_n = e;
            t_d = c;
        } else if s_n > s_d {
            s_n = s_d;
            t_n = e + b;
            t_d = c;
        }
    }

    if t_n < 0.0 {
        t_n = 0.0;
        if -d < 0.0 {
            s_n = 0.0;
        } else if -d > a {
            s_n = s_d;
        } else {
            s_n = -d;
            s_d = a;
        }
    } else if t_n > t_d {
        t_n = t_d;
        if (-d + b) < 0.0 {
            s_n = 0.0;
        } else if -d + b > a {
            s_n = s_d;
        } else {
            s_n = -d + b;
            s_d = a;
        }
    }

    let sc = if s_n == 0.0 { 0.0 } else { s_n / s_d };
    let tc = if t_n == 0.0 { 0.0 } else { t_n / t_d };

    let cx = (1.0 - sc) * x0 + sc * x1;
    let cy = (1.0 - sc) * y0 + sc * y1;
    let cx2 = (1.0 - tc) * x2 + tc * x3;
    let cy2 = (1.0 - tc) * y2 + tc * y3;
    let dx = cx2 - cx;
    let dy = cy2 - cy;

    dx * dx + dy * dy
}

/// Returns the squared distance from the segment (a, b) to the box.
///
/// Zero if either endpoint lies inside the box; otherwise the minimum over
/// the squared distances from the segment to the four sides of the box.
pub fn sq_seg_box_dist(a: Point, b: Point, rect: &Rect) -> f64 {
    if rect.contains_point(a) || rect.contains_point(b) {
        return 0.0;
    }
    let d1 = sq_seg_seg_dist(
        a.x, a.y, b.x, b.y, rect.min_x, rect.min_y, rect.max_x, rect.min_y,
    );
    if d1 == 0.0 {
        return 0.0;
    }
    let d2 = sq_seg_seg_dist(
        a.x, a.y, b.x, b.y, rect.min_x, rect.min_y, rect.min_x, rect.max_y,
    );
    if d2 == 0.0 {
        return 0.0;
    }
    let d3 = sq_seg_seg_dist(
        a.x, a.y, b.x, b.y, rect.max_x, rect.min_y, rect.max_x, rect.max_y,
    );
    if d3 == 0.0 {
        return 0.0;
    }
    let d4 = sq_seg_seg_dist(
        a.x, a.y, b.x, b.y, rect.min_x, rect.max_y, rect.max_x, rect.max_y,
    );
    if d4 == 0.0 {
        return 0.0;
    }
    d1.min(d2).min(d3.min(d4))
}
