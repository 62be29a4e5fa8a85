//! Property-based tests for the geometry helpers and the orientation
//! predicate.

use concaveman::geometry::{sq_seg_box_dist, sq_seg_dist, Rect};
use concaveman::{orient2d, Point};
use proptest::prelude::*;

/// Coordinates that are exact multiples of 2^-20, so the orientation
/// determinant can be checked against integer arithmetic.
fn arb_dyadic() -> impl Strategy<Value = (f64, i64)> {
    (-1_000_000i64..1_000_000).prop_map(|k| (k as f64 / 1_048_576.0, k))
}

prop_compose! {
    fn arb_point()(x in -100.0..100.0, y in -100.0..100.0) -> Point {
        Point::new(x, y)
    }
}

prop_compose! {
    fn arb_rect()(x in -100.0..100.0, y in -100.0..100.0,
                  width in 0.0..150.0, height in 0.0..150.0) -> Rect {
        Rect { min_x: x, min_y: y, max_x: x + width, max_y: y + height }
    }
}

fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn exact_sign(ax: i64, ay: i64, bx: i64, by: i64, cx: i64, cy: i64) -> i32 {
    let det = (ay as i128 - cy as i128) * (bx as i128 - cx as i128)
        - (ax as i128 - cx as i128) * (by as i128 - cy as i128);
    match det {
        d if d > 0 => 1,
        d if d < 0 => -1,
        _ => 0,
    }
}

proptest! {
    #[test]
    fn test_orient2d_sign_matches_exact_arithmetic(
        a in arb_dyadic(), b in arb_dyadic(), c in arb_dyadic(),
        d in arb_dyadic(), e in arb_dyadic(), f in arb_dyadic()
    ) {
        let result = orient2d(a.0, b.0, c.0, d.0, e.0, f.0);
        let expected = exact_sign(a.1, b.1, c.1, d.1, e.1, f.1);
        prop_assert_eq!(sign(result), expected);
    }

    #[test]
    fn test_sq_seg_dist_bounded_by_endpoint_distances(
        p in arb_point(), a in arb_point(), b in arb_point()
    ) {
        let d = sq_seg_dist(p, a, b);
        prop_assert!(d >= 0.0);
        let slack = 1e-9 * (1.0 + d.abs());
        prop_assert!(d <= p.distance_sq(&a) + slack);
        prop_assert!(d <= p.distance_sq(&b) + slack);
    }

    #[test]
    fn test_sq_seg_dist_degenerate_segment_is_point_distance(
        p in arb_point(), a in arb_point()
    ) {
        prop_assert_eq!(sq_seg_dist(p, a, a), p.distance_sq(&a));
    }

    #[test]
    fn test_sq_seg_box_dist_is_a_lower_bound(
        a in arb_point(), b in arb_point(), rect in arb_rect(),
        tx in 0.0..1.0f64, ty in 0.0..1.0f64
    ) {
        // any point of the box is at least box-distance away from the segment
        let p = Point::new(
            rect.min_x + tx * (rect.max_x - rect.min_x),
            rect.min_y + ty * (rect.max_y - rect.min_y),
        );
        let box_dist = sq_seg_box_dist(a, b, &rect);
        let point_dist = sq_seg_dist(p, a, b);
        let slack = 1e-9 * (1.0 + point_dist.abs());
        prop_assert!(box_dist <= point_dist + slack);
    }

    #[test]
    fn test_rect_extend_covers_both(r1 in arb_rect(), r2 in arb_rect()) {
        let mut extended = r1;
        extended.extend(&r2);
        prop_assert!(extended.contains(&r1));
        prop_assert!(extended.contains(&r2));
        prop_assert!(extended.area() + 1e-9 >= r1.area());
        prop_assert!(extended.area() + 1e-9 >= r2.area());
    }

    #[test]
    fn test_rect_relations(r1 in arb_rect(), r2 in arb_rect()) {
        prop_assert_eq!(r1.intersects(&r2), r2.intersects(&r1));
        if r1.contains(&r2) {
            prop_assert!(r1.intersects(&r2));
            prop_assert!(r1.enlarged_area(&r2) == r1.area());
        }
        let overlap = r1.intersection_area(&r2);
        prop_assert!(overlap >= 0.0);
        prop_assert!(overlap <= r1.area() + 1e-9);
        prop_assert!(overlap <= r2.area() + 1e-9);
    }
}
