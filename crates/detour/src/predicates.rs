//! Incidence, intersection, and distance predicates on points and segments.
//!
//! Every function is pure and takes its points by value. Segments are passed
//! as endpoint pairs `(a, b)`; lines through two distinct points likewise.
//! All sign tests go through `Scalar`, so "on the line" means within `EPS`
//! of an exact zero cross product.

use crate::scalar::{abs, Scalar};
use crate::vector::{cross_prod, dot_prod, Vector};

/// Is `p` on the infinite line `ab`?
#[inline]
pub fn is_on_line(p: Vector, a: Vector, b: Vector) -> bool {
    cross_prod(a - p, b - p) == 0.0
}

/// Is `p` on the closed segment `ab`?
#[inline]
pub fn is_on_segment(p: Vector, a: Vector, b: Vector) -> bool {
    is_on_line(p, a, b) && dot_prod(p - a, p - b).sign() <= 0
}

/// Crossing point of the lines `a1b1` and `a2b2`.
///
/// Returns `None` when the direction vectors are parallel (zero cross product
/// within tolerance), including when either line is degenerate.
pub fn find_lines_intersection(a1: Vector, b1: Vector, a2: Vector, b2: Vector) -> Option<Vector> {
    let det = cross_prod(b1 - a1, b2 - a2);
    if det.sign() == 0 {
        return None;
    }
    Some(a1 + (b1 - a1) * (cross_prod(a2 - a1, b2 - a2) / det))
}

/// Does segment `s1s2` touch or cross the line `ab`?
#[inline]
pub fn does_segment_intersect_line(s1: Vector, s2: Vector, a: Vector, b: Vector) -> bool {
    cross_prod(s1 - a, b - a).sign() * cross_prod(s2 - a, b - a).sign() <= 0
}

/// Do the closed segments `a1b1` and `a2b2` share a point?
pub fn are_segments_intersecting(a1: Vector, b1: Vector, a2: Vector, b2: Vector) -> bool {
    if a1 == b1 {
        if a2 == b2 {
            return a1 == a2;
        }
        return is_on_segment(a1, a2, b2);
    }
    if a2 == b2 {
        return is_on_segment(a2, a1, b1);
    }
    if is_on_line(a1, a2, b2) && is_on_line(b1, a2, b2) {
        return is_on_segment(a1, a2, b2)
            || is_on_segment(b1, a2, b2)
            || is_on_segment(a2, a1, b1)
            || is_on_segment(b2, a1, b1);
    }
    does_segment_intersect_line(a1, b1, a2, b2) && does_segment_intersect_line(a2, b2, a1, b1)
}

/// Does the ray from `s` through `x` reach the line `ab`?
///
/// True when segment `sx` already meets the line, or when `s` is farther from
/// the line than `x` (so the ray keeps approaching it). Distances are
/// compared as unnormalized cross-product magnitudes.
pub fn does_ray_intersect_line(s: Vector, x: Vector, a: Vector, b: Vector) -> bool {
    does_segment_intersect_line(s, x, a, b)
        || abs(cross_prod(a - b, s - a)) > abs(cross_prod(a - b, x - a))
}

/// Does the ray from `s` through `x` reach the segment `ab`?
pub fn does_ray_intersect_segment(s: Vector, x: Vector, a: Vector, b: Vector) -> bool {
    does_ray_intersect_line(s, x, a, b) && does_segment_intersect_line(a, b, s, x)
}

/// Distance from `p` to the line through distinct points `a` and `b`.
pub fn dist_between_point_and_line(p: Vector, a: Vector, b: Vector) -> Scalar {
    abs(cross_prod(p - a, b - a) / (b - a).len())
}

/// Distance from `p` to the closed segment `ab`.
pub fn dist_between_point_and_segment(p: Vector, a: Vector, b: Vector) -> Scalar {
    if dot_prod(p - a, b - a) <= Scalar::ZERO {
        return (p - a).len();
    }
    if dot_prod(p - b, a - b) <= Scalar::ZERO {
        return (p - b).len();
    }
    dist_between_point_and_line(p, a, b)
}

/// Distance between two segments known not to intersect.
///
/// For disjoint segments the minimum is always attained at an endpoint of
/// one of them, so four point/segment distances suffice.
pub fn dist_between_unintersecting_segments(
    s1: Vector,
    f1: Vector,
    s2: Vector,
    f2: Vector,
) -> Scalar {
    dist_between_point_and_segment(s1, s2, f2)
        .min(dist_between_point_and_segment(f1, s2, f2))
        .min(dist_between_point_and_segment(s2, s1, f1))
        .min(dist_between_point_and_segment(f2, s1, f1))
}

/// Distance between the closed segments `s1f1` and `s2f2`.
pub fn dist_between_segments(s1: Vector, f1: Vector, s2: Vector, f2: Vector) -> Scalar {
    if are_segments_intersecting(s1, f1, s2, f2) {
        return Scalar::ZERO;
    }
    dist_between_unintersecting_segments(s1, f1, s2, f2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    #[test]
    fn line_and_segment_incidence() {
        let a = v(0.0, 0.0);
        let b = v(2.0, 2.0);
        assert!(is_on_line(v(5.0, 5.0), a, b));
        assert!(!is_on_segment(v(5.0, 5.0), a, b));
        assert!(is_on_segment(v(1.0, 1.0), a, b));
        assert!(is_on_segment(a, a, b));
        assert!(is_on_segment(b, a, b));
        assert!(!is_on_line(v(1.0, 1.1), a, b));
        // Noise below tolerance still counts as on the line.
        assert!(is_on_segment(v(1.0, 1.0 + 1e-11), a, b));
    }

    #[test]
    fn lines_intersection_general_and_parallel() {
        let p = find_lines_intersection(v(0.0, 0.0), v(2.0, 0.0), v(1.0, -1.0), v(1.0, 3.0));
        assert_eq!(p, Some(v(1.0, 0.0)));
        // Lines are infinite: the crossing may lie outside both segments.
        let q = find_lines_intersection(v(0.0, 0.0), v(1.0, 1.0), v(5.0, 0.0), v(5.0, 1.0));
        assert_eq!(q, Some(v(5.0, 5.0)));
        assert!(find_lines_intersection(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(3.0, 1.0)).is_none());
        assert!(find_lines_intersection(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)).is_none());
        assert!(find_lines_intersection(v(1.0, 1.0), v(1.0, 1.0), v(0.0, 0.0), v(3.0, 1.0)).is_none());
    }

    #[test]
    fn segment_against_line() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 0.0);
        assert!(does_segment_intersect_line(v(5.0, -1.0), v(5.0, 1.0), a, b));
        assert!(does_segment_intersect_line(v(5.0, 0.0), v(5.0, 1.0), a, b));
        assert!(!does_segment_intersect_line(v(5.0, 0.5), v(5.0, 1.0), a, b));
    }

    #[test]
    fn segments_general_position() {
        assert!(are_segments_intersecting(v(-1.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(0.0, -1.0)));
        assert!(!are_segments_intersecting(v(-1.0, 0.0), v(1.0, 0.0), v(0.0, 2.0), v(0.0, 1.0)));
        // T-junction counts.
        assert!(are_segments_intersecting(v(-1.0, 0.0), v(1.0, 0.0), v(0.0, 0.0), v(0.0, 1.0)));
        // Shared endpoint counts.
        assert!(are_segments_intersecting(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)));
    }

    #[test]
    fn segments_collinear() {
        let a = v(0.0, 0.0);
        let b = v(2.0, 0.0);
        assert!(are_segments_intersecting(a, b, v(1.0, 0.0), v(3.0, 0.0)));
        assert!(are_segments_intersecting(a, b, v(-1.0, 0.0), v(3.0, 0.0)));
        assert!(are_segments_intersecting(a, b, v(2.0, 0.0), v(3.0, 0.0)));
        assert!(!are_segments_intersecting(a, b, v(2.5, 0.0), v(3.0, 0.0)));
    }

    #[test]
    fn segments_degenerate() {
        let p = v(1.0, 0.0);
        assert!(are_segments_intersecting(p, p, p, p));
        assert!(!are_segments_intersecting(p, p, v(1.0, 1.0), v(1.0, 1.0)));
        assert!(are_segments_intersecting(p, p, v(0.0, 0.0), v(2.0, 0.0)));
        assert!(are_segments_intersecting(v(0.0, 0.0), v(2.0, 0.0), p, p));
        assert!(!are_segments_intersecting(v(0.0, 1.0), v(2.0, 1.0), p, p));
    }

    #[test]
    fn ray_tests() {
        let a = v(0.0, 1.0);
        let b = v(1.0, 1.0);
        // Heading toward the line but stopping short.
        assert!(does_ray_intersect_line(v(0.5, -1.0), v(0.5, 0.0), a, b));
        // Heading away.
        assert!(!does_ray_intersect_line(v(0.5, 0.0), v(0.5, -1.0), a, b));
        // Toward the line and within the segment's span.
        assert!(does_ray_intersect_segment(v(0.5, -1.0), v(0.5, 0.0), a, b));
        // Toward the line but aimed past the segment.
        assert!(!does_ray_intersect_segment(v(3.0, -1.0), v(3.0, 0.0), a, b));
    }

    #[test]
    fn distances() {
        let a = v(0.0, 0.0);
        let b = v(4.0, 0.0);
        assert!(dist_between_point_and_line(v(10.0, 3.0), a, b) == 3.0);
        assert!(dist_between_point_and_segment(v(2.0, 3.0), a, b) == 3.0);
        assert!(dist_between_point_and_segment(v(-3.0, 4.0), a, b) == 5.0);
        assert!(dist_between_point_and_segment(v(7.0, -4.0), a, b) == 5.0);
        assert!(dist_between_unintersecting_segments(a, b, v(5.0, 1.0), v(5.0, 3.0)) == 2f64.sqrt());
        assert!(dist_between_segments(a, b, v(2.0, -1.0), v(2.0, 1.0)) == 0.0);
        assert!(dist_between_segments(a, b, v(1.0, 2.0), v(3.0, 2.0)) == 2.0);
    }

    fn coord() -> impl Strategy<Value = f64> {
        -10.0f64..10.0
    }

    fn point() -> impl Strategy<Value = Vector> {
        (coord(), coord()).prop_map(|(x, y)| Vector::new(x, y))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a1 in point(), b1 in point(), a2 in point(), b2 in point()) {
            let r = are_segments_intersecting(a1, b1, a2, b2);
            prop_assert_eq!(r, are_segments_intersecting(a2, b2, a1, b1));
            prop_assert_eq!(r, are_segments_intersecting(b1, a1, a2, b2));
            prop_assert_eq!(r, are_segments_intersecting(a1, b1, b2, a2));
        }

        #[test]
        fn distance_is_symmetric_and_zero_on_contact(
            a1 in point(), b1 in point(), a2 in point(), b2 in point()
        ) {
            let d = dist_between_segments(a1, b1, a2, b2);
            let d_swapped = dist_between_segments(a2, b2, a1, b1);
            prop_assert!(d == d_swapped);
            prop_assert_eq!(d == 0.0, are_segments_intersecting(a1, b1, a2, b2));
        }

        #[test]
        fn point_segment_hits_iff_on_segment(a in point(), b in point(), t in -0.5f64..1.5) {
            let p = a + (b - a) * t;
            prop_assert_eq!(are_segments_intersecting(p, p, a, b), is_on_segment(p, a, b));
            prop_assert_eq!(are_segments_intersecting(a, b, p, p), is_on_segment(p, a, b));
            let off = p + Vector::new(0.0, 1.0);
            if (b - a).x.sign() != 0 {
                prop_assert!(!are_segments_intersecting(off, off, a, b));
            }
        }
    }
}
