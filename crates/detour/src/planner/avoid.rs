//! Per-edge geometry: safety margin, detour angle, and the detour itself.

use crate::error::PlanError;
use crate::predicates::{
    are_segments_intersecting, dist_between_point_and_segment,
    dist_between_unintersecting_segments, find_lines_intersection,
};
use crate::scalar::Scalar;
use crate::vector::{cross_prod, rotated, unoriented_angle, Vector};

use super::types::{Obstacle, PlannerCfg};

/// Safety margin for edge `k`: how far its detour may reach.
///
/// Minimum of `cap`, the distance from every earlier non-adjacent edge to
/// edge `k`, and the distances from `start` and `finish` to edge `k`. Edge
/// `k - 1` shares a vertex with edge `k` and is skipped.
pub(crate) fn find_margin(
    obstacle: &Obstacle,
    start: Vector,
    finish: Vector,
    k: usize,
    cap: f64,
) -> Scalar {
    let (s1, s2) = obstacle.edge(k);
    let mut margin = Scalar::new(cap);
    for i in 0..k.saturating_sub(1) {
        let (a, b) = obstacle.edge(i);
        margin = margin.min(dist_between_unintersecting_segments(a, b, s1, s2));
    }
    margin
        .min(dist_between_point_and_segment(start, s1, s2))
        .min(dist_between_point_and_segment(finish, s1, s2))
}

/// Rotation used to build the detour around edge `k`.
///
/// Edge 0 uses the configured default; later edges use the angle at vertex
/// `k` between the two obstacle edges meeting there. Collinear neighbours
/// (angle 0 or π) would fold the detour onto the edge's own line, so they
/// also get the default.
pub(crate) fn detour_angle(obstacle: &Obstacle, k: usize, cfg: &PlannerCfg) -> f64 {
    if k == 0 {
        return cfg.first_edge_angle;
    }
    let v = obstacle.vertices();
    let (ahead, behind) = (v[k] - v[k + 1], v[k] - v[k - 1]);
    if cross_prod(ahead, behind).sign() == 0 {
        return cfg.first_edge_angle;
    }
    unoriented_angle(ahead, behind)
}

/// Moves `point` onto the circle of `radius` around `center` if it lies outside.
fn pull_within(center: Vector, point: Vector, radius: Scalar) -> Vector {
    let dir = point - center;
    let len = dir.len();
    if len > radius {
        center + dir * (radius / len)
    } else {
        point
    }
}

#[inline]
fn side(s1: Vector, s1s2: Vector, p: Vector) -> i32 {
    cross_prod(s1s2, p - s1).sign()
}

/// Vertices replacing the path between the entry segment and the exit segment.
///
/// `entry` is the first path segment meeting obstacle edge `s1s2`, `exit` the
/// last one (possibly the same segment). The returned vertices go, in order,
/// from a point on the entry segment's line to a point on the exit segment's
/// line, staying within `margin` of `s2` except at the ends.
///
/// Crossing case (entry and exit on opposite sides of the edge's line):
/// 3 to 5 vertices wrapping around `s2` through the apex `p2`.
/// Graze case (same side): 2 vertices on that side.
pub(crate) fn segment_avoidance(
    entry: (Vector, Vector),
    exit: (Vector, Vector),
    s1: Vector,
    s2: Vector,
    margin: Scalar,
    angle: f64,
    edge: usize,
) -> Result<Vec<Vector>, PlanError> {
    let meet = |a: Vector, b: Vector, c: Vector, d: Vector| {
        find_lines_intersection(a, b, c, d).ok_or(PlanError::ParallelLines { edge })
    };
    let (start1, finish1) = entry;
    let (start2, finish2) = exit;

    let s1s2 = s2 - s1;
    let mut p1 = s1 + rotated(s1s2, angle);
    let p2 = s2 + s1s2 * (margin / s1s2.len());
    let mut p3 = s1 + rotated(s1s2, -angle);
    if side(s1, s1s2, p1) != side(s1, s1s2, start1) {
        std::mem::swap(&mut p1, &mut p3);
    }
    if side(s1, s1s2, p1) == 0 {
        return Err(PlanError::DegenerateDetour { edge });
    }
    // p1 now shares a half-plane with start1.
    let p1 = pull_within(s2, p1, margin);
    let p3 = pull_within(s2, p3, margin);

    let crossing = side(s1, s1s2, p1) != side(s1, s1s2, finish2);
    let mut out = Vec::with_capacity(5);
    if are_segments_intersecting(start1, finish1, s1, p1) {
        out.push(meet(start1, finish1, s1, p1)?);
        if crossing {
            out.push(p1);
        }
    } else {
        out.push(meet(start1, finish1, p1, p2)?);
    }

    if crossing {
        out.push(p2);
        if are_segments_intersecting(start2, finish2, s1, p3) {
            out.push(p3);
            out.push(meet(start2, finish2, s1, p3)?);
        } else {
            out.push(meet(start2, finish2, p3, p2)?);
        }
    } else if are_segments_intersecting(start2, finish2, s1, p1) {
        out.push(meet(start2, finish2, s1, p1)?);
    } else {
        out.push(meet(start2, finish2, p1, p2)?);
    }
    Ok(out)
}
