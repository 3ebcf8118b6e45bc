//! Incremental obstacle avoidance.
//!
//! Purpose
//! - Route a polyline from `start` to `finish` that no obstacle edge crosses.
//! - Edges are handled one at a time, in chain order. For each edge, the run of
//!   path segments touching it is replaced by a short detour around the
//!   edge's far endpoint. There is no backtracking.
//!
//! Guarantees and limits
//! - The path always begins at `start` and ends at `finish`, exactly.
//! - Each detour stays within a safety margin of the edge; the margin is
//!   bounded by the distance to earlier non-adjacent edges and to the
//!   endpoints, so a later detour should not re-cross an earlier edge.
//!   This is a heuristic: strongly concave chains can still end up crossed.
//!   `verify_clearance` reports such leftovers.
//! - No optimality: the result is a valid route, not a short one.
//!
//! Code cross-refs: `predicates`, `avoid::segment_avoidance`, `avoid::find_margin`.

mod avoid;
mod types;

pub use types::{EdgeOutcome, Obstacle, Path, PlannerCfg};

use crate::error::PlanError;
use crate::predicates::{are_segments_intersecting, is_on_line};
use crate::vector::{rotated, Vector};

use avoid::{detour_angle, find_margin, segment_avoidance};
use types::join_vertices;

/// Edge-by-edge planner state.
///
/// `step` processes the next obstacle edge; `run` processes all remaining
/// edges and hands back the final path.
#[derive(Clone, Debug)]
pub struct Planner<'a> {
    obstacle: &'a Obstacle,
    start: Vector,
    finish: Vector,
    cfg: PlannerCfg,
    path: Path,
    next_edge: usize,
}

impl<'a> Planner<'a> {
    /// Initial path is the direct segment. When the first obstacle vertex lies
    /// on the line through `start` and `finish`, one extra vertex is placed
    /// off that line so the path cannot run along the obstacle.
    pub fn new(obstacle: &'a Obstacle, start: Vector, finish: Vector, cfg: PlannerCfg) -> Self {
        let mut vertices = vec![start];
        if is_on_line(obstacle.vertices()[0], start, finish) {
            vertices.push(start + rotated(finish - start, cfg.perturbation_angle));
        }
        vertices.push(finish);
        Self {
            obstacle,
            start,
            finish,
            cfg,
            path: Path { vertices },
            next_edge: 0,
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the edge the next `step` will process, if any remain.
    #[inline]
    pub fn next_edge(&self) -> Option<usize> {
        (self.next_edge < self.obstacle.edge_count()).then_some(self.next_edge)
    }

    /// Process the next obstacle edge. Returns `Ok(None)` once all are done.
    ///
    /// On error the path is left as it was before this step.
    pub fn step(&mut self) -> Result<Option<EdgeOutcome>, PlanError> {
        let Some(edge) = self.next_edge() else {
            return Ok(None);
        };
        let outcome = self.add_edge(edge)?;
        self.next_edge += 1;
        Ok(Some(outcome))
    }

    /// Process every remaining edge and return the final path.
    pub fn run(mut self) -> Result<Path, PlanError> {
        while self.step()?.is_some() {}
        tracing::info!(
            edges = self.obstacle.edge_count(),
            vertices = self.path.len(),
            "plan finished"
        );
        Ok(self.path)
    }

    fn add_edge(&mut self, edge: usize) -> Result<EdgeOutcome, PlanError> {
        let (s1, s2) = self.obstacle.edge(edge);
        let path = &self.path.vertices;

        let mut span: Option<(usize, usize)> = None;
        for i in 0..path.len() - 1 {
            if are_segments_intersecting(path[i], path[i + 1], s1, s2) {
                span = Some(span.map_or((i, i), |(first, _)| (first, i)));
            }
        }
        let Some((first, last)) = span else {
            tracing::debug!(edge, "edge clear");
            return Ok(EdgeOutcome::Clear { edge });
        };

        let margin = find_margin(
            self.obstacle,
            self.start,
            self.finish,
            edge,
            self.cfg.max_margin,
        );
        if margin.sign() <= 0 {
            return Err(PlanError::ZeroMargin { edge });
        }
        let angle = detour_angle(self.obstacle, edge, &self.cfg);
        let detour = segment_avoidance(
            (path[first], path[first + 1]),
            (path[last], path[last + 1]),
            s1,
            s2,
            margin,
            angle,
            edge,
        )?;
        tracing::debug!(
            edge,
            first,
            last,
            margin = %margin,
            angle,
            detour = %join_vertices(&detour),
            "detour"
        );

        let mut next = Vec::with_capacity(path.len() + detour.len() - (last - first));
        next.extend_from_slice(&path[..=first]);
        next.extend_from_slice(&detour);
        next.extend_from_slice(&path[last + 1..]);
        self.path.vertices = next;

        Ok(EdgeOutcome::Detoured {
            edge,
            first,
            last,
            inserted: detour.len(),
        })
    }
}

/// Plan a path from `start` to `finish` around `obstacle`.
pub fn plan(
    obstacle: &Obstacle,
    start: Vector,
    finish: Vector,
    cfg: PlannerCfg,
) -> Result<Path, PlanError> {
    Planner::new(obstacle, start, finish, cfg).run()
}

/// First `(path segment, obstacle edge)` pair that still intersects, if any.
pub fn verify_clearance(path: &Path, obstacle: &Obstacle) -> Option<(usize, usize)> {
    path.segments().enumerate().find_map(|(i, (a, b))| {
        obstacle
            .edges()
            .position(|(s1, s2)| are_segments_intersecting(a, b, s1, s2))
            .map(|k| (i, k))
    })
}
