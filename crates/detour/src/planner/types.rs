//! Planner inputs and outputs.
//!
//! - `PlannerCfg`: tunables (margin cap, default angles).
//! - `Obstacle`: validated, read-only vertex chain.
//! - `Path`: polyline from start to finish.
//! - `EdgeOutcome`: what one edge-processing step did.

use std::fmt;

use crate::error::PlanError;
use crate::vector::Vector;

/// Planner configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlannerCfg {
    /// Upper bound on the per-edge safety margin.
    pub max_margin: f64,
    /// Detour angle (radians) for the first obstacle edge, which has no
    /// predecessor to measure a turning angle against.
    pub first_edge_angle: f64,
    /// Rotation (radians) of the extra vertex inserted when the first obstacle
    /// vertex lies on the line through start and finish.
    pub perturbation_angle: f64,
}

impl Default for PlannerCfg {
    fn default() -> Self {
        Self {
            max_margin: 1.0,
            first_edge_angle: 1.0,
            perturbation_angle: 1.0,
        }
    }
}

/// Open polygonal chain; edge `i` joins vertices `i` and `i + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    vertices: Vec<Vector>,
}

impl Obstacle {
    /// Validate and wrap a vertex chain.
    ///
    /// Rejects fewer than two vertices, non-finite coordinates, and
    /// consecutive duplicates. Self-intersection is not checked.
    pub fn new(vertices: Vec<Vector>) -> Result<Self, PlanError> {
        if vertices.len() < 2 {
            return Err(PlanError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PlanError::NonFinite { index });
        }
        if let Some(k) = vertices.windows(2).position(|w| w[0] == w[1]) {
            return Err(PlanError::DuplicateVertex { index: k + 1 });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Endpoints of edge `k`. Panics if `k >= edge_count()`.
    #[inline]
    pub fn edge(&self, k: usize) -> (Vector, Vector) {
        (self.vertices[k], self.vertices[k + 1])
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Renders `(x y), (x y), ...`, the same layout as `Path`.
impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_vertices(&self.vertices))
    }
}

/// Polyline from the start point to the finish point.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub(crate) vertices: Vec<Vector>,
}

impl Path {
    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vector> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Renders `(x y), (x y), ...`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_vertices(&self.vertices))
    }
}

pub(crate) fn join_vertices(vertices: &[Vector]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of processing one obstacle edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// No path segment touched the edge.
    Clear { edge: usize },
    /// Path segments `first..=last` were replaced by `inserted` new vertices.
    Detoured {
        edge: usize,
        first: usize,
        last: usize,
        inserted: usize,
    },
}

impl EdgeOutcome {
    #[inline]
    pub fn edge(&self) -> usize {
        match *self {
            EdgeOutcome::Clear { edge } | EdgeOutcome::Detoured { edge, .. } => edge,
        }
    }
}
