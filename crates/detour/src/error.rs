//! Error types for obstacle loading and path planning.

use thiserror::Error;

/// Errors raised while building an obstacle or planning around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// An obstacle needs at least one edge.
    #[error("obstacle needs at least 2 vertices, got {got}")]
    TooFewVertices { got: usize },

    /// A coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Vertex `index` coincides with vertex `index - 1`.
    #[error("vertex {index} duplicates the previous vertex (zero-length edge)")]
    DuplicateVertex { index: usize },

    /// A detour needed the crossing of two parallel lines.
    #[error("parallel lines while building the detour around edge {edge}")]
    ParallelLines { edge: usize },

    /// The rotated detour points landed on the edge's own line.
    #[error("detour around edge {edge} collapsed onto the edge's line")]
    DegenerateDetour { edge: usize },

    /// The safety margin around an edge collapsed to zero.
    #[error("edge {edge} touches an endpoint or an earlier edge; no room for a detour")]
    ZeroMargin { edge: usize },
}
