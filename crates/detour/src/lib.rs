//! Polyline routing around a polygonal obstacle.
//!
//! Layers, leaf first:
//! - `scalar`: `f64` with epsilon-banded comparisons (`EPS = 1e-9`).
//! - `vector`: 2D point/vector algebra over `Scalar`.
//! - `predicates`: incidence, intersection, and distance tests.
//! - `planner`: edge-by-edge detour construction.
//! - `gen`: reproducible random obstacle chains for benches and demos.

pub mod error;
pub mod gen;
pub mod planner;
pub mod predicates;
pub mod scalar;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PlanError;
pub use planner::{plan, verify_clearance, EdgeOutcome, Obstacle, Path, Planner, PlannerCfg};
pub use scalar::{Scalar, EPS};
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{draw_obstacle_arc, ArcCfg, ReplayToken, VertexCount};
    pub use crate::planner::{
        plan, verify_clearance, EdgeOutcome, Obstacle, Path, Planner, PlannerCfg,
    };
    pub use crate::predicates::{
        are_segments_intersecting, dist_between_segments, find_lines_intersection,
    };
    pub use crate::vector::{cross_prod, dot_prod, rotated, unoriented_angle, Vector};
    pub use crate::{PlanError, Scalar, EPS};
}
