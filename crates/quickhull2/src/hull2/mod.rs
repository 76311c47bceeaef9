//! 2D convex hulls via QuickHull.
//!
//! Purpose
//! - Compute the convex hull of a finite 2D point set as an ordered polygon
//!   whose vertices are input points (never interpolated).
//! - Keep the numerics explicit: one half-plane tolerance (`HullCfg::eps`),
//!   strict `> eps` for "outside", plain `< 0` for the initial lower side.
//!
//! Pipeline
//! - `extreme`: leftmost/rightmost points span the initial diameter.
//! - `partition`: index sets of candidates outside a directed line, and the
//!   farthest-point pick.
//! - `builder`: narrows each (line, candidates) pair to hull vertices, either
//!   with an explicit work stack (default) or guarded native recursion.
//! - `hull`: orchestration and the resulting `Hull2` polygon.
//!
//! Code cross-refs: `Hull2`, `HullCfg`, `DirectedLine`, `PointSet`

mod builder;
mod extreme;
mod hull;
mod partition;
pub mod rand;
mod types;

pub use builder::build_chain;
pub use extreme::extreme_points;
pub use hull::{points_from_xy, quickhull, Hull2, Winding};
pub use partition::PointSet;
pub use types::{
    DirectedLine, HullCfg, HullError, Point2, Side, Traversal, DEFAULT_MAX_DEPTH, EPS,
};
