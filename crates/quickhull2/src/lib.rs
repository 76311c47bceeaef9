//! Convex hulls of planar point sets (QuickHull).
//!
//! The input slice is never copied or reordered: candidate sets are index
//! lists into it, and the returned polygon holds copies of input points.

pub mod hull2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull2::{
        points_from_xy, quickhull, Hull2, HullCfg, HullError, Point2, Traversal, Winding,
    };
    pub use nalgebra::Vector2 as Vec2;
}
