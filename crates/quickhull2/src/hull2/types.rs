//! Basic types for the 2D QuickHull: tolerances, directed lines, errors.
//!
//! - `HullCfg`: tolerance and traversal strategy.
//! - `DirectedLine`: implicit line `a·x + b·y + c = 0` through two points.
//! - `HullError`: precondition violations (fail fast, no partial results).
//!
//! Code cross-refs: `partition::PointSet`, `builder::{build_chain}`, `hull::Hull2`

use std::fmt;

use nalgebra::Vector2;

/// Point type used throughout (`x`, `y`).
pub type Point2 = Vector2<f64>;

/// Default half-plane tolerance.
///
/// A point counts as strictly left of a line only if its evaluation exceeds
/// this value; strictly right is plain `< 0`.
pub const EPS: f64 = 1e-5;

/// Default depth guard for `Traversal::Recursive`.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// How the hull builder walks the sub-problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Explicit work stack; no native recursion.
    WorkList,
    /// Native recursion, refused beyond `max_depth` levels.
    Recursive { max_depth: usize },
}

/// Hull configuration (tolerance + traversal).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    pub eps: f64,
    pub traversal: Traversal,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: EPS,
            traversal: Traversal::WorkList,
        }
    }
}

impl HullCfg {
    /// Same tolerance, native recursion with the default depth guard.
    #[inline]
    pub fn recursive() -> Self {
        Self {
            traversal: Traversal::Recursive {
                max_depth: DEFAULT_MAX_DEPTH,
            },
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }

    pub fn validate(&self) -> Result<(), HullError> {
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(HullError::NonPositiveEps { eps: self.eps });
        }
        Ok(())
    }
}

/// Side of a directed line a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Evaluation `> eps`: outside, still a hull candidate.
    Left,
    /// Evaluation `< 0`.
    Right,
    /// Inside the tolerance band `[0, eps]`; never a hull vertex on this side.
    On,
}

/// Directed line `a·x + b·y + c = 0`, oriented so that left of `A→B` evaluates positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectedLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl DirectedLine {
    /// Line through `p` then `q`.
    #[inline]
    pub fn through(p: Point2, q: Point2) -> Self {
        Self {
            a: p.y - q.y,
            b: -(p.x - q.x),
            c: p.x * q.y - p.y * q.x,
        }
    }

    /// Unnormalized signed distance; only comparisons are meaningful.
    #[inline]
    pub fn eval(&self, p: Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    #[inline]
    pub fn classify(&self, p: Point2, eps: f64) -> Side {
        let s = self.eval(p);
        if s > eps {
            Side::Left
        } else if s < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }
}

/// Contract violations detected before (or instead of) building a hull.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// Extreme points requested for an empty point set.
    EmptyInput,
    /// Coordinate columns of different length.
    LengthMismatch { xs: usize, ys: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Tolerance must be a finite positive number.
    NonPositiveEps { eps: f64 },
    /// Recursive traversal went deeper than allowed.
    DepthLimit { max_depth: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "point set is empty (need at least one point)"),
            HullError::LengthMismatch { xs, ys } => write!(
                f,
                "coordinate length mismatch: {} x values vs {} y values",
                xs, ys
            ),
            HullError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            HullError::NonPositiveEps { eps } => {
                write!(f, "tolerance must be finite and > 0 (got {eps})")
            }
            HullError::DepthLimit { max_depth } => write!(
                f,
                "recursion exceeded {} levels; use the work-list traversal",
                max_depth
            ),
        }
    }
}

impl std::error::Error for HullError {}
