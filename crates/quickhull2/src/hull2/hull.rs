//! Top-level QuickHull orchestration and the resulting polygon.
//!
//! Vertex order as built: leftmost point `A`, the chain left of `A→B`, the
//! rightmost point `B`, the chain left of `B→A`. With the `(a, b, c)` line
//! convention this walks the upper chain left to right and the lower chain
//! back, i.e. clockwise (negative signed area). `to_ccw` reverses it.

use nalgebra::Vector2;

use super::builder::build_chain;
use super::extreme::extreme_points;
use super::partition::PointSet;
use super::types::{DirectedLine, HullCfg, HullError, Point2};

/// Winding of a hull polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Zero area: two-vertex hull of colinear input.
    Degenerate,
}

/// Convex hull of a 2D point set: vertex values plus their input indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull2 {
    vertices: Vec<Point2>,
    indices: Vec<usize>,
}

impl Hull2 {
    /// Builds the hull of `points`.
    ///
    /// Returns `Ok(None)` when there is no hull: fewer than two points, or all
    /// points coincide. Colinear input yields the two extreme endpoints.
    pub fn compute(points: &[Point2], cfg: HullCfg) -> Result<Option<Self>, HullError> {
        cfg.validate()?;
        check_finite(points)?;
        if points.len() <= 1 {
            return Ok(None);
        }
        let (ia, ib) = extreme_points(points)?;
        let (a, b) = (points[ia], points[ib]);
        if a == b {
            return Ok(None);
        }

        let line = DirectedLine::through(a, b);
        let upper = PointSet::all_left_of(&line, points, cfg.eps);
        let lower = PointSet::all_right_of(&line, points, cfg.eps);
        tracing::debug!(
            n = points.len(),
            upper = upper.len(),
            lower = lower.len(),
            traversal = ?cfg.traversal,
            "quickhull split"
        );

        let mut indices = Vec::with_capacity(2 + upper.len() + lower.len());
        indices.push(ia);
        build_chain(points, a, b, upper, &cfg, &mut indices)?;
        indices.push(ib);
        build_chain(points, b, a, lower, &cfg, &mut indices)?;

        let vertices = indices.iter().map(|&i| points[i]).collect();
        tracing::debug!(hull = indices.len(), "quickhull done");
        Ok(Some(Self { vertices, indices }))
    }

    /// Vertices in build order (clockwise for non-degenerate hulls).
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Input index of each vertex, parallel to `vertices()`.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a computed hull (at least two vertices).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Shoelace area; negative for clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|k| {
                let p = self.vertices[k];
                let q = self.vertices[(k + 1) % n];
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice
    }

    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area < 0.0 {
            Winding::Clockwise
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Counterclockwise copy starting at the same leftmost vertex.
    pub fn to_ccw(&self) -> Self {
        if self.winding() != Winding::Clockwise {
            return self.clone();
        }
        let mut vertices = self.vertices.clone();
        let mut indices = self.indices.clone();
        vertices[1..].reverse();
        indices[1..].reverse();
        Self { vertices, indices }
    }

    /// Whether `p` lies inside or on the polygon, with slack `eps` on each edge.
    ///
    /// Works for either winding; a two-vertex hull contains only points on its segment line.
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        let sign = match self.winding() {
            Winding::CounterClockwise => 1.0,
            _ => -1.0,
        };
        let n = self.vertices.len();
        (0..n).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            sign * cross(a, b, p) >= -eps
        })
    }
}

/// Orientation of `c` relative to `a→b` (twice the triangle area).
#[inline]
fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

fn check_finite(points: &[Point2]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(HullError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Hull vertices of `points` with the default configuration.
pub fn quickhull(points: &[Point2]) -> Result<Option<Vec<Point2>>, HullError> {
    Ok(Hull2::compute(points, HullCfg::default())?.map(Hull2::into_vertices))
}

/// Zips separate coordinate columns into points; lengths must agree.
pub fn points_from_xy(xs: &[f64], ys: &[f64]) -> Result<Vec<Point2>, HullError> {
    if xs.len() != ys.len() {
        return Err(HullError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Vector2::new(x, y))
        .collect())
}
