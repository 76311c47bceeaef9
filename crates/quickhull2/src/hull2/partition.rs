//! Candidate index sets and the half-plane partition / farthest-point steps.
//!
//! A `PointSet` never copies points: it is an ordered list of indices into the
//! caller's input slice. Every set is built for one directed line and holds
//! only indices strictly left of it (`> eps`), except the initial right-hand
//! set, which uses the plain `< 0` test on the diameter line.

use super::types::{DirectedLine, Point2, Side};

/// Ordered indices into an immutable point slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    idx: Vec<usize>,
}

impl PointSet {
    /// Indices of all `points` strictly left of `line` (top-level variant).
    pub fn all_left_of(line: &DirectedLine, points: &[Point2], eps: f64) -> Self {
        let idx = points
            .iter()
            .enumerate()
            .filter(|(_, p)| line.classify(**p, eps) == Side::Left)
            .map(|(i, _)| i)
            .collect();
        Self { idx }
    }

    /// Indices of all `points` strictly right of `line` (plain `< 0`, no band).
    pub fn all_right_of(line: &DirectedLine, points: &[Point2], eps: f64) -> Self {
        let idx = points
            .iter()
            .enumerate()
            .filter(|(_, p)| line.classify(**p, eps) == Side::Right)
            .map(|(i, _)| i)
            .collect();
        Self { idx }
    }

    /// Survivors of this set strictly left of `line`, relative order preserved.
    pub fn left_of(&self, line: &DirectedLine, points: &[Point2], eps: f64) -> Self {
        let idx = self
            .idx
            .iter()
            .copied()
            .filter(|&i| line.classify(points[i], eps) == Side::Left)
            .collect();
        Self { idx }
    }

    /// Index with the largest signed distance from `line`; first maximum wins.
    pub fn farthest_from(&self, line: &DirectedLine, points: &[Point2]) -> Option<usize> {
        let (&first, rest) = self.idx.split_first()?;
        let mut best = first;
        let mut best_d = line.eval(points[first]);
        for &i in rest {
            let d = line.eval(points[i]);
            if d > best_d {
                best = i;
                best_d = d;
            }
        }
        Some(best)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.idx
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idx.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
}

impl From<Vec<usize>> for PointSet {
    fn from(idx: Vec<usize>) -> Self {
        Self { idx }
    }
}
