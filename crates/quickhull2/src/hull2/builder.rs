//! Hull chain builder: emits the hull vertices strictly between two committed
//! vertices `a` and `b`, in order from `a` towards `b`.
//!
//! Each step picks the candidate farthest from `a→b` (always a hull vertex),
//! keeps the candidates left of `a→d` and left of `d→b`, and discards the rest
//! (they lie inside triangle `a, d, b`). Output order comes from the traversal
//! order alone: left sub-chain, then `d`, then right sub-chain.

use super::partition::PointSet;
use super::types::{DirectedLine, HullCfg, HullError, Point2, Traversal};

/// Appends the chain between `a` and `b` to `out` (as input indices).
///
/// `set` must hold only indices strictly outside `a→b`.
pub fn build_chain(
    points: &[Point2],
    a: Point2,
    b: Point2,
    set: PointSet,
    cfg: &HullCfg,
    out: &mut Vec<usize>,
) -> Result<(), HullError> {
    match cfg.traversal {
        Traversal::WorkList => {
            work_list(points, a, b, set, cfg.eps, out);
            Ok(())
        }
        Traversal::Recursive { max_depth } => {
            recurse(points, a, b, &set, cfg.eps, 0, max_depth, out)
        }
    }
}

/// One refinement step: farthest point `d` plus the outside sets of `a→d` and `d→b`.
/// `None` for an empty set.
fn split(
    points: &[Point2],
    a: Point2,
    b: Point2,
    set: &PointSet,
    eps: f64,
) -> Option<(usize, PointSet, PointSet)> {
    let d = set.farthest_from(&DirectedLine::through(a, b), points)?;
    let pd = points[d];
    let left = set.left_of(&DirectedLine::through(a, pd), points, eps);
    let right = set.left_of(&DirectedLine::through(pd, b), points, eps);
    Some((d, left, right))
}

enum Task {
    Expand { a: Point2, b: Point2, set: PointSet },
    Emit(usize),
}

fn work_list(points: &[Point2], a: Point2, b: Point2, set: PointSet, eps: f64, out: &mut Vec<usize>) {
    let mut stack = vec![Task::Expand { a, b, set }];
    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(d) => out.push(d),
            Task::Expand { a, b, set } => {
                let Some((d, left, right)) = split(points, a, b, &set, eps) else {
                    continue;
                };
                let pd = points[d];
                // LIFO: left chain pops first, then d, then right chain.
                stack.push(Task::Expand {
                    a: pd,
                    b,
                    set: right,
                });
                stack.push(Task::Emit(d));
                stack.push(Task::Expand {
                    a,
                    b: pd,
                    set: left,
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn recurse(
    points: &[Point2],
    a: Point2,
    b: Point2,
    set: &PointSet,
    eps: f64,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<usize>,
) -> Result<(), HullError> {
    let Some((d, left, right)) = split(points, a, b, set, eps) else {
        return Ok(());
    };
    if depth >= max_depth {
        tracing::warn!(depth, max_depth, candidates = set.len(), "hull recursion guard tripped");
        return Err(HullError::DepthLimit { max_depth });
    }
    let pd = points[d];
    recurse(points, a, pd, &left, eps, depth + 1, max_depth, out)?;
    out.push(d);
    recurse(points, pd, b, &right, eps, depth + 1, max_depth, out)
}
