//! Property tests on integer grids, where every half-plane evaluation is exact.

use proptest::prelude::*;
use quickhull2::hull2::{quickhull, Hull2, HullCfg, Point2, Winding};
use quickhull2::Vec2;

fn to_points(raw: &[(i32, i32)]) -> Vec<Point2> {
    raw.iter()
        .map(|&(x, y)| Vec2::new(x as f64, y as f64))
        .collect()
}

fn key(p: &Point2) -> (i64, i64) {
    (p.x as i64, p.y as i64)
}

fn sorted_keys(points: &[Point2]) -> Vec<(i64, i64)> {
    let mut k: Vec<_> = points.iter().map(key).collect();
    k.sort_unstable();
    k
}

#[inline]
fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Andrew's monotone chain, strict (colinear boundary points dropped).
fn monotone_chain(points: &[Point2]) -> Option<Vec<Point2>> {
    let mut pts = points.to_vec();
    pts.sort_by_key(key);
    pts.dedup();
    if pts.len() < 2 {
        return None;
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Some(lower)
}

fn grid_points() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-100i32..=100, -100i32..=100), 0..60)
}

proptest! {
    #[test]
    fn hull_vertices_are_distinct_input_points(raw in grid_points()) {
        let pts = to_points(&raw);
        if let Some(h) = Hull2::compute(&pts, HullCfg::default()).unwrap() {
            prop_assert!(h.len() >= 2 && h.len() <= pts.len());
            for (v, &i) in h.vertices().iter().zip(h.indices()) {
                prop_assert_eq!(*v, pts[i]);
            }
            let keys = sorted_keys(h.vertices());
            let mut dedup = keys.clone();
            dedup.dedup();
            prop_assert_eq!(keys, dedup);
        }
    }

    #[test]
    fn every_input_point_is_enclosed(raw in grid_points()) {
        let pts = to_points(&raw);
        if let Some(h) = Hull2::compute(&pts, HullCfg::default()).unwrap() {
            for p in &pts {
                prop_assert!(h.contains_eps(*p, 0.0), "point {:?} outside hull", p);
            }
            if h.len() >= 3 {
                prop_assert_eq!(h.winding(), Winding::Clockwise);
            }
        }
    }

    #[test]
    fn agrees_with_monotone_chain(raw in grid_points()) {
        let pts = to_points(&raw);
        let ours = quickhull(&pts).unwrap();
        let reference = monotone_chain(&pts);
        prop_assert_eq!(ours.is_some(), reference.is_some());
        if let (Some(ours), Some(reference)) = (ours, reference) {
            prop_assert_eq!(sorted_keys(&ours), sorted_keys(&reference));
        }
    }

    #[test]
    fn hull_of_hull_is_the_same_set(raw in grid_points()) {
        let pts = to_points(&raw);
        if let Some(first) = quickhull(&pts).unwrap() {
            let second = quickhull(&first).unwrap().expect("hull has at least two distinct points");
            prop_assert_eq!(sorted_keys(&first), sorted_keys(&second));
        }
    }

    #[test]
    fn traversals_agree(raw in grid_points()) {
        let pts = to_points(&raw);
        let a = Hull2::compute(&pts, HullCfg::default()).unwrap();
        let b = Hull2::compute(&pts, HullCfg::recursive()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn colinear_input_keeps_two_endpoints(xs in prop::collection::vec(-50i32..=50, 2..30)) {
        let pts: Vec<Point2> = xs.iter().map(|&x| Vec2::new(x as f64, (2 * x + 1) as f64)).collect();
        let lo = *xs.iter().min().unwrap();
        let hi = *xs.iter().max().unwrap();
        let hull = quickhull(&pts).unwrap();
        if lo == hi {
            prop_assert!(hull.is_none());
        } else {
            let hull = hull.unwrap();
            prop_assert_eq!(
                hull,
                vec![
                    Vec2::new(lo as f64, (2 * lo + 1) as f64),
                    Vec2::new(hi as f64, (2 * hi + 1) as f64),
                ]
            );
        }
    }
}
