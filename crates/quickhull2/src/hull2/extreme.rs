use std::cmp::Ordering;

use super::types::{HullError, Point2};

/// Indices of the leftmost (min x, then min y) and rightmost (max x, then max y) points.
///
/// Single pass; on exact duplicates the first occurrence wins.
pub fn extreme_points(points: &[Point2]) -> Result<(usize, usize), HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let (left, right) = points
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0), |(left, right), (i, p)| {
            let left = if lexicographic_cmp(p, &points[left]) == Ordering::Less {
                i
            } else {
                left
            };
            let right = if lexicographic_cmp(p, &points[right]) == Ordering::Greater {
                i
            } else {
                right
            };
            (left, right)
        });
    Ok((left, right))
}

/// Compares by `x`, then by `y`. Callers guarantee finite coordinates.
#[inline]
fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn ties_break_on_y() {
        let pts = vec![
            vector![0.0, 1.0],
            vector![0.0, -1.0],
            vector![2.0, -3.0],
            vector![2.0, 5.0],
            vector![1.0, 9.0],
        ];
        assert_eq!(extreme_points(&pts), Ok((1, 3)));
    }

    #[test]
    fn single_point_is_both_extremes() {
        assert_eq!(extreme_points(&[vector![3.0, 4.0]]), Ok((0, 0)));
    }

    #[test]
    fn duplicates_keep_first() {
        let pts = vec![vector![1.0, 1.0], vector![0.0, 0.0], vector![0.0, 0.0]];
        assert_eq!(extreme_points(&pts), Ok((1, 0)));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(extreme_points(&[]), Err(HullError::EmptyInput));
    }
}
