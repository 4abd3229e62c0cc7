//! Insertion ordering that keeps an [`OctreeBst`](crate::OctreeBst) shallow.
//!
//! The tree never rebalances itself, so balance has to come from the order
//! keys are inserted in. [`make_ordering`] builds that order top-down:
//!
//! 1. Take the bounding box of the current points and its center.
//! 2. Emit the point nearest that center (Euclidean distance, first one wins ties).
//! 3. Split the remaining points into eight buckets with [`octant_of`] around
//!    the emitted point.
//! 4. Repeat on every bucket, octant 0 through 7.
//!
//! Because buckets use the tree's own classifier, each bucket ends up as the
//! subtree under the point emitted just before it.
//!
//! The split is only even for well spread input. Clustered or exponentially
//! spaced coordinates can peel off one or two points per level.

use log::{debug, trace};

use crate::{OCTANT_COUNT, Point, octant_of};

/// Returns `points` reordered for balanced insertion.
///
/// The output is a permutation of the input. Repeated points are kept, not
/// deduplicated.
///
/// # Example
/// ```
/// use octbst::{make_ordering, Point};
/// let points = [Point::new(0, 0, 0), Point::new(1, 1, 1), Point::new(2, 2, 2)];
/// assert_eq!(
///     make_ordering(&points),
///     vec![Point::new(1, 1, 1), Point::new(2, 2, 2), Point::new(0, 0, 0)]
/// );
/// ```
#[must_use]
pub fn make_ordering(points: &[Point]) -> Vec<Point> {
    let mut ordered = Vec::with_capacity(points.len());
    // Pending sub-lists, next one on top. Popping depth-first keeps the
    // output in pre-order: representative, bucket 0, ..., bucket 7.
    let mut pending: Vec<Vec<Point>> = vec![points.to_vec()];
    let mut max_pending = pending.len();

    while let Some(level) = pending.pop() {
        if let [single] = level.as_slice() {
            ordered.push(*single);
            continue;
        }
        let Some(center_index) = closest_to_center(&level) else {
            continue;
        };
        let center = level[center_index];
        ordered.push(center);

        let mut buckets: [Vec<Point>; OCTANT_COUNT] = std::array::from_fn(|_| Vec::new());
        for (index, point) in level.iter().enumerate() {
            if index != center_index {
                buckets[octant_of(point, &center)].push(*point);
            }
        }
        trace!("split {} points around {center}", level.len());

        pending.extend(buckets.into_iter().rev().filter(|bucket| !bucket.is_empty()));
        max_pending = max_pending.max(pending.len());
    }

    debug!(
        "ordered {} points, worklist peaked at {max_pending} sub-lists",
        ordered.len()
    );
    ordered
}

/// Per-axis minimum and maximum of `points`, `None` when empty.
///
/// # Example
/// ```
/// use octbst::{bounding_box, Point};
/// let points = [Point::new(1, 5, -2), Point::new(4, 3, 0)];
/// assert_eq!(
///     bounding_box(&points),
///     Some((Point::new(1, 3, -2), Point::new(4, 5, 0)))
/// );
/// ```
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let (first, rest) = points.split_first()?;
    let (mut min, mut max) = (*first, *first);
    for point in rest {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        min.z = min.z.min(point.z);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
        max.z = max.z.max(point.z);
    }
    Some((min, max))
}

/// Index of the point nearest the center of the bounding box of `points`.
///
/// The earliest point wins when several are equally near. Distances are
/// compared exactly: the box center is held doubled, `min + max`, so half
/// coordinates never need rounding.
#[must_use]
pub fn closest_to_center(points: &[Point]) -> Option<usize> {
    let (min, max) = bounding_box(points)?;
    let doubled_center = [
        i128::from(min.x) + i128::from(max.x),
        i128::from(min.y) + i128::from(max.y),
        i128::from(min.z) + i128::from(max.z),
    ];

    let mut best: Option<(usize, i128)> = None;
    for (index, point) in points.iter().enumerate() {
        let distance = doubled_distance_squared(point, &doubled_center);
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Squared distance from `2 * point` to `doubled_center`, i.e. four times
/// the squared Euclidean distance from `point` to the real center.
fn doubled_distance_squared(point: &Point, doubled_center: &[i128; 3]) -> i128 {
    point
        .to_array()
        .into_iter()
        .zip(doubled_center)
        .map(|(coordinate, center)| {
            let offset = 2 * i128::from(coordinate) - center;
            offset * offset
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_tie_keeps_first() {
        // both points are 0.5 away from x = 0.5
        let points = [Point::new(1, 0, 0), Point::new(0, 0, 0)];
        assert_eq!(closest_to_center(&points), Some(0));
    }

    #[test]
    fn test_center_is_box_midpoint_not_mean() {
        // mean x is 2.5, box midpoint is 5
        let points = [
            Point::new(0, 0, 0),
            Point::new(0, 0, 0),
            Point::new(0, 0, 0),
            Point::new(4, 0, 0),
            Point::new(10, 0, 0),
        ];
        assert_eq!(closest_to_center(&points), Some(3));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let points = [
            Point::new(i32::MIN, i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX, i32::MAX),
            Point::new(0, 0, 0),
        ];
        assert_eq!(closest_to_center(&points), Some(2));
        assert_eq!(make_ordering(&points)[0], Point::new(0, 0, 0));
    }

    #[test]
    fn test_empty_has_no_center() {
        assert_eq!(closest_to_center(&[]), None);
        assert_eq!(bounding_box(&[]), None);
    }
}
