//! Property-based tests for the tree and the ordering

#[cfg(test)]
mod property_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::component_tests::tests::assert_invariants;
    use crate::{OctreeBst, Point, TreeError, make_ordering, octant_of};

    fn point_strategy(range: i32) -> impl Strategy<Value = Point> {
        (-range..=range, -range..=range, -range..=range).prop_map(Point::from)
    }

    fn sorted(points: &[Point]) -> Vec<[i32; 3]> {
        let mut keys: Vec<[i32; 3]> = points.iter().map(|p| p.to_array()).collect();
        keys.sort_unstable();
        keys
    }

    proptest! {
        #[test]
        fn prop_octant_in_range_and_matches_signs(key in point_strategy(1000), reference in point_strategy(1000)) {
            let octant = octant_of(&key, &reference);
            prop_assert!(octant < 8);
            prop_assert_eq!(octant & 1 == 0, key.x > reference.x);
            prop_assert_eq!(octant & 2 == 0, key.y > reference.y);
            prop_assert_eq!(octant & 4 == 0, key.z > reference.z);
        }

        #[test]
        fn prop_ordering_is_permutation(points in prop::collection::vec(point_strategy(4), 0..200)) {
            let ordered = make_ordering(&points);
            prop_assert_eq!(sorted(&ordered), sorted(&points));
        }

        #[test]
        fn prop_inserted_keys_are_found(points in prop::collection::vec(point_strategy(50), 0..200)) {
            let mut tree = OctreeBst::new();
            let mut inserted = HashSet::new();
            for (i, point) in points.iter().enumerate() {
                let result = tree.insert(*point, i);
                if inserted.insert(*point) {
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert_eq!(result, Err(TreeError::DuplicateKey(*point)));
                }
                prop_assert_eq!(tree.len(), inserted.len());
                assert_invariants(&tree);
            }
            for point in &inserted {
                prop_assert!(tree.contains(point));
            }
            // first insertion of each key wins
            for (i, point) in points.iter().enumerate() {
                if points[..i].contains(point) {
                    continue;
                }
                prop_assert_eq!(tree.lookup(point), Ok(&i));
            }
        }

        #[test]
        fn prop_missing_keys_not_found(
            points in prop::collection::vec(point_strategy(20), 0..100),
            probe in point_strategy(25),
        ) {
            let tree = OctreeBst::from_balanced(
                points.iter().copied().collect::<HashSet<_>>().into_iter().map(|p| (p, ())),
            ).unwrap();
            if points.contains(&probe) {
                prop_assert_eq!(tree.lookup(&probe), Ok(&()));
            } else {
                prop_assert_eq!(tree.lookup(&probe), Err(TreeError::KeyNotFound(probe)));
                prop_assert!(!tree.contains(&probe));
            }
        }

        #[test]
        fn prop_balanced_never_deeper_than_len(points in prop::collection::vec(point_strategy(100), 1..300)) {
            let unique: Vec<Point> = {
                let mut seen = HashSet::new();
                points.into_iter().filter(|p| seen.insert(*p)).collect()
            };
            let tree = OctreeBst::from_balanced(unique.iter().map(|p| (*p, ()))).unwrap();
            prop_assert_eq!(tree.len(), unique.len());
            prop_assert_eq!(tree.root().map(|root| root.subtree_size()), Some(unique.len()));
            prop_assert!(tree.depth() <= unique.len());
            assert_invariants(&tree);
        }
    }
}
