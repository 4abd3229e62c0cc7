//! # octbst - Octant-partitioned BST over 3D integer keys
//!
//! A Rust library providing a spatial index that stores one item per unique
//! 3D integer point, plus an insertion ordering that keeps the index shallow.
//!
//! ## Features
//!
//! - **Octant Branching**: Every node has eight child slots, one per octant around its key
//! - **Exact Lookups**: Insert, lookup and membership in O(depth)
//! - **Subtree Sizes**: Each node tracks how many nodes live beneath it
//! - **Balanced Ordering**: [`make_ordering`] reorders a point set so plain insertion yields a shallow tree
//!
//! ## Quick Start
//!
//! ```rust
//! use octbst::prelude::*;
//!
//! let points = vec![
//!     Point::new(3, 3, 3),
//!     Point::new(1, 5, 2),
//!     Point::new(4, 3, 1),
//!     Point::new(5, 4, 0),
//! ];
//!
//! // Reorder before inserting so the root sits near the middle of the cloud
//! let mut tree = OctreeBst::new();
//! for (id, point) in make_ordering(&points).into_iter().enumerate() {
//!     tree.insert(point, id).unwrap();
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert!(tree.contains(&Point::new(5, 4, 0)));
//! assert_eq!(tree.lookup(&Point::new(9, 9, 9)), Err(TreeError::KeyNotFound(Point::new(9, 9, 9))));
//! ```
//!
//! ## How It Works
//!
//! Keys are compared axis by axis against a node's key. Each axis where the
//! new key is strictly greater clears one bit of the octant index
//! (x: 1, y: 2, z: 4, starting from 7), and the key descends into that slot.
//! The tree never restructures itself, so its depth depends only on the
//! order of insertion. [`make_ordering`] picks the point nearest the center
//! of the bounding box, splits the rest with the same octant rule and
//! repeats per octant, which places each bucket directly below its
//! representative.

pub mod balance;
pub mod error;
pub mod octant;
pub mod octree_bst;
pub mod point;
pub mod prelude;

pub use balance::{bounding_box, closest_to_center, make_ordering};
pub use error::{TreeError, TreeResult};
pub use octant::{OCTANT_COUNT, octant_of};
pub use octree_bst::{Iter, Node, OctreeBst};
pub use point::Point;

mod property_tests;
