//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use octbst::prelude::*;
//! ```

pub use crate::{Node, OctreeBst, Point, TreeError, TreeResult, make_ordering, octant_of};
