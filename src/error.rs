//! Error types for tree operations

use thiserror::Error;

use crate::Point;

/// Errors raised by [`OctreeBst`](crate::OctreeBst) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// Insert was called with a key that is already stored. The tree is unchanged.
    #[error("duplicate key {0}")]
    DuplicateKey(Point),

    /// Lookup reached an empty slot without finding the key.
    #[error("key {0} not found")]
    KeyNotFound(Point),
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
