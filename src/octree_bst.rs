//! Octant-partitioned binary search tree keyed by 3D integer points.
//!
//! Every node splits space into eight octants around its own key and keeps
//! at most one child per octant. There is no rebalancing: the shape of the
//! tree is decided entirely by insertion order. Feed keys through
//! [`make_ordering`](crate::make_ordering) first (or use
//! [`OctreeBst::from_balanced`]) to get a shallow tree.
//!
//! All traversals are iterative, so a degenerate insertion order costs time
//! but never call stack.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use log::{debug, trace};

use crate::{OCTANT_COUNT, Point, TreeError, TreeResult, make_ordering, octant_of};

/// A stored key/item pair together with its eight octant slots.
pub struct Node<I> {
    key: Point,
    item: I,
    /// Nodes in the subtree rooted here, this node included
    subtree_size: usize,
    children: [Option<Box<Node<I>>>; OCTANT_COUNT],
}

impl<I> Node<I> {
    fn new(key: Point, item: I) -> Self {
        Self {
            key,
            item,
            subtree_size: 1,
            children: std::array::from_fn(|_| None),
        }
    }

    /// Key of this node
    pub fn key(&self) -> &Point {
        &self.key
    }

    /// Item stored under this node's key
    pub fn item(&self) -> &I {
        &self.item
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        self.subtree_size
    }

    /// Child in slot `octant`, or `None` if the slot is empty or out of range
    pub fn child(&self, octant: usize) -> Option<&Self> {
        self.children.get(octant)?.as_deref()
    }

    /// Child in the slot that `key` would descend into from this node
    pub fn child_for_key(&self, key: &Point) -> Option<&Self> {
        self.children[octant_of(key, &self.key)].as_deref()
    }

    /// Occupied child slots as `(octant, child)` pairs, in octant order
    pub fn children(&self) -> impl Iterator<Item = (usize, &Self)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(octant, child)| child.as_deref().map(|node| (octant, node)))
    }

    /// True when all eight child slots are empty
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl<I: fmt::Debug> fmt::Debug for Node<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("item", &self.item)
            .field("subtree_size", &self.subtree_size)
            .finish_non_exhaustive()
    }
}

/// Octree-BST: one item per unique 3D key.
///
/// # Example
/// ```
/// use octbst::{OctreeBst, Point, TreeError};
///
/// let mut tree = OctreeBst::new();
/// tree.insert(Point::new(3, 3, 3), "A").unwrap();
/// tree.insert(Point::new(1, 5, 2), "B").unwrap();
///
/// assert_eq!(tree.lookup(&Point::new(1, 5, 2)), Ok(&"B"));
/// assert_eq!(
///     tree.insert(Point::new(3, 3, 3), "again"),
///     Err(TreeError::DuplicateKey(Point::new(3, 3, 3)))
/// );
/// assert_eq!(tree.len(), 2);
/// ```
pub struct OctreeBst<I> {
    root: Option<Box<Node<I>>>,
    /// Total number of nodes
    length: usize,
}

impl<I> OctreeBst<I> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Builds a tree from `(key, item)` pairs, inserting them in balanced
    /// order as produced by [`make_ordering`].
    ///
    /// # Errors
    /// [`TreeError::DuplicateKey`] if two entries share a key.
    pub fn from_balanced<T>(entries: T) -> TreeResult<Self>
    where
        T: IntoIterator<Item = (Point, I)>,
    {
        let entries = entries.into_iter();
        let mut keys = Vec::with_capacity(entries.size_hint().0);
        let mut items = HashMap::with_capacity(entries.size_hint().0);
        for (key, item) in entries {
            match items.entry(key) {
                Entry::Occupied(_) => {
                    debug!("balanced build rejected duplicate key {key}");
                    return Err(TreeError::DuplicateKey(key));
                }
                Entry::Vacant(slot) => {
                    slot.insert(item);
                    keys.push(key);
                }
            }
        }

        let mut tree = Self::new();
        for key in make_ordering(&keys) {
            if let Some(item) = items.remove(&key) {
                tree.insert(key, item)?;
            }
        }
        Ok(tree)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.length
    }

    /// True if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root node, if any
    pub fn root(&self) -> Option<&Node<I>> {
        self.root.as_deref()
    }

    /// Inserts `item` under `key`.
    ///
    /// Every node on the path to the new leaf has its subtree size bumped by
    /// one. Existing items are never replaced.
    ///
    /// # Errors
    /// [`TreeError::DuplicateKey`] if `key` is already present; the tree is
    /// left exactly as it was.
    pub fn insert(&mut self, key: Point, item: I) -> TreeResult<()> {
        if self.contains(&key) {
            debug!("rejected duplicate key {key}");
            return Err(TreeError::DuplicateKey(key));
        }

        let mut depth = 0_usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            node.subtree_size += 1;
            depth += 1;
            let octant = octant_of(&key, &node.key);
            slot = &mut node.children[octant];
        }
        *slot = Some(Box::new(Node::new(key, item)));
        self.length += 1;
        trace!("inserted {key} at depth {depth}");
        Ok(())
    }

    /// Inserts every pair in order, stopping at the first failure.
    ///
    /// Pairs inserted before the failing one stay in the tree.
    ///
    /// # Errors
    /// [`TreeError::DuplicateKey`] for the first key already present.
    pub fn try_extend<T>(&mut self, entries: T) -> TreeResult<()>
    where
        T: IntoIterator<Item = (Point, I)>,
    {
        for (key, item) in entries {
            self.insert(key, item)?;
        }
        Ok(())
    }

    /// Item stored under `key`
    ///
    /// # Errors
    /// [`TreeError::KeyNotFound`] if `key` was never inserted.
    pub fn lookup(&self, key: &Point) -> TreeResult<&I> {
        self.get_node(key).map(Node::item)
    }

    /// Mutable item stored under `key`
    ///
    /// # Errors
    /// [`TreeError::KeyNotFound`] if `key` was never inserted.
    pub fn lookup_mut(&mut self, key: &Point) -> TreeResult<&mut I> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            if node.key == *key {
                return Ok(&mut node.item);
            }
            let octant = octant_of(key, &node.key);
            current = node.children[octant].as_deref_mut();
        }
        Err(TreeError::KeyNotFound(*key))
    }

    /// Node stored under `key`
    ///
    /// # Errors
    /// [`TreeError::KeyNotFound`] if `key` was never inserted.
    pub fn get_node(&self, key: &Point) -> TreeResult<&Node<I>> {
        let mut current = self.root();
        while let Some(node) = current {
            if node.key == *key {
                return Ok(node);
            }
            current = node.child_for_key(key);
        }
        Err(TreeError::KeyNotFound(*key))
    }

    /// True if `key` is stored in the tree
    pub fn contains(&self, key: &Point) -> bool {
        self.get_node(key).is_ok()
    }

    /// True when `node` has no children
    pub fn is_leaf(&self, node: &Node<I>) -> bool {
        node.is_leaf()
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<I>, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().map(|(_, child)| (child, level + 1)));
        }
        deepest
    }

    /// Pre-order iterator over `(key, item)`; children are visited in octant order
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            stack: self.root().into_iter().collect(),
            remaining: self.length,
        }
    }
}

impl<I> Default for OctreeBst<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for OctreeBst<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctreeBst")
            .field("length", &self.length)
            .field("root", &self.root().map(Node::key))
            .finish_non_exhaustive()
    }
}

impl<I> Drop for OctreeBst<I> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default drop would recurse once per level.
        let mut pending: Vec<Box<Node<I>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<'a, I> IntoIterator for &'a OctreeBst<I> {
    type Item = (&'a Point, &'a I);
    type IntoIter = Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator returned by [`OctreeBst::iter`]
#[derive(Debug)]
pub struct Iter<'a, I> {
    stack: Vec<&'a Node<I>>,
    remaining: usize,
}

impl<'a, I> Iterator for Iter<'a, I> {
    type Item = (&'a Point, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so octant 0 is popped first
        self.stack.extend(node.children.iter().rev().filter_map(|child| child.as_deref()));
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I> ExactSizeIterator for Iter<'_, I> {}
