// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API: a root node plus its configuration.

use alloc::vec::Vec;

use crate::config::TreeConfig;
use crate::error::Rejected;
use crate::node::QuadNode;
use crate::types::{BoundingBox, Boxable};

/// A region quadtree over a fixed bounding region.
///
/// This owns the level-0 [`QuadNode`] and forwards to it. The region and the
/// configuration are fixed at construction.
#[derive(Debug)]
pub struct QuadTree<T> {
    root: QuadNode<T>,
}

impl<T> QuadTree<T> {
    /// Create an empty tree over `bounds` with the default configuration.
    pub fn new(bounds: BoundingBox) -> Self {
        Self::with_config(bounds, TreeConfig::default())
    }

    /// Create an empty tree over `bounds`.
    pub fn with_config(bounds: BoundingBox, config: TreeConfig) -> Self {
        Self {
            root: QuadNode::with_config(0, bounds, config),
        }
    }

    /// The region covered by the tree.
    pub fn bounds(&self) -> BoundingBox {
        self.root.bounding_box()
    }

    /// The configuration every node was built with.
    pub fn config(&self) -> TreeConfig {
        self.root.config()
    }

    /// The root node, for inspecting the structure.
    pub fn root(&self) -> &QuadNode<T> {
        &self.root
    }

    /// Number of stored values.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// True if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Remove all values, keeping the node structure.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// All stored values.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.root.iter()
    }
}

impl<T: Boxable> QuadTree<T> {
    /// Build a tree by inserting each value in turn.
    pub fn from_values<I>(bounds: BoundingBox, config: TreeConfig, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::with_config(bounds, config);
        tree.extend(values);
        tree
    }

    /// Insert a value, dropping it silently if it does not fit.
    ///
    /// See [`QuadNode::insert`].
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
    }

    /// Insert a value, handing it back if it was not stored.
    pub fn try_insert(&mut self, value: T) -> Result<(), Rejected<T>> {
        self.root.try_insert(value)
    }

    /// Values whose box intersects `query`.
    pub fn retrieve(&self, query: BoundingBox) -> Vec<&T> {
        self.root.retrieve(query)
    }
}

impl<T: Boxable> Extend<T> for QuadTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
