// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree node: insertion, one-time splitting, and range retrieval.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::config::{StraddlePolicy, TreeConfig};
use crate::error::{InsertError, Rejected};
use crate::types::{BoundingBox, Boxable};

/// A node of a region quadtree.
///
/// A node starts as a leaf that stores values directly. Once it holds more than
/// [`TreeConfig::max_node_size`] values it splits: it creates four children, one
/// per quadrant of its box (see [`BoundingBox::quarter`]), and moves each value
/// into the first child that fully contains it. Values that no child contains
/// stay on the node as stragglers. A node splits at most once and never merges.
///
/// The node owns its values and its children. Dropping the root drops the tree.
pub struct QuadNode<T> {
    level: u32,
    bounding_box: BoundingBox,
    config: TreeConfig,
    values: Vec<T>,
    children: Option<Box<[Self; 4]>>,
}

impl<T> fmt::Debug for QuadNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadNode")
            .field("level", &self.level)
            .field("bounding_box", &self.bounding_box)
            .field("values", &self.values.len())
            .field("split", &self.children.is_some())
            .finish_non_exhaustive()
    }
}

/// One block per node, in pre-order.
impl<T> fmt::Display for QuadNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Values: {}", self.values.len())?;
        writeln!(f, "Children: {}", self.children.is_some())?;
        writeln!(f, "Box: {}", self.bounding_box)?;
        for child in self.child_nodes() {
            fmt::Display::fmt(child, f)?;
        }
        Ok(())
    }
}

impl<T> QuadNode<T> {
    /// Create an empty leaf with the default configuration.
    pub fn new(level: u32, bounding_box: BoundingBox) -> Self {
        Self::with_config(level, bounding_box, TreeConfig::new())
    }

    /// Create an empty leaf with an explicit configuration.
    pub fn with_config(level: u32, bounding_box: BoundingBox, config: TreeConfig) -> Self {
        Self {
            level,
            bounding_box,
            config,
            values: Vec::new(),
            children: None,
        }
    }

    /// Depth of this node; the root is level 0.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The region this node covers.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Configuration this node was built with.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Values stored directly on this node (not in its children).
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The four children in quadrant order, once the node has split.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Whether this node has split.
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    /// Number of values stored in this subtree.
    pub fn count(&self) -> usize {
        self.values.len() + self.child_nodes().map(Self::count).sum::<usize>()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().map(Self::node_count).sum::<usize>()
    }

    /// Deepest level reached in this subtree.
    pub fn depth(&self) -> u32 {
        self.child_nodes()
            .map(Self::depth)
            .max()
            .unwrap_or(self.level)
    }

    /// Remove every value in this subtree.
    ///
    /// The structure is kept: split nodes stay split and boxes are unchanged,
    /// so [`node_count`](Self::node_count) does not change.
    pub fn clear(&mut self) {
        self.values.clear();
        if let Some(children) = self.children.as_deref_mut() {
            for child in children {
                child.clear();
            }
        }
    }

    /// All values in this subtree, in the same order [`retrieve`](Self::retrieve) uses.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut out = Vec::with_capacity(self.count());
        self.collect_all(&mut out);
        out.into_iter()
    }

    fn child_nodes(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().flat_map(|c| c.iter())
    }

    fn collect_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(self.values.iter());
        for child in self.child_nodes() {
            child.collect_all(out);
        }
    }
}

impl<T: Boxable> QuadNode<T> {
    /// Whether `value` lies entirely inside this node's box.
    pub fn fits(&self, value: &T) -> bool {
        self.bounding_box.contains(&value.bounding_box())
    }

    /// Insert a value.
    ///
    /// The value is silently dropped when it does not lie entirely inside this
    /// node's box, or when this node has split and the value straddles its
    /// quadrants under [`StraddlePolicy::Drop`]. Use
    /// [`try_insert`](Self::try_insert) to find out.
    pub fn insert(&mut self, value: T) {
        let _ = self.try_insert(value);
    }

    /// Insert a value, handing it back if it was not stored.
    pub fn try_insert(&mut self, value: T) -> Result<(), Rejected<T>> {
        let value_box = value.bounding_box();
        if !self.bounding_box.contains(&value_box) {
            trace!(
                level = self.level,
                value = %value_box,
                node = %self.bounding_box,
                "value outside node, dropped"
            );
            return Err(Rejected {
                value,
                error: InsertError::OutsideBounds {
                    value: value_box,
                    node: self.bounding_box,
                },
            });
        }
        self.place(value, value_box)
    }

    /// Route a value already known to fit this node.
    fn place(&mut self, value: T, value_box: BoundingBox) -> Result<(), Rejected<T>> {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(child) = children
                .iter_mut()
                .find(|c| c.bounding_box.contains(&value_box))
            {
                return child.place(value, value_box);
            }
            return match self.config.straddle_policy {
                StraddlePolicy::Keep => {
                    self.values.push(value);
                    Ok(())
                }
                StraddlePolicy::Drop => {
                    trace!(
                        level = self.level,
                        value = %value_box,
                        "value straddles quadrants, dropped"
                    );
                    Err(Rejected {
                        value,
                        error: InsertError::Straddles {
                            value: value_box,
                            level: self.level,
                        },
                    })
                }
            };
        }

        self.values.push(value);
        if self.values.len() > self.config.max_node_size {
            self.split();
        }
        Ok(())
    }

    /// Create the four children and move each value one level down.
    ///
    /// Values go straight into the first child that contains them without
    /// triggering that child's own split; an over-full child splits on its next
    /// insert. Values no child contains stay here.
    ///
    /// Quadrants shrink by truncating halves, so a box of width or height 1
    /// produces empty quadrants that contain only empty values. More than
    /// `max_node_size` identical empty values at a quadrant corner therefore
    /// keep splitting without bound.
    fn split(&mut self) {
        let level = self.level + 1;
        let config = self.config;
        let mut children = Box::new(
            self.bounding_box
                .quarter()
                .map(|quadrant| Self::with_config(level, quadrant, config)),
        );

        let values = core::mem::take(&mut self.values);
        let total = values.len();
        for value in values {
            let value_box = value.bounding_box();
            match children
                .iter_mut()
                .find(|c| c.bounding_box.contains(&value_box))
            {
                Some(child) => child.values.push(value),
                None => self.values.push(value),
            }
        }
        self.children = Some(children);

        debug!(
            level = self.level,
            node = %self.bounding_box,
            values = total,
            stragglers = self.values.len(),
            "split node"
        );
    }

    /// Values in this subtree whose box intersects `query`.
    ///
    /// Results are this node's matches followed by those of children 0 to 3,
    /// each ordered the same way. A value inserted twice is returned twice.
    pub fn retrieve(&self, query: BoundingBox) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_intersecting(query, &mut out);
        out
    }

    fn collect_intersecting<'a>(&'a self, query: BoundingBox, out: &mut Vec<&'a T>) {
        if !self.bounding_box.intersects(&query) {
            return;
        }
        out.extend(
            self.values
                .iter()
                .filter(|v| query.intersects(&v.bounding_box())),
        );
        for child in self.child_nodes() {
            child.collect_intersecting(query, out);
        }
    }
}
