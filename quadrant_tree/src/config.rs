// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree configuration: node capacity and the straddle policy.

/// Number of values a leaf holds before it splits, unless configured otherwise.
pub const DEFAULT_MAX_NODE_SIZE: usize = 16;

/// What a split node does with an inserted value that no quadrant fully contains.
///
/// Values that straddle quadrant boundaries at the moment a node splits always
/// stay on that node. This policy only governs values inserted afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StraddlePolicy {
    /// Drop the value. It is not stored anywhere in the tree.
    #[default]
    Drop,
    /// Keep the value on the split node alongside the stragglers from its split.
    Keep,
}

/// Configuration shared by every node of a tree.
///
/// Children inherit the configuration of the node that created them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// A leaf splits once it holds more than this many values.
    pub max_node_size: usize,
    /// Handling of values that straddle the quadrants of a split node.
    pub straddle_policy: StraddlePolicy,
}

impl TreeConfig {
    /// Default configuration: capacity [`DEFAULT_MAX_NODE_SIZE`], [`StraddlePolicy::Drop`].
    pub const fn new() -> Self {
        Self {
            max_node_size: DEFAULT_MAX_NODE_SIZE,
            straddle_policy: StraddlePolicy::Drop,
        }
    }

    /// Set the leaf capacity.
    #[must_use]
    pub const fn with_max_node_size(mut self, max_node_size: usize) -> Self {
        self.max_node_size = max_node_size;
        self
    }

    /// Set the straddle policy.
    #[must_use]
    pub const fn with_straddle_policy(mut self, straddle_policy: StraddlePolicy) -> Self {
        self.straddle_policy = straddle_policy;
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
