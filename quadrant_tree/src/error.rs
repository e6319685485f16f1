// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the fallible entry points.
//!
//! The default operations ([`QuadNode::insert`](crate::QuadNode::insert),
//! [`QuadNode::retrieve`](crate::QuadNode::retrieve), ...) never fail; a value
//! that does not fit is dropped. These types exist for callers that want to know.

use core::fmt;

use crate::types::BoundingBox;

/// Invalid box dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    /// Width or height was negative.
    #[error("box size must be non-negative, got {width}x{height}")]
    NegativeSize {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
}

/// Why an insert was not accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    /// The value's box is not fully inside the node's box.
    #[error("value {value} lies outside node {node}")]
    OutsideBounds {
        /// Box of the rejected value.
        value: BoundingBox,
        /// Box of the node that rejected it.
        node: BoundingBox,
    },
    /// The node is split and no single quadrant fully contains the value.
    #[error("value {value} straddles the quadrants of the node at level {level}")]
    Straddles {
        /// Box of the rejected value.
        value: BoundingBox,
        /// Level of the split node that dropped it.
        level: u32,
    },
}

/// A value refused by [`QuadNode::try_insert`](crate::QuadNode::try_insert), handed back to the caller.
pub struct Rejected<T> {
    /// The value that was not stored.
    pub value: T,
    /// Why it was not stored.
    pub error: InsertError,
}

impl<T> Rejected<T> {
    /// Take back the rejected value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> core::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
