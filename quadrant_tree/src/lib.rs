// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrant_tree --heading-base-level=0

//! Quadrant Tree: a bounded-capacity region quadtree over integer boxes.
//!
//! Quadrant Tree indexes values that report an axis-aligned [`BoundingBox`] on the
//! integer plane, and answers range queries for every value intersecting a box.
//!
//! - Build a tree over a fixed region with [`QuadTree::new`] or [`QuadTree::with_config`].
//! - [`QuadTree::insert`] values implementing [`Boxable`].
//! - [`QuadTree::retrieve`] every value whose box intersects a query box.
//!
//! The tree is generic over the payload and stores it by value. A node holds up to
//! [`TreeConfig::max_node_size`] values; past that it splits once into four
//! quadrant children and pushes its values down.
//!
//! # Example
//!
//! ```rust
//! use quadrant_tree::{BoundingBox, QuadTree};
//!
//! let region = BoundingBox::new(-32, -32, 64, 64);
//! let mut tree = QuadTree::new(region);
//!
//! // A payload is any `Boxable`; a `(BoundingBox, P)` pair works out of the box.
//! tree.insert((BoundingBox::new(-6, 0, 6, 6), "inside"));
//! tree.insert((BoundingBox::new(58, 58, 8, 8), "outside"));
//!
//! let hits = tree.retrieve(region);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].1, "inside");
//! ```
//!
//! ## Boundary rules
//!
//! Geometry follows two predicates on [`BoundingBox`]:
//! - [`contains`](BoundingBox::contains) is edge-inclusive and decides where a value is stored.
//! - [`intersects`](BoundingBox::intersects) is strict: boxes that only touch do not match a query.
//!
//! Inserts never fail loudly. A value outside the tree's region is dropped, and so
//! is a value inserted into a split node that straddles its quadrants (unless the
//! tree uses [`StraddlePolicy::Keep`]). Use [`QuadTree::try_insert`] to get the
//! value back together with an [`InsertError`]:
//!
//! ```rust
//! use quadrant_tree::{BoundingBox, InsertError, QuadTree};
//!
//! let mut tree = QuadTree::new(BoundingBox::new(0, 0, 16, 16));
//! let rejected = tree.try_insert(BoundingBox::new(12, 12, 8, 8)).unwrap_err();
//! assert!(matches!(rejected.error, InsertError::OutsideBounds { .. }));
//! ```
//!
//! ## Limitations
//!
//! Quadrants halve with truncation, so odd sizes lose a one-unit strip and a
//! node of width or height 1 has empty quadrants. More than `max_node_size`
//! identical zero-area values at a quadrant corner keep splitting without bound.
//! There is no removal, no rebalancing, and no internal locking; mutation takes
//! `&mut self`.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` when `kurbo` is enabled.
//! - `libm`: forwards to Kurbo's `libm` for `no_std` builds.
//! - `kurbo`: conversions to and from `kurbo::Rect`, and `Boxable` for `Rect`.
//! - `serde`: `Serialize`/`Deserialize` for [`BoundingBox`] and [`TreeConfig`].
//!
//! Events are emitted through `tracing` (a `debug` event per split, a `trace`
//! event per dropped insert); install a subscriber to see them.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
#[cfg(feature = "kurbo")]
pub mod kurbo_interop;
pub mod node;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_MAX_NODE_SIZE, StraddlePolicy, TreeConfig};
pub use error::{BoxError, InsertError, Rejected};
pub use node::QuadNode;
pub use tree::QuadTree;
pub use types::{BoundingBox, Boxable};
