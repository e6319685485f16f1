// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: the integer [`BoundingBox`] and the [`Boxable`] capability.

use core::fmt;

use crate::error::BoxError;

/// Axis-aligned box on the integer plane.
///
/// A box is stored as its origin (the bottom-left corner) and its size. The
/// derived edges are `left = x`, `right = x + width`, `bottom = y` and
/// `top = y + height`, so `right >= left` and `top >= bottom` whenever the size
/// is non-negative.
///
/// Boxes are plain values: every operation returns a new box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
}

impl BoundingBox {
    /// Create a box from its bottom-left origin and size.
    ///
    /// The size is not validated in release builds; use [`BoundingBox::try_new`]
    /// for untrusted input.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        debug_assert!(width >= 0 && height >= 0, "box size must be non-negative");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box, rejecting a negative width or height.
    pub const fn try_new(x: i64, y: i64, width: i64, height: i64) -> Result<Self, BoxError> {
        if width < 0 || height < 0 {
            return Err(BoxError::NegativeSize { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Origin x (same as [`left`](Self::left)).
    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Origin y (same as [`bottom`](Self::bottom)).
    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Width of the box.
    #[inline]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Height of the box.
    #[inline]
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// The x value of the left side.
    #[inline]
    pub const fn left(&self) -> i64 {
        self.x
    }

    /// The x value of the right side.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x + self.width
    }

    /// The y value of the bottom side.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y
    }

    /// The y value of the top side.
    #[inline]
    pub const fn top(&self) -> i64 {
        self.y + self.height
    }

    /// The x value of the center, truncated toward the origin.
    #[inline]
    pub const fn center_x(&self) -> i64 {
        self.x + self.width / 2
    }

    /// The y value of the center, truncated toward the origin.
    #[inline]
    pub const fn center_y(&self) -> i64 {
        self.y + self.height / 2
    }

    /// True if the box has zero width or zero height.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Split the box into its four quadrants.
    ///
    /// Quadrants are ordered counter-clockwise starting at the top right:
    ///
    /// | index | quadrant     |
    /// |-------|--------------|
    /// | 0     | top right    |
    /// | 1     | top left     |
    /// | 2     | bottom left  |
    /// | 3     | bottom right |
    ///
    /// Each quadrant is `width / 2` by `height / 2`. With an odd width or height
    /// the remainder is dropped, so the quadrants do not fully tile the box.
    pub const fn quarter(&self) -> [Self; 4] {
        let w = self.width / 2;
        let h = self.height / 2;
        let (l, b) = (self.left(), self.bottom());
        [
            Self::new(l + w, b + h, w, h),
            Self::new(l, b + h, w, h),
            Self::new(l, b, w, h),
            Self::new(l + w, b, w, h),
        ]
    }

    /// True if `other` lies entirely inside this box. Shared edges count as inside.
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        let x = self.left() <= other.left() && self.right() >= other.right();
        let y = self.top() >= other.top() && self.bottom() <= other.bottom();
        x && y
    }

    /// True if the center of `other` lies inside this box, edges inclusive.
    #[inline]
    pub const fn contains_center(&self, other: &Self) -> bool {
        let (cx, cy) = (other.center_x(), other.center_y());
        let x = self.left() <= cx && self.right() >= cx;
        let y = self.top() >= cy && self.bottom() <= cy;
        x && y
    }

    /// True if the interiors of the two boxes overlap.
    ///
    /// Boxes that only touch along an edge or at a corner do not intersect, and a
    /// box with zero width or height intersects nothing, itself included.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        let x = self.left() < other.right() && other.left() < self.right();
        let y = self.top() > other.bottom() && other.top() > self.bottom();
        x && y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {})",
            self.left(),
            self.bottom(),
            self.right(),
            self.top()
        )
    }
}

/// Anything that can report its own bounding box.
///
/// The tree asks for the box whenever it routes or tests a value, so the box may
/// be computed on demand from other fields. It must not change while the value
/// is stored in a tree.
pub trait Boxable {
    /// The axis-aligned box enclosing this value.
    fn bounding_box(&self) -> BoundingBox;
}

impl Boxable for BoundingBox {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}

impl<T: Boxable + ?Sized> Boxable for &T {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }
}

/// A box paired with an arbitrary payload, e.g. an entity id.
impl<P> Boxable for (BoundingBox, P) {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        self.0
    }
}
