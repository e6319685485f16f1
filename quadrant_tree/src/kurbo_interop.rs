// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between [`BoundingBox`] and [`kurbo::Rect`].
//!
//! Enabled by the `kurbo` feature. Kurbo needs either `std` (default) or `libm`.

use kurbo::Rect;

use crate::types::{BoundingBox, Boxable};

impl BoundingBox {
    /// This box as a Kurbo rectangle (`x0 = left`, `y0 = bottom`, `x1 = right`, `y1 = top`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left() as f64,
            self.bottom() as f64,
            self.right() as f64,
            self.top() as f64,
        )
    }

    /// The smallest box with integer edges that covers `rect`.
    ///
    /// The rectangle is normalized first, so inverted rectangles are accepted.
    /// Assumes finite coordinates.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Edges are already integral after rounding out; out-of-range values saturate."
    )]
    pub fn from_rect_round_out(rect: Rect) -> Self {
        let r = rect.abs().expand();
        let x0 = r.x0 as i64;
        let y0 = r.y0 as i64;
        Self::new(x0, y0, r.x1 as i64 - x0, r.y1 as i64 - y0)
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        b.to_rect()
    }
}

/// Kurbo rectangles are stored under their rounded-out integer box.
impl Boxable for Rect {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_rect_round_out(*self)
    }
}
