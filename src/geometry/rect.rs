//! Rectangle structure for mask and crop regions
//!
//! Coordinates are in pixels with (0,0) at the top-left corner of the image.
//! The right and bottom edges are exclusive, so `width = right - left`.

use std::fmt;

/// Axis-aligned rectangle in pixel coordinates
///
/// Every transform returns a new rectangle. A zero-area rectangle is valid;
/// a rectangle with `left > right` or `top > bottom` only comes out of
/// [`Rect::intersect`] on non-overlapping inputs and is reported by
/// [`Rect::is_degenerate`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive)
    pub left: i64,
    /// Top edge (inclusive)
    pub top: i64,
    /// Right edge (exclusive)
    pub right: i64,
    /// Bottom edge (exclusive)
    pub bottom: i64,
}

impl Rect {
    /// Create a new rectangle from its four edges
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Rectangle covering a whole `width x height` image
    pub fn from_size(width: u32, height: u32) -> Self {
        Rect::new(0, 0, width as i64, height as i64)
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Top-left corner as `(left, top)`
    pub fn position(&self) -> (i64, i64) {
        (self.left, self.top)
    }

    /// Bottom-right corner as `(right, bottom)`
    pub fn end_position(&self) -> (i64, i64) {
        (self.right, self.bottom)
    }

    /// Dimensions as `(width, height)`
    pub fn size(&self) -> (i64, i64) {
        (self.width(), self.height())
    }

    /// Returns true if an intersection left the edges crossed
    pub fn is_degenerate(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Returns true if the rectangle covers no pixel at all
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Expand all four sides by `amount`
    ///
    /// A negative amount shrinks the rectangle. The result is not clamped;
    /// intersect it with the image bounds if it must stay inside them.
    pub fn pad(&self, amount: i64) -> Rect {
        Rect::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    /// Translate the rectangle
    ///
    /// `None` on an axis means no shift was requested. It yields the same
    /// numbers as `Some(0)`.
    pub fn offset(&self, dx: Option<i64>, dy: Option<i64>) -> Rect {
        let mut rect = *self;
        if let Some(dx) = dx.filter(|&d| d != 0) {
            rect.left += dx;
            rect.right += dx;
        }
        if let Some(dy) = dy.filter(|&d| d != 0) {
            rect.top += dy;
            rect.bottom += dy;
        }
        rect
    }

    /// Translate the rectangle by a position such as another rectangle's corner
    pub fn offset_by(&self, (dx, dy): (i64, i64)) -> Rect {
        self.offset(Some(dx), Some(dy))
    }

    /// Overlap of `self` and `other`
    ///
    /// Each edge of `other` is clamped toward the matching edge of `self`.
    /// Non-overlapping inputs give a degenerate rectangle, so check
    /// [`Rect::is_degenerate`] before cropping with the result.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}
