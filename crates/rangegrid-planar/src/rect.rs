// Copyright (c) 2025 the rangegrid developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use rangegrid_core::seq::sequential::Sequential;
use rangegrid_core::span::Span;
use std::fmt;

/// An axis-aligned rectangle: the Cartesian product `x × y` of two closed
/// spans over independently-typed [`Sequential`] axes.
///
/// A rectangle is an immutable value and is valid iff both component spans
/// are valid. An invalid rectangle behaves as the empty set in every
/// operation.
///
/// # Examples
///
/// ```rust
/// # use rangegrid_planar::rect::Rect;
///
/// let square = Rect::from_bounds(0, 100, 0, 100);
/// let hole = Rect::from_bounds(25, 50, 25, 50);
/// assert!(square.contains_rect(hole));
///
/// let ring = square.difference(hole);
/// assert_eq!(ring.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect<A, B>
where
    A: Sequential,
    B: Sequential,
{
    x: Span<A>,
    y: Span<B>,
}

impl<A, B> Rect<A, B>
where
    A: Sequential,
    B: Sequential,
{
    /// Creates a rectangle from its two component spans.
    #[inline]
    pub const fn new(x: Span<A>, y: Span<B>) -> Self {
        Self { x, y }
    }

    /// Creates a rectangle from raw axis bounds, `[x0, x1] × [y0, y1]`.
    ///
    /// As with [`Span::new`], no validation is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    /// # use rangegrid_planar::rect::Rect;
    ///
    /// let r = Rect::from_bounds(0, 10, 5, 15);
    /// assert_eq!(r.x(), Span::new(0, 10));
    /// assert_eq!(r.y(), Span::new(5, 15));
    /// ```
    #[inline]
    pub const fn from_bounds(x0: A, x1: A, y0: B, y1: B) -> Self {
        Self {
            x: Span::new(x0, x1),
            y: Span::new(y0, y1),
        }
    }

    /// Returns the first-axis span.
    #[inline]
    pub const fn x(&self) -> Span<A> {
        self.x
    }

    /// Returns the second-axis span.
    #[inline]
    pub const fn y(&self) -> Span<B> {
        self.y
    }

    /// Returns `true` if both component spans are valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Returns `true` if the rectangles share at least one cell, i.e. the
    /// projections intersect on *both* axes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_planar::rect::Rect;
    ///
    /// let a = Rect::from_bounds(0, 10, 0, 10);
    /// assert!(a.intersects(Rect::from_bounds(5, 15, 5, 15)));
    /// // Overlap on one axis alone is not an intersection.
    /// assert!(!a.intersects(Rect::from_bounds(5, 15, 11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.x.intersects(other.x) && self.y.intersects(other.y)
    }

    /// Returns `true` if `self` fully covers `other` on both axes.
    #[inline]
    pub fn contains_rect(&self, other: Self) -> bool {
        self.x.contains_span(other.x) && self.y.contains_span(other.y)
    }

    /// Calculates the union, coalescing axis-aligned strips only.
    ///
    /// Two rectangles merge when they share an identical extent on one axis
    /// and their extents on the other axis intersect or are step-adjacent.
    /// Everything else returns `None` and the caller retains both inputs as
    /// separate rectangles; no general polygon union is computed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_planar::rect::Rect;
    ///
    /// let a = Rect::from_bounds(0, 100, 0, 50);
    /// let b = Rect::from_bounds(0, 100, 51, 150);
    /// assert_eq!(a.union(b), Some(Rect::from_bounds(0, 100, 0, 150)));
    ///
    /// let c = Rect::from_bounds(50, 150, 40, 90); // Overlaps, no shared strip
    /// assert_eq!(a.union(c), None);
    /// ```
    pub fn union(&self, other: Self) -> Option<Self> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }

        if self.x == other.x {
            if let Some(y) = self.y.union(other.y) {
                return Some(Self::new(self.x, y));
            }
        }
        if self.y == other.y {
            if let Some(x) = self.x.union(other.x) {
                return Some(Self::new(x, self.y));
            }
        }

        None
    }

    /// Splits the rectangle along the first axis at `at`.
    ///
    /// Returns `Some((before, at_and_after))` when `at` lies strictly inside
    /// the x extent (`x.start < at <= x.end`); the first piece ends one step
    /// before `at`. Returns `None` — the split is a no-op — when `at` is
    /// at-or-before the start, past the end, or the rectangle is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_planar::rect::Rect;
    ///
    /// let r = Rect::from_bounds(0, 10, 0, 5);
    /// let (lo, hi) = r.split_x(4).unwrap();
    /// assert_eq!(lo, Rect::from_bounds(0, 3, 0, 5));
    /// assert_eq!(hi, Rect::from_bounds(4, 10, 0, 5));
    ///
    /// assert!(r.split_x(0).is_none());
    /// assert!(r.split_x(11).is_none());
    /// ```
    pub fn split_x(&self, at: A) -> Option<(Self, Self)> {
        if !self.is_valid() || at <= self.x.start() || self.x.end() < at {
            return None;
        }
        Some((
            Self::new(Span::new(self.x.start(), at.prev()), self.y),
            Self::new(Span::new(at, self.x.end()), self.y),
        ))
    }

    /// Splits the rectangle along the second axis at `at`.
    ///
    /// Symmetric to [`split_x`](Rect::split_x).
    pub fn split_y(&self, at: B) -> Option<(Self, Self)> {
        if !self.is_valid() || at <= self.y.start() || self.y.end() < at {
            return None;
        }
        Some((
            Self::new(self.x, Span::new(self.y.start(), at.prev())),
            Self::new(self.x, Span::new(at, self.y.end())),
        ))
    }
}

impl<A, B> fmt::Display for Rect<A, B>
where
    A: Sequential + fmt::Display,
    B: Sequential + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}
