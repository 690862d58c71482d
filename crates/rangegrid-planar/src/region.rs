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

//! Operations over rectangle collections: guillotine difference, canonical
//! ordering, and seam coalescing.
//!
//! The difference decomposition cuts the minuend fully along each of the
//! subtrahend's boundaries (a guillotine cut: one coordinate, independent of
//! the other axis), prunes the fragments the subtrahend covers, and then
//! coalesces the survivors. Coalescing is a heuristic seam removal — it
//! undoes the splits the cuts introduced, not arbitrary rectangle-set
//! minimization.

use crate::rect::Rect;
use rangegrid_core::seq::sequential::Sequential;
use rangegrid_core::span::Span;

/// Sorts rectangles into canonical order: by `x.start`, then `y.start`,
/// then `x.end`, then `y.end`.
///
/// This is the order [`coalesce`] scans in, and the order
/// [`Rect::difference`] returns its fragments in.
pub fn canonical_sort<A, B>(fragments: &mut [Rect<A, B>])
where
    A: Sequential,
    B: Sequential,
{
    fragments.sort_by(|a, b| {
        a.x()
            .start()
            .cmp(&b.x().start())
            .then_with(|| a.y().start().cmp(&b.y().start()))
            .then_with(|| a.x().end().cmp(&b.x().end()))
            .then_with(|| a.y().end().cmp(&b.y().end()))
    });
}

/// Canonically sorts `fragments` and merges away guillotine seams.
///
/// Two passes over the sorted collection:
///
/// 1. neighbors with identical x extents whose y extents are step-adjacent
///    merge into one rectangle; the scan resumes at the merged position, so
///    a merge can enable the next one;
/// 2. the symmetric pass for identical y extents with x-adjacent extents.
///
/// The fragments must be pairwise disjoint, as produced by the guillotine
/// cuts. This is seam removal, not global minimization: it only undoes
/// splits cut-based decomposition introduces.
///
/// # Examples
///
/// ```rust
/// # use rangegrid_planar::{rect::Rect, region::coalesce};
///
/// let mut fragments = vec![
///     Rect::from_bounds(0, 10, 5, 9),
///     Rect::from_bounds(0, 10, 0, 4),
/// ];
/// coalesce(&mut fragments);
/// assert_eq!(fragments, vec![Rect::from_bounds(0, 10, 0, 9)]);
/// ```
pub fn coalesce<A, B>(fragments: &mut Vec<Rect<A, B>>)
where
    A: Sequential,
    B: Sequential,
{
    canonical_sort(fragments);

    let mut i = 0;
    while i + 1 < fragments.len() {
        let (cur, next) = (fragments[i], fragments[i + 1]);
        if cur.x() == next.x() && cur.y().end().next() == next.y().start() {
            fragments[i] = Rect::new(cur.x(), Span::new(cur.y().start(), next.y().end()));
            fragments.remove(i + 1);
            // Re-examine the merged rectangle against its new neighbor.
        } else {
            i += 1;
        }
    }

    let mut i = 0;
    while i + 1 < fragments.len() {
        let (cur, next) = (fragments[i], fragments[i + 1]);
        if cur.y() == next.y() && cur.x().end().next() == next.x().start() {
            fragments[i] = Rect::new(Span::new(cur.x().start(), next.x().end()), cur.y());
            fragments.remove(i + 1);
        } else {
            i += 1;
        }
    }
}

/// Applies one guillotine cut along the first axis to every fragment,
/// building a fresh collection.
fn cut_x<A, B>(fragments: Vec<Rect<A, B>>, at: A) -> Vec<Rect<A, B>>
where
    A: Sequential,
    B: Sequential,
{
    let mut out = Vec::with_capacity(fragments.len() + 1);
    for fragment in fragments {
        match fragment.split_x(at) {
            Some((lo, hi)) => {
                out.push(lo);
                out.push(hi);
            }
            None => out.push(fragment),
        }
    }
    out
}

/// Applies one guillotine cut along the second axis to every fragment.
fn cut_y<A, B>(fragments: Vec<Rect<A, B>>, at: B) -> Vec<Rect<A, B>>
where
    A: Sequential,
    B: Sequential,
{
    let mut out = Vec::with_capacity(fragments.len() + 1);
    for fragment in fragments {
        match fragment.split_y(at) {
            Some((lo, hi)) => {
                out.push(lo);
                out.push(hi);
            }
            None => out.push(fragment),
        }
    }
    out
}

impl<A, B> Rect<A, B>
where
    A: Sequential,
    B: Sequential,
{
    /// Calculates the geometric difference `self - other`, decomposed into
    /// disjoint rectangles in canonical order.
    ///
    /// The minuend is cut along each of the subtrahend's boundaries (the
    /// boundary itself and one step past its far end, per axis), fragments
    /// covered by the subtrahend are discarded, and the survivors are
    /// [`coalesce`]d. Cuts along an axis are skipped entirely when the
    /// subtrahend's extent covers the minuend's extent on that axis.
    ///
    /// Degenerate inputs never fail: an invalid `self` yields no fragments,
    /// an invalid `other` yields `self` unchanged, and full coverage yields
    /// no fragments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_planar::rect::Rect;
    ///
    /// let square = Rect::from_bounds(0, 100, 0, 100);
    /// let hole = Rect::from_bounds(25, 50, 25, 50);
    /// assert_eq!(
    ///     square.difference(hole),
    ///     vec![
    ///         Rect::from_bounds(0, 24, 0, 100),
    ///         Rect::from_bounds(25, 50, 0, 24),
    ///         Rect::from_bounds(25, 50, 51, 100),
    ///         Rect::from_bounds(51, 100, 0, 100),
    ///     ]
    /// );
    /// ```
    pub fn difference(&self, other: Self) -> Vec<Self> {
        if !self.is_valid() {
            return Vec::new();
        }
        if !other.is_valid() {
            return vec![*self];
        }
        if other.contains_rect(*self) {
            return Vec::new();
        }

        let mut fragments = vec![*self];

        if !other.x().contains_span(self.x()) {
            fragments = cut_x(fragments, other.x().start());
            fragments = cut_x(fragments, other.x().end().next());
        }
        if !other.y().contains_span(self.y()) {
            fragments = cut_y(fragments, other.y().start());
            fragments = cut_y(fragments, other.y().end().next());
        }

        fragments.retain(|fragment| !other.contains_rect(*fragment));
        coalesce(&mut fragments);
        fragments
    }
}
