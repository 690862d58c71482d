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

use crate::error::InvariantViolation;
use crate::seq::sequential::Sequential;
use smallvec::SmallVec;
use std::cmp::{max, min};
use std::fmt;

/// A closed interval `[start, end]` over one [`Sequential`] axis.
///
/// A span is an immutable value; every operation returns new spans and
/// leaves its inputs untouched. Construction does not reject `start > end`:
/// such a span is the canonical invalid/empty sentinel, reports
/// [`is_valid`](Span::is_valid) as `false`, and behaves as the empty set in
/// every operation.
///
/// # Examples
///
/// ```rust
/// # use rangegrid_core::span::Span;
///
/// let a = Span::new(0, 100);
/// let b = Span::new(25, 30);
/// assert!(a.contains_span(b));
///
/// let diff = a.difference(b).unwrap();
/// assert!(diff.intersected());
/// assert_eq!(diff.pieces(), &[Span::new(0, 24), Span::new(31, 100)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span<T>
where
    T: Sequential,
{
    start: T,
    end: T,
}

impl<T> Span<T>
where
    T: Sequential,
{
    /// Creates a new span `[start, end]`.
    ///
    /// No validation is performed: `start > end` produces the invalid/empty
    /// sentinel. Use [`try_new`](Span::try_new) to reject it instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// assert!(Span::new(0, 10).is_valid());
    /// assert!(!Span::new(1, 0).is_valid());
    /// ```
    #[inline]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Creates a new span if `start <= end`, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// assert!(Span::try_new(0, 10).is_some());
    /// assert!(Span::try_new(10, 10).is_some());
    /// assert!(Span::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates the degenerate single-point span `[p, p]`.
    #[inline]
    pub const fn point(p: T) -> Self {
        Self { start: p, end: p }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the span denotes a non-empty interval
    /// (`start <= end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// assert!(Span::new(5, 5).is_valid());
    /// assert!(!Span::new(5, 4).is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `true` if `p` lies inside `[start, end]`.
    ///
    /// An invalid span contains nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// let s = Span::new(0, 10);
    /// assert!(s.contains_point(0));
    /// assert!(s.contains_point(10));
    /// assert!(!s.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, p: T) -> bool {
        self.is_valid() && self.start <= p && p <= self.end
    }

    /// Returns `true` if `self` fully covers `other`, bounds inclusive.
    ///
    /// `false` whenever either span is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// let s = Span::new(0, 10);
    /// assert!(s.contains_span(s));
    /// assert!(s.contains_span(Span::new(2, 8)));
    /// assert!(!s.contains_span(Span::new(2, 11)));
    /// ```
    #[inline]
    pub fn contains_span(&self, other: Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.start <= other.start
            && other.end <= self.end
    }

    /// Returns `true` if the spans share at least one point.
    ///
    /// `false` whenever either span is invalid. Adjacent spans (no shared
    /// point, no gap) do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// let s = Span::new(0, 10);
    /// assert!(s.intersects(Span::new(10, 20)));
    /// assert!(!s.intersects(Span::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        !(other.end < self.start || self.end < other.start)
    }

    /// Calculates the union of two spans.
    ///
    /// Returns `Some(merged)` when the spans intersect or are step-adjacent
    /// (one starts exactly one step past the other's end). Returns `None`
    /// when a gap remains or either span is invalid; the union then cannot
    /// be represented as one interval and the caller keeps both inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// let s = Span::new(0, 100);
    /// assert_eq!(s.union(Span::new(101, 200)), Some(Span::new(0, 200)));
    /// assert_eq!(s.union(Span::new(25, 150)), Some(Span::new(0, 150)));
    /// assert_eq!(s.union(Span::new(102, 200)), None);
    /// ```
    pub fn union(&self, other: Self) -> Option<Self> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }

        if !self.intersects(other) {
            if self.end.next() == other.start {
                return Some(Self::new(self.start, other.end));
            }
            if other.end.next() == self.start {
                return Some(Self::new(other.start, self.end));
            }
            return None;
        }

        Some(Self::new(
            min(self.start, other.start),
            max(self.end, other.end),
        ))
    }

    /// Calculates the set difference `self - other`.
    ///
    /// The result carries up to two disjoint pieces plus a flag recording
    /// whether the spans actually intersected:
    ///
    /// * invalid `other`, or disjoint spans: `self` unchanged, not intersected;
    /// * invalid `self`: no pieces, not intersected;
    /// * `other` covers `self`: no pieces, intersected;
    /// * `other` strictly interior to `self`: two pieces, intersected;
    /// * one-sided overlap: one clipped piece, intersected.
    ///
    /// # Errors
    ///
    /// The case analysis above is exhaustive for every law-abiding
    /// [`Sequential`]; escaping it returns an [`InvariantViolation`] instead
    /// of panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::span::Span;
    ///
    /// let d = Span::new(0, 100).difference(Span::new(25, 200)).unwrap();
    /// assert!(d.intersected());
    /// assert_eq!(d.pieces(), &[Span::new(0, 24)]);
    /// ```
    pub fn difference(&self, other: Self) -> Result<Difference<T>, InvariantViolation>
    where
        T: fmt::Debug,
    {
        if !self.is_valid() {
            return Ok(Difference::new(SmallVec::new(), false));
        }
        if !other.is_valid() {
            return Ok(Difference::unchanged(*self));
        }

        // Disjoint.
        if other.end < self.start || self.end < other.start {
            return Ok(Difference::unchanged(*self));
        }

        // `other` covers `self` entirely.
        if other.start <= self.start && self.end <= other.end {
            return Ok(Difference::new(SmallVec::new(), true));
        }

        // `other` strictly interior: `self` splits around it.
        if self.start < other.start && other.end < self.end {
            let pieces = smallvec::smallvec![
                Self::new(self.start, other.start.prev()),
                Self::new(other.end.next(), self.end),
            ];
            return Ok(Difference::new(pieces, true));
        }

        // `other` clips the low end.
        if other.start <= self.start {
            let pieces = smallvec::smallvec![Self::new(other.end.next(), self.end)];
            return Ok(Difference::new(pieces, true));
        }

        // `other` clips the high end.
        if self.start < other.start {
            let pieces = smallvec::smallvec![Self::new(self.start, other.start.prev())];
            return Ok(Difference::new(pieces, true));
        }

        Err(InvariantViolation::new(
            "Span::difference",
            format!("{:?} minus {:?}", self, other),
        ))
    }
}

/// Outcome of a 1D set difference: the surviving pieces of the minuend and
/// whether the operands intersected at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference<T>
where
    T: Sequential,
{
    pieces: SmallVec<[Span<T>; 2]>,
    intersected: bool,
}

impl<T> Difference<T>
where
    T: Sequential,
{
    #[inline]
    fn new(pieces: SmallVec<[Span<T>; 2]>, intersected: bool) -> Self {
        Self {
            pieces,
            intersected,
        }
    }

    #[inline]
    fn unchanged(span: Span<T>) -> Self {
        Self {
            pieces: smallvec::smallvec![span],
            intersected: false,
        }
    }

    /// The disjoint pieces of the minuend that survive the subtraction, in
    /// ascending order. Empty when the subtrahend covered everything.
    #[inline]
    pub fn pieces(&self) -> &[Span<T>] {
        &self.pieces
    }

    /// Returns `true` if the operands shared at least one point.
    #[inline]
    pub fn intersected(&self) -> bool {
        self.intersected
    }

    /// Returns `true` if nothing survived the subtraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Consumes the outcome and yields the pieces.
    #[inline]
    pub fn into_pieces(self) -> SmallVec<[Span<T>; 2]> {
        self.pieces
    }
}

impl<T> fmt::Display for Span<T>
where
    T: Sequential + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "[INVALID]");
        }
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Span<T>
where
    T: Sequential,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> std::ops::RangeBounds<T> for Span<T>
where
    T: Sequential,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::quad::DottedQuad;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn s(start: i32, end: i32) -> Span<i32> {
        Span::new(start, end)
    }

    /// The canonical invalid sentinel on an integer axis.
    fn invalid() -> Span<i32> {
        Span::new(1, 0)
    }

    #[test]
    fn test_validity() {
        assert!(s(0, 10).is_valid());
        assert!(s(7, 7).is_valid());
        assert!(!invalid().is_valid());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Span::try_new(0, 10), Some(s(0, 10)));
        assert_eq!(Span::try_new(10, 10), Some(s(10, 10)));
        assert_eq!(Span::try_new(10, 0), None);
    }

    #[test]
    fn test_point() {
        let p = Span::point(5);
        assert_eq!(p, s(5, 5));
        assert!(p.is_valid());
    }

    #[test]
    fn test_contains_point() {
        let a = s(0, 10);
        assert!(a.contains_point(0));
        assert!(a.contains_point(5));
        assert!(a.contains_point(10));
        assert!(!a.contains_point(-1));
        assert!(!a.contains_point(11));
        assert!(!invalid().contains_point(0));
    }

    #[test]
    fn test_contains_span() {
        assert!(s(0, 0).contains_span(s(0, 0)));
        assert!(s(0, 1).contains_span(s(0, 1)));
        assert!(s(-1, 1).contains_span(s(0, 1)));
        assert!(s(0, 2).contains_span(s(0, 1)));
        assert!(s(-1, 2).contains_span(s(0, 1)));

        assert!(!s(0, 1).contains_span(s(-1, 1)));
        assert!(!s(0, 1).contains_span(s(0, 2)));
        assert!(!s(0, 1).contains_span(s(-1, 2)));

        assert!(!invalid().contains_span(s(0, 1)));
        assert!(!s(0, 1).contains_span(invalid()));
    }

    #[test]
    fn test_containment_reflexive() {
        for (a, b) in [(0, 0), (0, 100), (-5, 3)] {
            let r = s(a, b);
            assert!(r.contains_span(r));
        }
    }

    #[test]
    fn test_intersects() {
        let a = s(0, 10);

        assert!(a.intersects(a));
        assert!(a.intersects(s(10, 20)));
        assert!(a.intersects(s(-5, 0)));
        assert!(a.intersects(s(2, 8)));
        assert!(a.intersects(s(-5, 20)));

        assert!(!a.intersects(s(11, 20)));
        assert!(!a.intersects(s(-5, -1)));
        assert!(!a.intersects(invalid()));
        assert!(!invalid().intersects(a));
    }

    #[test]
    fn test_equality() {
        assert_eq!(s(0, 10), s(0, 10));
        assert_ne!(s(0, 10), s(0, 11));
        assert_ne!(s(0, 10), invalid());
    }

    #[test]
    fn test_union_overlapping() {
        assert_eq!(s(0, 100).union(s(25, 200)), Some(s(0, 200)));
        assert_eq!(s(25, 200).union(s(0, 100)), Some(s(0, 200)));
        // Contained operand does not widen anything.
        assert_eq!(s(0, 100).union(s(25, 30)), Some(s(0, 100)));
    }

    #[test]
    fn test_union_adjacency_coalesces() {
        assert_eq!(s(0, 100).union(s(101, 200)), Some(s(0, 200)));
        assert_eq!(s(101, 200).union(s(0, 100)), Some(s(0, 200)));
    }

    #[test]
    fn test_union_gap_and_invalid() {
        assert_eq!(s(0, 100).union(s(125, 200)), None);
        assert_eq!(s(0, 100).union(invalid()), None);
        assert_eq!(invalid().union(s(0, 100)), None);
    }

    #[test]
    fn test_difference_strict_interior_split() {
        let d = s(0, 100).difference(s(25, 30)).unwrap();
        assert!(d.intersected());
        assert_eq!(d.pieces(), &[s(0, 24), s(31, 100)]);
    }

    #[test]
    fn test_difference_covered_is_empty() {
        let d = s(25, 30).difference(s(0, 100)).unwrap();
        assert!(d.intersected());
        assert!(d.is_empty());

        let d = s(0, 100).difference(s(0, 100)).unwrap();
        assert!(d.intersected());
        assert!(d.is_empty());
    }

    #[test]
    fn test_difference_one_sided_overlap() {
        let d = s(0, 100).difference(s(25, 200)).unwrap();
        assert!(d.intersected());
        assert_eq!(d.pieces(), &[s(0, 24)]);

        let d = s(25, 200).difference(s(0, 100)).unwrap();
        assert!(d.intersected());
        assert_eq!(d.pieces(), &[s(101, 200)]);
    }

    #[test]
    fn test_difference_equal_start_partial() {
        // The source's strict low-end test panicked on this shape.
        let d = s(0, 10).difference(s(0, 5)).unwrap();
        assert!(d.intersected());
        assert_eq!(d.pieces(), &[s(6, 10)]);
    }

    #[test]
    fn test_difference_equal_end_partial() {
        let d = s(0, 10).difference(s(5, 10)).unwrap();
        assert!(d.intersected());
        assert_eq!(d.pieces(), &[s(0, 4)]);
    }

    #[test]
    fn test_difference_disjoint_is_noop() {
        let d = s(0, 100).difference(s(125, 200)).unwrap();
        assert!(!d.intersected());
        assert_eq!(d.pieces(), &[s(0, 100)]);
    }

    #[test]
    fn test_difference_invalid_subtrahend_is_noop() {
        let d = s(0, 100).difference(invalid()).unwrap();
        assert!(!d.intersected());
        assert_eq!(d.pieces(), &[s(0, 100)]);
    }

    #[test]
    fn test_difference_invalid_minuend_is_empty() {
        let d = invalid().difference(s(0, 100)).unwrap();
        assert!(!d.intersected());
        assert!(d.is_empty());
    }

    #[test]
    fn test_difference_dotted_quad() {
        let dq = |t: &str| t.parse::<DottedQuad>().unwrap();
        let a = Span::new(dq("0.0.0.0"), dq("100.0.0.0"));
        let b = Span::new(dq("25.0.0.0"), dq("30.0.0.0"));

        let d = a.difference(b).unwrap();
        assert!(d.intersected());
        assert_eq!(
            d.pieces(),
            &[
                Span::new(dq("0.0.0.0"), dq("24.255.255.255")),
                Span::new(dq("30.0.0.1"), dq("100.0.0.0")),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(s(0, 100).to_string(), "[0, 100]");
        assert_eq!(invalid().to_string(), "[INVALID]");
    }

    #[test]
    fn test_from_range_inclusive() {
        let span: Span<i32> = (3..=9).into();
        assert_eq!(span, s(3, 9));
    }

    #[test]
    fn test_range_bounds() {
        use std::ops::{Bound, RangeBounds};
        let span = s(5, 10);
        assert_eq!(span.start_bound(), Bound::Included(&5));
        assert_eq!(span.end_bound(), Bound::Included(&10));
    }

    /// Pointwise difference law over a small integer domain: a point
    /// survives `r - a` exactly when it is in `r` but not in `a`, and the
    /// intersected flag is set exactly when some point is in both.
    #[test]
    fn test_difference_partition_law_randomized() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..500 {
            let lo = rng.gen_range(0..50);
            let r = s(lo, rng.gen_range(lo..60));
            let lo = rng.gen_range(0..50);
            let a = s(lo, rng.gen_range(lo..60));

            let d = r.difference(a).unwrap();

            let mut any_shared = false;
            for p in -1..62 {
                let expected = r.contains_point(p) && !a.contains_point(p);
                let actual = d.pieces().iter().any(|piece| piece.contains_point(p));
                assert_eq!(actual, expected, "point {} of {} minus {}", p, r, a);
                any_shared |= r.contains_point(p) && a.contains_point(p);
            }
            assert_eq!(d.intersected(), any_shared, "{} minus {}", r, a);

            // Pieces never overlap each other.
            if let [first, second] = d.pieces() {
                assert!(!first.intersects(*second));
            }
        }
    }
}
