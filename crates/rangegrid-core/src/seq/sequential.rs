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

/// A discretely-steppable, totally-ordered value.
///
/// This is the capability every axis of the algebra is generic over:
/// comparison comes from the `Ord` supertrait, stepping from
/// [`next`](Sequential::next) and [`prev`](Sequential::prev).
///
/// # Contract
///
/// Implementations must guarantee that the order is a consistent strict
/// total order and that stepping agrees with it:
///
/// - `x.next()` is the immediate successor of `x`: no value `y` satisfies
///   `x < y && y < x.next()`.
/// - `x.prev()` is the immediate predecessor, symmetrically.
/// - At a domain boundary an implementation may saturate: `next` of the
///   maximal value (and `prev` of the minimal value) returns the value
///   itself. All implementations in this crate saturate.
///
/// Operations in this workspace treat a broken contract as an invariant
/// violation (see [`InvariantViolation`](crate::error::InvariantViolation)),
/// not as undefined behavior.
///
/// # Examples
///
/// ```rust
/// # use rangegrid_core::seq::sequential::Sequential;
///
/// assert_eq!(41i32.next(), 42);
/// assert_eq!(42i32.prev(), 41);
/// assert_eq!(u8::MAX.next(), u8::MAX); // Saturates
/// assert_eq!(u8::MIN.prev(), u8::MIN); // Saturates
/// ```
pub trait Sequential: Copy + Ord {
    /// Returns the immediate successor, saturating at the domain maximum.
    fn next(self) -> Self;

    /// Returns the immediate predecessor, saturating at the domain minimum.
    fn prev(self) -> Self;
}

macro_rules! impl_sequential_int {
    ($t:ty) => {
        impl Sequential for $t {
            #[inline(always)]
            fn next(self) -> Self {
                self.saturating_add(1)
            }

            #[inline(always)]
            fn prev(self) -> Self {
                self.saturating_sub(1)
            }
        }
    };
}

impl_sequential_int!(u8);
impl_sequential_int!(u16);
impl_sequential_int!(u32);
impl_sequential_int!(u64);
impl_sequential_int!(u128);
impl_sequential_int!(usize);

impl_sequential_int!(i8);
impl_sequential_int!(i16);
impl_sequential_int!(i32);
impl_sequential_int!(i64);
impl_sequential_int!(i128);
impl_sequential_int!(isize);
