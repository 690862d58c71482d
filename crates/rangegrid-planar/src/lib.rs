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

//! # Rangegrid Planar
//!
//! Axis-aligned rectangle algebra over two independently-typed
//! [`Sequential`](rangegrid_core::seq::sequential::Sequential) axes, built
//! entirely on the 1D span engine from `rangegrid-core`.
//!
//! ## Modules
//!
//! - `rect`: The [`Rect`](rect::Rect) product type `x × y` with validity,
//!   intersection, axis-aligned strip coalescing, and guillotine splitting
//!   along either axis.
//! - `region`: Operations over rectangle collections — the difference
//!   decomposition, canonical ordering, and the seam-removing coalescing
//!   pass that re-merges fragments the decomposition introduced.
//!
//! ## Purpose
//!
//! The heart of the crate is [`Rect::difference`](rect::Rect::difference):
//! subtracting one rectangle from another by cutting along the subtrahend's
//! boundaries, discarding covered fragments, and canonically re-merging the
//! survivors into a minimal practical set of disjoint rectangles.
//!
//! Like the core crate, everything here is pure: inputs are immutable and
//! every operation builds fresh values.

pub mod rect;
pub mod region;
