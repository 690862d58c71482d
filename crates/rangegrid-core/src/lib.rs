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

//! # Rangegrid Core
//!
//! Foundational primitives for the rangegrid algebra: a capability trait for
//! discretely-steppable ordered values and a closed-interval engine built on
//! top of it. Higher-level crates (notably `rangegrid-planar`) compose these
//! into rectangle decomposition and recombination.
//!
//! ## Modules
//!
//! - `seq`: The [`Sequential`](seq::sequential::Sequential) capability —
//!   successor/predecessor stepping consistent with a total order — with
//!   conformance implementations for all primitive integers (saturating at
//!   the type bounds) and for dotted-quad addresses with byte-wise
//!   carry/borrow.
//! - `span`: A closed interval `[start, end]` over one `Sequential` axis,
//!   with validity, containment, intersection, union (including adjacency
//!   coalescing), and set difference.
//! - `error`: Typed errors — invariant violations escaping an exhaustive
//!   case analysis, and dotted-quad parse failures.
//!
//! ## Purpose
//!
//! Every operation here is a pure function from immutable inputs to new
//! values: no shared state, no interior mutability, no blocking. Concurrent
//! callers may freely share spans across threads.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod seq;
pub mod span;
