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

//! # Sequential Values
//!
//! The ordered-value capability that the whole algebra is generic over.
//!
//! ## Submodules
//!
//! - `sequential`: The [`Sequential`](sequential::Sequential) trait —
//!   successor/predecessor stepping over a strict total order — together
//!   with implementations for every primitive integer type, saturating at
//!   the type's `MIN`/`MAX` bounds.
//! - `quad`: [`DottedQuad`](quad::DottedQuad), a dotted-quad address axis
//!   (`a.b.c.d`) with byte-wise carry/borrow stepping, saturating at
//!   `0.0.0.0` and `255.255.255.255`.
//!
//! ## Motivation
//!
//! Interval and rectangle algebra over discrete domains only needs four
//! facts about a coordinate type: how to compare two values and how to step
//! one value up or down. Capturing exactly that keeps the engines usable
//! over counters, ports, addresses, or any embedder-supplied domain.

pub mod quad;
pub mod sequential;
