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

//! Typed errors for the rangegrid core.
//!
//! The algebra itself never fails on degenerate inputs; absence of a result
//! is expressed through invalid spans and `Option` slots. The one abnormal
//! condition is an operation escaping a case analysis that is exhaustive for
//! every law-abiding `Sequential` implementation. That is reported as an
//! [`InvariantViolation`] value instead of aborting the process, so the
//! library stays embeddable in test harnesses and long-running hosts.

/// An operation's exhaustive case analysis was escaped.
///
/// This can only happen when a [`Sequential`](crate::seq::sequential::Sequential)
/// implementation breaks its contract, e.g. an `Ord` under which two values
/// are neither ordered nor equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The operation whose analysis was escaped (e.g. `"Span::difference"`).
    pub operation: &'static str,
    /// Debug rendering of the offending operands.
    pub detail: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation report.
    #[inline]
    pub fn new(operation: &'static str, detail: String) -> Self {
        Self { operation, detail }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invariant violation in {}: {}",
            self.operation, self.detail
        )
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = InvariantViolation::new("Span::difference", "[1, 0] minus [0, 5]".to_string());
        assert_eq!(
            format!("{}", e),
            "Invariant violation in Span::difference: [1, 0] minus [0, 5]"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let e = InvariantViolation::new("op", String::new());
        let _: &dyn std::error::Error = &e;
    }
}
