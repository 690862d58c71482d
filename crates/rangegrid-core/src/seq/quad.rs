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

use crate::seq::sequential::Sequential;
use std::str::FromStr;

/// A dotted-quad address (`a.b.c.d`) usable as a [`Sequential`] axis.
///
/// Ordering is lexicographic over the four octets, which coincides with the
/// numeric order of the 32-bit address. Stepping performs byte-wise
/// carry/borrow and saturates at the domain boundaries: `next` of
/// `255.255.255.255` and `prev` of `0.0.0.0` return the value itself.
///
/// # Examples
///
/// ```rust
/// # use rangegrid_core::seq::{quad::DottedQuad, sequential::Sequential};
///
/// let q = DottedQuad::new(192, 168, 1, 0);
/// assert_eq!(q.prev(), DottedQuad::new(192, 168, 0, 255));
/// assert_eq!(q.to_string(), "192.168.1.0");
///
/// let q: DottedQuad = "10.1".parse().unwrap(); // Short forms pad with zeros
/// assert_eq!(q, DottedQuad::new(10, 1, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DottedQuad([u8; 4]);

impl DottedQuad {
    /// The minimal address, `0.0.0.0`.
    pub const MIN: Self = Self([0, 0, 0, 0]);

    /// The maximal address, `255.255.255.255`.
    pub const MAX: Self = Self([255, 255, 255, 255]);

    /// Creates a dotted quad from its four octets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangegrid_core::seq::quad::DottedQuad;
    ///
    /// let q = DottedQuad::new(127, 0, 0, 1);
    /// assert_eq!(q.octets(), [127, 0, 0, 1]);
    /// ```
    #[inline]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    /// Returns the four octets, most significant first.
    #[inline]
    pub const fn octets(self) -> [u8; 4] {
        self.0
    }
}

impl Sequential for DottedQuad {
    fn next(self) -> Self {
        if self == Self::MAX {
            return self;
        }

        let mut octets = self.0;
        for o in octets.iter_mut().rev() {
            if *o == u8::MAX {
                *o = 0;
            } else {
                *o += 1;
                break;
            }
        }
        Self(octets)
    }

    fn prev(self) -> Self {
        if self == Self::MIN {
            return self;
        }

        let mut octets = self.0;
        for o in octets.iter_mut().rev() {
            if *o == 0 {
                *o = u8::MAX;
            } else {
                *o -= 1;
                break;
            }
        }
        Self(octets)
    }
}

/// The error type for parsing a [`DottedQuad`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDottedQuadError {
    /// The input had more than four dot-separated parts.
    TooManyOctets,
    /// A part was not a decimal number in `0..=255`.
    InvalidOctet {
        /// The offending part, verbatim.
        token: String,
    },
}

impl std::fmt::Display for ParseDottedQuadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyOctets => write!(f, "Dotted quad has more than four octets"),
            Self::InvalidOctet { token } => {
                write!(f, "Could not parse '{}' as an octet in 0..=255", token)
            }
        }
    }
}

impl std::error::Error for ParseDottedQuadError {}

impl FromStr for DottedQuad {
    type Err = ParseDottedQuadError;

    /// Parses `a.b.c.d`. Fewer than four parts are padded with zero octets,
    /// so `"10.1"` parses as `10.1.0.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 4];
        let mut count = 0;
        for token in s.split('.') {
            if count == 4 {
                return Err(ParseDottedQuadError::TooManyOctets);
            }
            octets[count] = token
                .parse()
                .map_err(|_| ParseDottedQuadError::InvalidOctet {
                    token: token.to_string(),
                })?;
            count += 1;
        }
        Ok(Self(octets))
    }
}

impl From<[u8; 4]> for DottedQuad {
    #[inline]
    fn from(octets: [u8; 4]) -> Self {
        Self(octets)
    }
}

impl From<DottedQuad> for [u8; 4] {
    #[inline]
    fn from(q: DottedQuad) -> Self {
        q.0
    }
}

impl From<std::net::Ipv4Addr> for DottedQuad {
    #[inline]
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<DottedQuad> for std::net::Ipv4Addr {
    #[inline]
    fn from(q: DottedQuad) -> Self {
        std::net::Ipv4Addr::from(q.0)
    }
}

impl std::fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(a: u8, b: u8, c: u8, d: u8) -> DottedQuad {
        DottedQuad::new(a, b, c, d)
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(q(192, 168, 0, 255) < q(192, 168, 1, 0));
        assert!(q(9, 255, 255, 255) < q(10, 0, 0, 0));
        assert_eq!(q(10, 0, 0, 1), q(10, 0, 0, 1));
    }

    #[test]
    fn test_next_simple() {
        assert_eq!(q(10, 0, 0, 1).next(), q(10, 0, 0, 2));
    }

    #[test]
    fn test_next_carries_across_octets() {
        assert_eq!(q(192, 168, 0, 255).next(), q(192, 168, 1, 0));
        assert_eq!(q(192, 168, 255, 255).next(), q(192, 169, 0, 0));
        assert_eq!(q(10, 255, 255, 255).next(), q(11, 0, 0, 0));
    }

    #[test]
    fn test_prev_borrows_across_octets() {
        assert_eq!(q(192, 168, 1, 0).prev(), q(192, 168, 0, 255));
        assert_eq!(q(192, 169, 0, 0).prev(), q(192, 168, 255, 255));
        assert_eq!(q(11, 0, 0, 0).prev(), q(10, 255, 255, 255));
    }

    #[test]
    fn test_boundary_saturation() {
        assert_eq!(DottedQuad::MAX.next(), DottedQuad::MAX);
        assert_eq!(DottedQuad::MIN.prev(), DottedQuad::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(q(192, 168, 1, 0).to_string(), "192.168.1.0");
        assert_eq!(DottedQuad::MIN.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_parse_full() {
        let parsed: DottedQuad = "192.168.1.0".parse().unwrap();
        assert_eq!(parsed, q(192, 168, 1, 0));
    }

    #[test]
    fn test_parse_short_pads_with_zeros() {
        assert_eq!("10".parse::<DottedQuad>().unwrap(), q(10, 0, 0, 0));
        assert_eq!("10.1".parse::<DottedQuad>().unwrap(), q(10, 1, 0, 0));
        assert_eq!("10.1.2".parse::<DottedQuad>().unwrap(), q(10, 1, 2, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1.2.3.4.5".parse::<DottedQuad>(),
            Err(ParseDottedQuadError::TooManyOctets)
        );
        assert_eq!(
            "256.0.0.0".parse::<DottedQuad>(),
            Err(ParseDottedQuadError::InvalidOctet {
                token: "256".to_string()
            })
        );
        assert_eq!(
            "a.b".parse::<DottedQuad>(),
            Err(ParseDottedQuadError::InvalidOctet {
                token: "a".to_string()
            })
        );
    }

    #[test]
    fn test_ipv4addr_conversions() {
        let addr = std::net::Ipv4Addr::new(172, 16, 0, 1);
        let quad = DottedQuad::from(addr);
        assert_eq!(quad, q(172, 16, 0, 1));
        assert_eq!(std::net::Ipv4Addr::from(quad), addr);
    }
}
