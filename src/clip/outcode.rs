//! Cohen-Sutherland region codes.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::geometry::{ClipWindow, Point};

/// Four-bit code marking which sides of a clip window a point lies beyond.
///
/// ```text
///        |        |
///  1001  |  1000  | 1010
///        |        |
/// -------+--------+-------- max.y
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- min.y
///        |        |
///  0101  |  0100  | 0110
///        |        |
///      min.x    max.x
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    /// Inside the window.
    pub const INSIDE: Self = Self(0b0000);
    /// Left of `min.x`.
    pub const LEFT: Self = Self(0b0001);
    /// Right of `max.x`.
    pub const RIGHT: Self = Self(0b0010);
    /// Below `min.y`.
    pub const BOTTOM: Self = Self(0b0100);
    /// Above `max.y`.
    pub const TOP: Self = Self(0b1000);

    /// Compute the outcode of `point` relative to `window`.
    #[must_use]
    pub fn of(point: Point, window: &ClipWindow) -> Self {
        let (min, max) = (window.min(), window.max());
        let mut code = Self::INSIDE;

        if point.x < min.x {
            code = code | Self::LEFT;
        } else if point.x > max.x {
            code = code | Self::RIGHT;
        }

        if point.y < min.y {
            code = code | Self::BOTTOM;
        } else if point.y > max.y {
            code = code | Self::TOP;
        }

        code
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no bit is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether `self` and `other` share a set bit, i.e. both points lie
    /// beyond the same window edge.
    #[must_use]
    pub const fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Outcode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcode({:04b})", self.0)
    }
}
