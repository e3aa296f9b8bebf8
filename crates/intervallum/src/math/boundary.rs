// Copyright (c) 2025 Felix Kahle.
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

//! # Interval Boundaries
//!
//! Boundary markers shared by every interval regardless of its member type.
//!
//! A side of an interval is either *closed* (the endpoint value belongs to the
//! interval) or *open* (it does not). The same fact is often spelled
//! *inclusive*/*exclusive*; `BoundarySide` and `Availability` are the two
//! spellings, and the `From` conversions between them are mutual inverses.
//!
//! `Direction` is iteration metadata carried by an interval. It never takes
//! part in equality, cardinality, or any relation between intervals.

/// A boundary side, either closed or open.
///
/// # Examples
///
/// ```rust
/// # use intervallum::math::boundary::{Availability, BoundarySide};
///
/// let side = BoundarySide::from(Availability::Inclusive);
/// assert_eq!(side, BoundarySide::Closed);
/// assert_eq!(Availability::from(side), Availability::Inclusive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundarySide {
    /// The endpoint value is a member of the interval.
    Closed,
    /// The endpoint value is not a member of the interval.
    Open,
}

impl BoundarySide {
    /// Returns `true` if the side is closed.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` if the side is open.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the opposite side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::boundary::BoundarySide;
    ///
    /// assert_eq!(BoundarySide::Closed.flipped(), BoundarySide::Open);
    /// assert_eq!(BoundarySide::Open.flipped(), BoundarySide::Closed);
    /// ```
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

impl From<Availability> for BoundarySide {
    #[inline]
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Inclusive => Self::Closed,
            Availability::Exclusive => Self::Open,
        }
    }
}

impl std::fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// A boundary side in the inclusive/exclusive spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Availability {
    /// The endpoint value is included in the interval.
    Inclusive,
    /// The endpoint value is excluded from the interval.
    Exclusive,
}

impl Availability {
    /// Returns `true` if the endpoint value is included.
    #[inline]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::Inclusive)
    }

    /// Returns `true` if the endpoint value is excluded.
    #[inline]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Exclusive)
    }
}

impl From<BoundarySide> for Availability {
    #[inline]
    fn from(side: BoundarySide) -> Self {
        match side {
            BoundarySide::Closed => Self::Inclusive,
            BoundarySide::Open => Self::Exclusive,
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inclusive => write!(f, "inclusive"),
            Self::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// The order in which the members of an interval are meant to be visited.
///
/// # Examples
///
/// ```rust
/// # use intervallum::math::boundary::Direction;
///
/// assert_eq!(Direction::default(), Direction::Ascending);
/// assert_eq!(Direction::Ascending.reversed(), Direction::Descending);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From the lower endpoint towards the upper endpoint.
    #[default]
    Ascending,
    /// From the upper endpoint towards the lower endpoint.
    Descending,
}

impl Direction {
    /// Returns `true` for `Direction::Ascending`.
    #[inline]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Returns `true` for `Direction::Descending`.
    #[inline]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Returns the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
