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

/// The value delimiting one side of an interval.
///
/// `Unbounded` is a state of its own, not a missing value: an unbounded
/// lower endpoint stands for negative infinity and an unbounded upper
/// endpoint for positive infinity.
///
/// # Examples
///
/// ```rust
/// # use intervallum::math::endpoint::Endpoint;
///
/// let lower = Endpoint::Bounded(3);
/// let upper: Endpoint<i32> = Endpoint::Unbounded;
/// assert_eq!(lower.value(), Some(&3));
/// assert!(upper.is_unbounded());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint<T> {
    /// A finite endpoint value.
    Bounded(T),
    /// No endpoint; the interval extends indefinitely on this side.
    Unbounded,
}

impl<T> Endpoint<T> {
    /// Returns `true` if the endpoint carries a value.
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    /// Returns `true` if the endpoint is unbounded.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns a reference to the endpoint value, if bounded.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Bounded(value) => Some(value),
            Self::Unbounded => None,
        }
    }

    /// Consumes the endpoint and returns its value, if bounded.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Bounded(value) => Some(value),
            Self::Unbounded => None,
        }
    }

    /// Converts from `&Endpoint<T>` to `Endpoint<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Endpoint<&T> {
        match self {
            Self::Bounded(value) => Endpoint::Bounded(value),
            Self::Unbounded => Endpoint::Unbounded,
        }
    }

    /// Maps a bounded value with `f`, leaving `Unbounded` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::endpoint::Endpoint;
    ///
    /// assert_eq!(Endpoint::Bounded(2).map(|v| v * 10), Endpoint::Bounded(20));
    /// assert_eq!(Endpoint::<i32>::Unbounded.map(|v| v * 10), Endpoint::Unbounded);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Endpoint<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Bounded(value) => Endpoint::Bounded(f(value)),
            Self::Unbounded => Endpoint::Unbounded,
        }
    }
}

impl<T> From<T> for Endpoint<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Bounded(value)
    }
}
