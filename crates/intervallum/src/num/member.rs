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

//! # Interval Members
//!
//! `IntervalMember` is the capability every interval member type provides:
//! an order, plus the two proximity questions interval cardinality depends
//! on.
//!
//! The provided methods describe an uncountable (dense) domain, where no two
//! distinct values are ever adjacent. This is the right answer for floats,
//! strings, and time stamps, so those types implement the trait with an
//! empty `impl` block. Countable domains override both methods and delegate to
//! [`Countable`](crate::num::countable::Countable):
//!
//! ```rust
//! use intervallum::num::countable::{self, Countable};
//! use intervallum::num::member::IntervalMember;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct Floor(u8);
//!
//! impl Countable for Floor {
//!     fn predecessor(&self) -> Self {
//!         Floor(self.0.predecessor())
//!     }
//!
//!     fn successor(&self) -> Self {
//!         Floor(self.0.successor())
//!     }
//! }
//!
//! impl IntervalMember for Floor {
//!     fn borders(&self, other: &Self) -> bool {
//!         countable::borders(self, other)
//!     }
//!
//!     fn shares_common_neighbor(&self, other: &Self) -> bool {
//!         countable::shares_common_neighbor(self, other)
//!     }
//! }
//!
//! assert!(Floor(3).borders(&Floor(4)));
//! assert!(!1.5_f64.borders(&1.5000001));
//! ```

use crate::num::countable;
use std::time::{Duration, Instant, SystemTime};

/// A type that can be a member of an `Interval`.
///
/// # Notes
///
/// Interval logic assumes the order is total over the values actually used
/// as endpoints. `f32` and `f64` implement this trait, but NaN endpoints are
/// outside that contract: `[NaN, NaN]` classifies as proper yet contains
/// nothing.
pub trait IntervalMember: PartialOrd {
    /// Returns `true` if `self` and `other` are right next to each other.
    ///
    /// Always `false` for uncountable domains.
    #[inline]
    fn borders(&self, _other: &Self) -> bool {
        false
    }

    /// Returns `true` if `self` and `other` are both right next to a common
    /// third value. Equal values always share their neighbours.
    ///
    /// Equivalent to equality for uncountable domains.
    #[inline]
    fn shares_common_neighbor(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! countable_member_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntervalMember for $t {
                #[inline]
                fn borders(&self, other: &Self) -> bool {
                    countable::borders(self, other)
                }

                #[inline]
                fn shares_common_neighbor(&self, other: &Self) -> bool {
                    countable::shares_common_neighbor(self, other)
                }
            }
        )*
    };
}

macro_rules! uncountable_member_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntervalMember for $t {}
        )*
    };
}

countable_member_impl!(i8, i16, i32, i64, isize, i128, u8, u16, u32, u64, usize, u128);
// Floats are dense only for non-NaN values; see the trait notes.
uncountable_member_impl!(f32, f64);
uncountable_member_impl!(char, String, Duration, Instant, SystemTime);

impl IntervalMember for &str {}
