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

//! # Countable Domains
//!
//! A domain is countable when its values can be stepped one at a time, the
//! way integers can. Countable domains can answer adjacency questions: are two
//! values right next to each other, or exactly `n` steps apart?
//!
//! `Countable` provides a generic, linear-time answer built on `successor`.
//! The primitive integers override it with constant-time checks that never
//! overflow, whatever the bit width:
//!
//! - Signed types narrower than `Degrees` (`i8`, `i16`, `i32`) widen both
//!   values and compare the absolute distance.
//! - Signed types at least as wide (`i64`, `isize`, `i128`) subtract with
//!   overflow checking and compare against the degree count converted exactly
//!   into the member type.
//! - Unsigned types add the exactly converted degree count to the smaller
//!   value with overflow checking and compare against the larger value.
//!
//! # Panics
//!
//! Stepping past a domain extreme (`predecessor` of the minimum, `successor`
//! of the maximum) and negative degree counts are programmer errors and panic.

use num_traits::{CheckedAdd, CheckedSub, NumCast, PrimInt, Unsigned};

/// The type used to express a number of steps between two values.
pub type Degrees = i64;

/// A totally ordered domain whose values can be stepped one at a time.
///
/// Implementors provide `predecessor` and `successor`; every other method has
/// a default built on them. `separated_by_degrees` defaults to a walk from
/// the smaller value to the larger, which takes time proportional to the
/// distance. Override it when the domain can answer in constant time.
///
/// # Examples
///
/// ```rust
/// # use intervallum::num::countable::Countable;
///
/// assert_eq!(5_u8.successor(), 6);
/// assert!(u8::MIN.separated_by_degrees(&u8::MAX, 255));
/// assert!(!i8::MIN.separated_by_degrees(&i8::MAX, 0));
/// assert!(3_i32.immediately_precedes(&4));
/// ```
pub trait Countable: PartialOrd + Clone {
    /// Returns the value immediately preceding `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is the domain's minimum.
    fn predecessor(&self) -> Self;

    /// Returns the value immediately succeeding `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is the domain's maximum.
    fn successor(&self) -> Self;

    /// Returns `true` if `self` comes right before `other`.
    #[inline]
    fn immediately_precedes(&self, other: &Self) -> bool {
        self < other && self.separated_by_degrees(other, 1)
    }

    /// Returns `true` if `self` comes right after `other`.
    #[inline]
    fn immediately_succeeds(&self, other: &Self) -> bool {
        other.immediately_precedes(self)
    }

    /// Returns `true` if exactly `degrees` steps separate `self` and `other`.
    ///
    /// The relation is symmetric; the order of the two values does not matter.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is negative.
    /// Returns the number of steps from `self` up to `higher`, when the
    /// domain can tell cheaply and the count fits in a `usize`.
    ///
    /// Returns `None` if `higher` is below `self`. The default makes no
    /// claim; the primitive integers answer exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::num::countable::Countable;
    ///
    /// assert_eq!(i8::MIN.steps_to(&i8::MAX), Some(255));
    /// assert_eq!(5_u32.steps_to(&5), Some(0));
    /// assert_eq!(5_u32.steps_to(&4), None);
    /// ```
    #[inline]
    fn steps_to(&self, _higher: &Self) -> Option<usize> {
        None
    }

    fn separated_by_degrees(&self, other: &Self, degrees: Degrees) -> bool {
        assert_natural(degrees);

        let (mut lower, higher) = if self <= other {
            (self.clone(), other)
        } else {
            (other.clone(), self)
        };
        let mut remaining = degrees;

        loop {
            if lower == *higher {
                return remaining == 0;
            }
            if remaining == 0 {
                return false;
            }
            // `lower < higher` here, so stepping never passes the maximum.
            lower = lower.successor();
            remaining -= 1;
            if lower > *higher {
                return false;
            }
        }
    }
}

/// Returns `true` if `a` and `b` are exactly one step apart.
///
/// # Examples
///
/// ```rust
/// # use intervallum::num::countable::borders;
///
/// assert!(borders(&i64::MAX, &(i64::MAX - 1)));
/// assert!(!borders(&0_u16, &0));
/// ```
#[inline]
pub fn borders<T>(a: &T, b: &T) -> bool
where
    T: Countable,
{
    a.separated_by_degrees(b, 1)
}

/// Returns `true` if `a` and `b` are both right next to a common third value,
/// or are equal.
///
/// # Examples
///
/// ```rust
/// # use intervallum::num::countable::shares_common_neighbor;
///
/// assert!(shares_common_neighbor(&0_i8, &2));
/// assert!(shares_common_neighbor(&7_u32, &7));
/// assert!(!shares_common_neighbor(&0_i8, &1));
/// ```
#[inline]
pub fn shares_common_neighbor<T>(a: &T, b: &T) -> bool
where
    T: Countable,
{
    a == b || a.separated_by_degrees(b, 2)
}

#[inline]
#[track_caller]
fn assert_natural(degrees: Degrees) {
    assert!(
        degrees >= 0,
        "Invalid degrees of separation: expected a natural number, got {degrees}"
    );
}

/// Separation for integers narrower than `Degrees`: the distance always fits
/// once both values are widened.
#[inline]
#[track_caller]
fn widened_separation<T>(a: T, b: T, degrees: Degrees) -> bool
where
    T: PrimInt,
{
    assert_natural(degrees);
    match (a.to_i64(), b.to_i64()) {
        (Some(a), Some(b)) => (a - b).abs() == degrees,
        _ => false,
    }
}

/// Separation for signed integers at least as wide as `Degrees`.
#[inline]
#[track_caller]
fn checked_separation<T>(a: T, b: T, degrees: Degrees) -> bool
where
    T: PrimInt + CheckedSub,
{
    assert_natural(degrees);
    let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
    match (
        higher.checked_sub(&lower),
        <T as NumCast>::from(degrees),
    ) {
        (Some(distance), Some(degrees)) => distance == degrees,
        _ => false,
    }
}

/// Separation for unsigned integers of any width.
#[inline]
#[track_caller]
fn offset_separation<T>(a: T, b: T, degrees: Degrees) -> bool
where
    T: PrimInt + Unsigned + CheckedAdd,
{
    assert_natural(degrees);
    // No spread between two values of `T` can exceed what `T` represents.
    let Some(degrees) = <T as NumCast>::from(degrees) else {
        return false;
    };
    let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
    lower.checked_add(&degrees) == Some(higher)
}

/// Step count for integers narrower than `Degrees`.
#[inline]
fn widened_steps<T>(lower: T, higher: T) -> Option<usize>
where
    T: PrimInt,
{
    usize::try_from(higher.to_i64()? - lower.to_i64()?).ok()
}

/// Step count for integers whose spread may not fit their own type.
#[inline]
fn checked_steps<T>(lower: T, higher: T) -> Option<usize>
where
    T: PrimInt + CheckedSub,
{
    if higher < lower {
        return None;
    }
    higher.checked_sub(&lower)?.to_usize()
}

macro_rules! countable_integer_impl {
    ($separation:ident, $steps:ident; $($t:ty),* $(,)?) => {
        $(
            impl Countable for $t {
                #[inline]
                #[track_caller]
                fn predecessor(&self) -> Self {
                    assert!(
                        *self > <$t>::MIN,
                        concat!("Invalid predecessor: value must be greater than ", stringify!($t), "::MIN")
                    );
                    *self - 1
                }

                #[inline]
                #[track_caller]
                fn successor(&self) -> Self {
                    assert!(
                        *self < <$t>::MAX,
                        concat!("Invalid successor: value must be less than ", stringify!($t), "::MAX")
                    );
                    *self + 1
                }

                #[inline]
                fn steps_to(&self, higher: &Self) -> Option<usize> {
                    $steps(*self, *higher)
                }

                #[inline]
                fn separated_by_degrees(&self, other: &Self, degrees: Degrees) -> bool {
                    $separation(*self, *other, degrees)
                }
            }
        )*
    };
}

countable_integer_impl!(widened_separation, widened_steps; i8, i16, i32);
countable_integer_impl!(checked_separation, checked_steps; i64, isize, i128);
countable_integer_impl!(offset_separation, checked_steps; u8, u16, u32, u64, usize, u128);
