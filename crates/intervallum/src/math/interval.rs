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

use crate::{
    math::{
        boundary::{Availability, BoundarySide, Direction},
        endpoint::Endpoint,
        members::Members,
    },
    num::{countable::Countable, member::IntervalMember},
};
use std::{
    hash::{Hash, Hasher},
    ops::{Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

/// How many members an interval has.
///
/// Every interval is exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cardinality {
    /// No members.
    Empty,
    /// Exactly one member.
    Degenerate,
    /// More than one member.
    Proper,
}

impl Cardinality {
    /// Returns `true` for `Cardinality::Empty`.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for `Cardinality::Degenerate`.
    #[inline]
    pub const fn is_degenerate(self) -> bool {
        matches!(self, Self::Degenerate)
    }

    /// Returns `true` for `Cardinality::Proper`.
    #[inline]
    pub const fn is_proper(self) -> bool {
        matches!(self, Self::Proper)
    }

    fn classify<T>(
        lower_boundary: BoundarySide,
        lower: &Endpoint<T>,
        upper: &Endpoint<T>,
        upper_boundary: BoundarySide,
    ) -> Self
    where
        T: IntervalMember,
    {
        // Any unbounded side leaves infinitely many members.
        let (Endpoint::Bounded(lower), Endpoint::Bounded(upper)) = (lower, upper) else {
            return Self::Proper;
        };

        let closed = lower_boundary.is_closed() && upper_boundary.is_closed();
        let open = lower_boundary.is_open() && upper_boundary.is_open();
        let half_open = !closed && !open;

        if lower > upper || (!closed && lower == upper) || (open && lower.borders(upper)) {
            return Self::Empty;
        }

        if (closed && lower == upper)
            || (half_open && lower.borders(upper))
            || (open && lower.shares_common_neighbor(upper))
        {
            Self::Degenerate
        } else {
            Self::Proper
        }
    }
}

/// A contiguous range over an ordered domain.
///
/// Each side is independently closed or open, and each endpoint independently
/// bounded or unbounded. An interval also carries a `Direction` describing the
/// order its members are meant to be visited in; the direction takes no part
/// in equality, hashing, cardinality or any relation between intervals.
///
/// # Equality
///
/// Two intervals are equal when their boundary sides and endpoints are equal,
/// or when both are empty: `[3, 2)` and `(0, 0)` are the same (empty) set.
///
/// # Invariants
///
/// Boundary sides and endpoints never change after construction. The
/// cardinality is therefore computed once, by the constructor, and cached.
///
/// # Examples
///
/// ```rust
/// # use intervallum::math::interval::Interval;
///
/// let iv = Interval::closed_open(0, 10);
/// assert!(iv.contains(&0));
/// assert!(!iv.contains(&10));
/// assert!(iv.is_proper());
///
/// // Over integers nothing lies strictly between 0 and 1.
/// assert!(Interval::open(0, 1).is_empty());
/// // Over reals plenty does.
/// assert!(Interval::open(0.0, 1.0).is_proper());
/// ```
#[derive(Clone, Copy)]
pub struct Interval<T> {
    lower_boundary: BoundarySide,
    lower: Endpoint<T>,
    upper: Endpoint<T>,
    upper_boundary: BoundarySide,
    direction: Direction,
    cardinality: Cardinality,
}

impl<T> Interval<T> {
    /// The interval `(-∞, ∞)`, containing every value of the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::<i32>::UNIVERSAL.contains(&i32::MIN));
    /// assert!(Interval::<f64>::UNIVERSAL.contains(&f64::MAX));
    /// ```
    pub const UNIVERSAL: Self = Self {
        lower_boundary: BoundarySide::Open,
        lower: Endpoint::Unbounded,
        upper: Endpoint::Unbounded,
        upper_boundary: BoundarySide::Open,
        direction: Direction::Ascending,
        cardinality: Cardinality::Proper,
    };

    /// Returns this interval with its direction set to `direction`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::{boundary::Direction, interval::Interval};
    ///
    /// let iv = Interval::closed(1, 3).with_direction(Direction::Descending);
    /// assert!(iv.is_descending());
    /// assert_eq!(iv, Interval::closed(1, 3));
    /// ```
    #[inline]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the lower boundary side.
    #[inline]
    pub const fn lower_boundary(&self) -> BoundarySide {
        self.lower_boundary
    }

    /// Returns the upper boundary side.
    #[inline]
    pub const fn upper_boundary(&self) -> BoundarySide {
        self.upper_boundary
    }

    /// Returns the lower boundary side in the inclusive/exclusive spelling.
    #[inline]
    pub fn lower_availability(&self) -> Availability {
        self.lower_boundary.into()
    }

    /// Returns the upper boundary side in the inclusive/exclusive spelling.
    #[inline]
    pub fn upper_availability(&self) -> Availability {
        self.upper_boundary.into()
    }

    /// Returns the lower endpoint.
    #[inline]
    pub const fn lower(&self) -> &Endpoint<T> {
        &self.lower
    }

    /// Returns the upper endpoint.
    #[inline]
    pub const fn upper(&self) -> &Endpoint<T> {
        &self.upper
    }

    /// Returns the direction the members are meant to be visited in.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the members are meant to be visited upwards.
    #[inline]
    pub const fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    /// Returns `true` if the members are meant to be visited downwards.
    #[inline]
    pub const fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }

    /// Flips the direction in place. Nothing else changes.
    #[inline]
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Returns the interval with its direction flipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// let down = Interval::closed(0, 5).reversed();
    /// assert!(down.is_descending());
    /// assert!(down.reversed().is_ascending());
    /// ```
    #[inline]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Decomposes the interval into its boundary sides and endpoints.
    #[inline]
    pub fn into_parts(self) -> (BoundarySide, Endpoint<T>, Endpoint<T>, BoundarySide) {
        (
            self.lower_boundary,
            self.lower,
            self.upper,
            self.upper_boundary,
        )
    }

    /// Returns `true` if both sides are closed.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.lower_boundary.is_closed() && self.upper_boundary.is_closed()
    }

    /// Returns `true` if both sides are open.
    #[inline]
    pub const fn is_open(&self) -> bool {
        self.lower_boundary.is_open() && self.upper_boundary.is_open()
    }

    /// Returns `true` if exactly one side is closed.
    #[inline]
    pub const fn is_half_open(&self) -> bool {
        !self.is_closed() && !self.is_open()
    }

    /// Returns `true` if the lower side is closed.
    #[inline]
    pub const fn is_lower_closed(&self) -> bool {
        self.lower_boundary.is_closed()
    }

    /// Returns `true` if the upper side is closed.
    #[inline]
    pub const fn is_upper_closed(&self) -> bool {
        self.upper_boundary.is_closed()
    }

    /// Returns `true` if the lower side is open.
    #[inline]
    pub const fn is_lower_open(&self) -> bool {
        self.lower_boundary.is_open()
    }

    /// Returns `true` if the upper side is open.
    #[inline]
    pub const fn is_upper_open(&self) -> bool {
        self.upper_boundary.is_open()
    }

    /// Returns `true` if both endpoints are bounded.
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.lower.is_bounded() && self.upper.is_bounded()
    }

    /// Returns `true` if both endpoints are unbounded.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.lower.is_unbounded() && self.upper.is_unbounded()
    }

    /// Returns `true` if exactly one endpoint is bounded.
    #[inline]
    pub const fn is_half_bounded(&self) -> bool {
        !self.is_bounded() && !self.is_unbounded()
    }

    /// Returns `true` if the lower endpoint is bounded.
    #[inline]
    pub const fn is_lower_bounded(&self) -> bool {
        self.lower.is_bounded()
    }

    /// Returns `true` if the upper endpoint is bounded.
    #[inline]
    pub const fn is_upper_bounded(&self) -> bool {
        self.upper.is_bounded()
    }

    /// Returns `true` if the lower endpoint is unbounded.
    #[inline]
    pub const fn is_lower_unbounded(&self) -> bool {
        self.lower.is_unbounded()
    }

    /// Returns `true` if the upper endpoint is unbounded.
    #[inline]
    pub const fn is_upper_unbounded(&self) -> bool {
        self.upper.is_unbounded()
    }

    /// Returns whether the interval is empty, degenerate or proper.
    #[inline]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Returns `true` if the interval has no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::closed(3, 2).is_empty());
    /// assert!(Interval::closed_open(2, 2).is_empty());
    /// assert!(Interval::open(0, 1).is_empty());
    /// assert!(!Interval::open(0.0, 1.0).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cardinality.is_empty()
    }

    /// Returns `true` if the interval has exactly one member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::closed(4, 4).is_degenerate());
    /// assert!(Interval::closed_open(4, 5).is_degenerate());
    /// assert!(Interval::open(0, 2).is_degenerate());
    /// ```
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.cardinality.is_degenerate()
    }

    /// Returns `true` if the interval has more than one member.
    #[inline]
    pub const fn is_proper(&self) -> bool {
        self.cardinality.is_proper()
    }
}

impl<T> Interval<T>
where
    T: IntervalMember,
{
    /// Creates an interval from explicit boundary sides and endpoints.
    ///
    /// Every combination is accepted, including a closed side on an
    /// unbounded endpoint; the resulting interval is classified accordingly.
    /// The direction is ascending; use `new_with_direction` to pick it up
    /// front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::{boundary::BoundarySide, endpoint::Endpoint, interval::Interval};
    ///
    /// let iv = Interval::new(
    ///     BoundarySide::Closed,
    ///     Endpoint::Bounded(1),
    ///     Endpoint::Unbounded,
    ///     BoundarySide::Open,
    /// );
    /// assert!(iv.is_lower_closed());
    /// assert!(iv.is_half_bounded());
    /// ```
    pub fn new(
        lower_boundary: BoundarySide,
        lower: Endpoint<T>,
        upper: Endpoint<T>,
        upper_boundary: BoundarySide,
    ) -> Self {
        let cardinality = Cardinality::classify(lower_boundary, &lower, &upper, upper_boundary);
        Self {
            lower_boundary,
            lower,
            upper,
            upper_boundary,
            direction: Direction::Ascending,
            cardinality,
        }
    }

    /// Creates an interval from explicit boundary sides, endpoints and a
    /// direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::{boundary::{BoundarySide, Direction}, endpoint::Endpoint, interval::Interval};
    ///
    /// let iv = Interval::new_with_direction(
    ///     BoundarySide::Closed,
    ///     Endpoint::Bounded(1),
    ///     Endpoint::Bounded(3),
    ///     BoundarySide::Closed,
    ///     Direction::Descending,
    /// );
    /// assert!(iv.is_descending());
    /// assert_eq!(iv, Interval::closed(1, 3));
    /// ```
    #[inline]
    pub fn new_with_direction(
        lower_boundary: BoundarySide,
        lower: Endpoint<T>,
        upper: Endpoint<T>,
        upper_boundary: BoundarySide,
        direction: Direction,
    ) -> Self {
        Self::new(lower_boundary, lower, upper, upper_boundary).with_direction(direction)
    }

    /// Creates a bounded interval with an availability per side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::{boundary::Availability, interval::Interval};
    ///
    /// let iv = Interval::bounded(0.0, Availability::Inclusive, 1.0, Availability::Exclusive);
    /// assert!(iv.is_lower_closed());
    /// assert!(iv.is_upper_open());
    /// assert!(iv.is_proper());
    /// ```
    #[inline]
    pub fn bounded(from: T, lower: Availability, to: T, upper: Availability) -> Self {
        Self::new(
            lower.into(),
            Endpoint::Bounded(from),
            Endpoint::Bounded(to),
            upper.into(),
        )
    }

    /// Creates a bounded interval with the same availability on both sides.
    #[inline]
    pub fn between(from: T, to: T, availability: Availability) -> Self {
        Self::bounded(from, availability, to, availability)
    }

    /// Creates the interval from `from` to positive infinity.
    ///
    /// The unbounded side is always open.
    #[inline]
    pub fn lower_bounded_upper_unbounded(from: T, availability: Availability) -> Self {
        Self::new(
            availability.into(),
            Endpoint::Bounded(from),
            Endpoint::Unbounded,
            BoundarySide::Open,
        )
    }

    /// Creates the interval from negative infinity to `to`.
    ///
    /// The unbounded side is always open.
    #[inline]
    pub fn lower_unbounded_upper_bounded(to: T, availability: Availability) -> Self {
        Self::new(
            BoundarySide::Open,
            Endpoint::Unbounded,
            Endpoint::Bounded(to),
            availability.into(),
        )
    }

    /// Creates `[from, to]`.
    #[inline]
    pub fn closed(from: T, to: T) -> Self {
        Self::between(from, to, Availability::Inclusive)
    }

    /// Creates `(from, to)`.
    #[inline]
    pub fn open(from: T, to: T) -> Self {
        Self::between(from, to, Availability::Exclusive)
    }

    /// Creates `[from, to)`.
    #[inline]
    pub fn closed_open(from: T, to: T) -> Self {
        Self::bounded(from, Availability::Inclusive, to, Availability::Exclusive)
    }

    /// Creates `(from, to]`.
    #[inline]
    pub fn open_closed(from: T, to: T) -> Self {
        Self::bounded(from, Availability::Exclusive, to, Availability::Inclusive)
    }

    /// Creates `[from, ∞)`.
    #[inline]
    pub fn at_least(from: T) -> Self {
        Self::lower_bounded_upper_unbounded(from, Availability::Inclusive)
    }

    /// Creates `(from, ∞)`.
    #[inline]
    pub fn greater_than(from: T) -> Self {
        Self::lower_bounded_upper_unbounded(from, Availability::Exclusive)
    }

    /// Creates `(-∞, to]`.
    #[inline]
    pub fn at_most(to: T) -> Self {
        Self::lower_unbounded_upper_bounded(to, Availability::Inclusive)
    }

    /// Creates `(-∞, to)`.
    #[inline]
    pub fn less_than(to: T) -> Self {
        Self::lower_unbounded_upper_bounded(to, Availability::Exclusive)
    }

    /// Returns `true` if every member of `self` lies below every member of
    /// `other`.
    ///
    /// Requires `self` to be upper-bounded and `other` to be lower-bounded;
    /// returns `false` otherwise. Touching endpoints count as preceding unless
    /// both intervals include the shared value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::closed_open(0, 5).fully_precedes(&Interval::closed(5, 9)));
    /// assert!(!Interval::closed(0, 5).fully_precedes(&Interval::closed(5, 9)));
    /// assert!(!Interval::at_least(0).fully_precedes(&Interval::closed(5, 9)));
    /// ```
    pub fn fully_precedes(&self, other: &Self) -> bool {
        let (Endpoint::Bounded(upper), Endpoint::Bounded(lower)) = (&self.upper, &other.lower) else {
            return false;
        };
        if self.is_upper_closed() && other.is_lower_closed() {
            upper < lower
        } else {
            upper <= lower
        }
    }

    /// Returns `true` if every member of `self` lies above every member of
    /// `other`. The mirror image of `fully_precedes`.
    pub fn fully_succeeds(&self, other: &Self) -> bool {
        let (Endpoint::Bounded(lower), Endpoint::Bounded(upper)) = (&self.lower, &other.upper) else {
            return false;
        };
        if other.is_upper_closed() && self.is_lower_closed() {
            upper < lower
        } else {
            upper <= lower
        }
    }

    /// Returns `true` unless one interval fully precedes the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::closed(0, 5).overlaps(&Interval::closed(5, 9)));
    /// assert!(!Interval::closed_open(0, 5).overlaps(&Interval::closed(5, 9)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.fully_precedes(other) || self.fully_succeeds(other))
    }

    /// Returns `true` if `self` is contained in `other`.
    ///
    /// The empty interval is a subinterval of every interval, and only the
    /// empty interval is a subinterval of an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert!(Interval::closed(2, 4).is_subinterval_of(&Interval::closed(0, 9)));
    /// assert!(Interval::open(0, 9).is_subinterval_of(&Interval::closed(0, 9)));
    /// assert!(!Interval::closed(0, 9).is_subinterval_of(&Interval::open(0, 9)));
    /// assert!(Interval::closed(5, 1).is_subinterval_of(&Interval::closed(0, 0)));
    /// ```
    pub fn is_subinterval_of(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }
        self.lower_side_within(other) && self.upper_side_within(other)
    }

    /// Returns `true` if `self` is contained in `other` and differs from it.
    #[inline]
    pub fn is_strict_subinterval_of(&self, other: &Self) -> bool {
        self.is_subinterval_of(other) && self != other
    }

    /// Returns `true` if `other` is contained in `self`.
    #[inline]
    pub fn is_superinterval_of(&self, other: &Self) -> bool {
        other.is_subinterval_of(self)
    }

    /// Returns `true` if `other` is contained in `self` and differs from it.
    #[inline]
    pub fn is_strict_superinterval_of(&self, other: &Self) -> bool {
        other.is_strict_subinterval_of(self)
    }

    /// Returns `true` if `value` is a member of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// let iv = Interval::open_closed(1.0, 2.0);
    /// assert!(!iv.contains(&1.0));
    /// assert!(iv.contains(&1.5));
    /// assert!(iv.contains(&2.0));
    /// assert!(Interval::at_most(2.0).contains(&f64::MIN));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        if self.is_unbounded() {
            return true;
        }

        let above_lower = match &self.lower {
            Endpoint::Bounded(lower) => value > lower || (self.is_lower_closed() && value == lower),
            Endpoint::Unbounded => true,
        };
        let below_upper = match &self.upper {
            Endpoint::Bounded(upper) => value < upper || (self.is_upper_closed() && value == upper),
            Endpoint::Unbounded => true,
        };

        above_lower && below_upper
    }

    fn lower_side_within(&self, other: &Self) -> bool {
        match (&self.lower, &other.lower) {
            (_, Endpoint::Unbounded) => true,
            (Endpoint::Unbounded, Endpoint::Bounded(_)) => false,
            (Endpoint::Bounded(mine), Endpoint::Bounded(theirs)) => {
                if self.is_lower_closed() && other.is_lower_open() {
                    mine > theirs
                } else {
                    mine >= theirs
                }
            }
        }
    }

    fn upper_side_within(&self, other: &Self) -> bool {
        match (&self.upper, &other.upper) {
            (_, Endpoint::Unbounded) => true,
            (Endpoint::Unbounded, Endpoint::Bounded(_)) => false,
            (Endpoint::Bounded(mine), Endpoint::Bounded(theirs)) => {
                if self.is_upper_closed() && other.is_upper_open() {
                    mine < theirs
                } else {
                    mine <= theirs
                }
            }
        }
    }
}

impl<T> Interval<T>
where
    T: IntervalMember + Clone,
{
    /// Returns the interval with both sides open, keeping endpoints and
    /// direction.
    ///
    /// The result is classified from scratch; the interior of an empty
    /// interval is whatever its endpoints make of two open sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(1, 5).interior(), Interval::open(1, 5));
    /// assert!(Interval::closed(1, 2).interior().is_empty());
    /// ```
    pub fn interior(&self) -> Self {
        Self::new(
            BoundarySide::Open,
            self.lower.clone(),
            self.upper.clone(),
            BoundarySide::Open,
        )
        .with_direction(self.direction)
    }

    /// Returns the interval with both sides closed, keeping endpoints and
    /// direction.
    ///
    /// Closedness is structural: the closure of an unbounded interval reports
    /// `is_closed()` even though its unbounded sides admit no endpoint value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open(1, 5).closure(), Interval::closed(1, 5));
    /// assert!(Interval::<i32>::UNIVERSAL.closure().is_closed());
    /// ```
    pub fn closure(&self) -> Self {
        Self::new(
            BoundarySide::Closed,
            self.lower.clone(),
            self.upper.clone(),
            BoundarySide::Closed,
        )
        .with_direction(self.direction)
    }

    /// Replaces unbounded sides with the given positions.
    ///
    /// An unbounded lower side becomes closed at `bounds.start`; an unbounded
    /// upper side becomes open at `bounds.end`. Bounded sides and the
    /// direction are kept. The result is not checked against `bounds`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// let items = [10, 20, 30, 40, 50];
    /// let tail = Interval::at_least(2_usize).relative_to(0..items.len());
    /// assert_eq!(tail, Interval::closed_open(2, 5));
    /// ```
    pub fn relative_to(&self, bounds: Range<T>) -> Self {
        if self.is_bounded() {
            return self.clone();
        }

        let Range { start, end } = bounds;
        let (lower_boundary, lower) = match &self.lower {
            Endpoint::Unbounded => (BoundarySide::Closed, Endpoint::Bounded(start)),
            bounded => (self.lower_boundary, bounded.clone()),
        };
        let (upper, upper_boundary) = match &self.upper {
            Endpoint::Unbounded => (Endpoint::Bounded(end), BoundarySide::Open),
            bounded => (bounded.clone(), self.upper_boundary),
        };

        Self::new(lower_boundary, lower, upper, upper_boundary).with_direction(self.direction)
    }
}

impl<T> Interval<T>
where
    T: IntervalMember + Countable,
{
    /// Returns an iterator over the members of a bounded interval, in the
    /// interval's direction, or `None` if either side is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// let up: Vec<_> = Interval::open_closed(1, 4).members().unwrap().collect();
    /// assert_eq!(up, vec![2, 3, 4]);
    ///
    /// let down: Vec<_> = Interval::closed(1, 3).reversed().members().unwrap().collect();
    /// assert_eq!(down, vec![3, 2, 1]);
    ///
    /// assert!(Interval::at_least(0).members().is_none());
    /// ```
    pub fn members(&self) -> Option<Members<T>> {
        let (Endpoint::Bounded(lower), Endpoint::Bounded(upper)) = (&self.lower, &self.upper) else {
            return None;
        };
        if self.is_empty() {
            return Some(Members::empty(self.direction));
        }

        // A non-empty interval with an open side has `lower < upper`, so
        // stepping inwards stays within the domain.
        let first = if self.is_lower_closed() {
            lower.clone()
        } else {
            lower.successor()
        };
        let last = if self.is_upper_closed() {
            upper.clone()
        } else {
            upper.predecessor()
        };

        // Only reachable when `T` steps more finely than its adjacency
        // reports, e.g. a `Countable` type keeping the dense defaults.
        if first > last {
            return Some(Members::empty(self.direction));
        }

        Some(Members::new(first, last, self.direction))
    }
}

impl<T> PartialEq for Interval<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.lower_boundary == other.lower_boundary
                && self.lower == other.lower
                && self.upper == other.upper
                && self.upper_boundary == other.upper_boundary)
    }
}

impl<T> Eq for Interval<T> where T: Eq {}

impl<T> Hash for Interval<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // All empty intervals are equal, so they must hash alike.
        self.is_empty().hash(state);
        if !self.is_empty() {
            self.lower_boundary.hash(state);
            self.lower.hash(state);
            self.upper.hash(state);
            self.upper_boundary.hash(state);
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower_boundary", &self.lower_boundary)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("upper_boundary", &self.upper_boundary)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        match (&self.lower, self.lower_boundary) {
            (Endpoint::Bounded(value), BoundarySide::Closed) => Bound::Included(value),
            (Endpoint::Bounded(value), BoundarySide::Open) => Bound::Excluded(value),
            (Endpoint::Unbounded, _) => Bound::Unbounded,
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match (&self.upper, self.upper_boundary) {
            (Endpoint::Bounded(value), BoundarySide::Closed) => Bound::Included(value),
            (Endpoint::Bounded(value), BoundarySide::Open) => Bound::Excluded(value),
            (Endpoint::Unbounded, _) => Bound::Unbounded,
        }
    }
}

impl<T> From<Range<T>> for Interval<T>
where
    T: IntervalMember,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
    T: IntervalMember,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<RangeFrom<T>> for Interval<T>
where
    T: IntervalMember,
{
    #[inline]
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T>
where
    T: IntervalMember,
{
    #[inline]
    fn from(range: RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T>
where
    T: IntervalMember,
{
    #[inline]
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Interval<T> {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::UNIVERSAL
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Interval;
    use crate::{
        math::{
            boundary::{BoundarySide, Direction},
            endpoint::Endpoint,
        },
        num::member::IntervalMember,
    };
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct IntervalRef<'a, T> {
        lower_boundary: BoundarySide,
        lower: &'a Endpoint<T>,
        upper: &'a Endpoint<T>,
        upper_boundary: BoundarySide,
        direction: Direction,
    }

    #[derive(Deserialize)]
    struct IntervalOwned<T> {
        lower_boundary: BoundarySide,
        lower: Endpoint<T>,
        upper: Endpoint<T>,
        upper_boundary: BoundarySide,
        #[serde(default)]
        direction: Direction,
    }

    impl<T> Serialize for Interval<T>
    where
        T: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            IntervalRef {
                lower_boundary: self.lower_boundary,
                lower: &self.lower,
                upper: &self.upper,
                upper_boundary: self.upper_boundary,
                direction: self.direction,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Interval<T>
    where
        T: IntervalMember + Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            // The cardinality cache is derived, never trusted from input.
            let raw = IntervalOwned::<T>::deserialize(deserializer)?;
            Ok(Interval::new_with_direction(
                raw.lower_boundary,
                raw.lower,
                raw.upper,
                raw.upper_boundary,
                raw.direction,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    const SIDES: [BoundarySide; 2] = [BoundarySide::Closed, BoundarySide::Open];

    fn endpoints() -> Vec<Endpoint<i64>> {
        [i64::MIN, -1, 0, 1, 2, i64::MAX]
            .into_iter()
            .map(Endpoint::Bounded)
            .chain(std::iter::once(Endpoint::Unbounded))
            .collect()
    }

    /// Every interval over the sample endpoints, in both directions.
    fn all_intervals() -> Vec<Interval<i64>> {
        let mut out = Vec::new();
        for lower in endpoints() {
            for upper in endpoints() {
                for lower_boundary in SIDES {
                    for upper_boundary in SIDES {
                        let iv = Interval::new(lower_boundary, lower, upper, upper_boundary);
                        out.push(iv);
                        out.push(iv.reversed());
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_new_keeps_fields() {
        for lower in endpoints() {
            for upper in endpoints() {
                for lower_boundary in SIDES {
                    for upper_boundary in SIDES {
                        let iv = Interval::new(lower_boundary, lower, upper, upper_boundary);
                        assert_eq!(iv.lower_boundary(), lower_boundary);
                        assert_eq!(iv.upper_boundary(), upper_boundary);
                        assert_eq!(iv.lower_availability(), Availability::from(lower_boundary));
                        assert_eq!(iv.upper_availability(), Availability::from(upper_boundary));
                        assert_eq!(iv.lower(), &lower);
                        assert_eq!(iv.upper(), &upper);
                        assert!(iv.is_ascending());
                    }
                }
            }
        }
    }

    #[test]
    fn test_boundary_predicates() {
        for iv in all_intervals() {
            let lower_closed = iv.lower_boundary() == BoundarySide::Closed;
            let upper_closed = iv.upper_boundary() == BoundarySide::Closed;
            assert_eq!(iv.is_closed(), lower_closed && upper_closed);
            assert_eq!(iv.is_open(), !lower_closed && !upper_closed);
            assert_eq!(iv.is_half_open(), lower_closed != upper_closed);
            assert_eq!(iv.is_lower_closed(), lower_closed);
            assert_eq!(iv.is_upper_closed(), upper_closed);
            assert_eq!(iv.is_lower_open(), !lower_closed);
            assert_eq!(iv.is_upper_open(), !upper_closed);
        }
    }

    #[test]
    fn test_endpoint_predicates() {
        for iv in all_intervals() {
            let lower_bounded = iv.lower().is_bounded();
            let upper_bounded = iv.upper().is_bounded();
            assert_eq!(iv.is_bounded(), lower_bounded && upper_bounded);
            assert_eq!(iv.is_unbounded(), !lower_bounded && !upper_bounded);
            assert_eq!(iv.is_half_bounded(), lower_bounded != upper_bounded);
            assert_eq!(iv.is_lower_bounded(), lower_bounded);
            assert_eq!(iv.is_upper_bounded(), upper_bounded);
            assert_eq!(iv.is_lower_unbounded(), !lower_bounded);
            assert_eq!(iv.is_upper_unbounded(), !upper_bounded);
        }
    }

    #[test]
    fn test_cardinality_partition() {
        for iv in all_intervals() {
            let flags = [iv.is_empty(), iv.is_degenerate(), iv.is_proper()];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{iv:?}");
        }
    }

    #[test]
    fn test_unbounded_intervals_are_proper() {
        for iv in all_intervals().into_iter().filter(|iv| !iv.is_bounded()) {
            assert!(iv.is_proper(), "{iv:?}");
        }
    }

    #[test]
    fn test_cardinality_integers() {
        // Reversed endpoints
        assert!(Interval::closed(3, 2).is_empty());
        // Equal endpoints
        assert!(Interval::closed(2, 2).is_degenerate());
        assert!(Interval::closed_open(2, 2).is_empty());
        assert!(Interval::open_closed(2, 2).is_empty());
        assert!(Interval::open(2, 2).is_empty());
        // Bordering endpoints
        assert!(Interval::closed(0, 1).is_proper());
        assert!(Interval::closed_open(0, 1).is_degenerate());
        assert!(Interval::open_closed(0, 1).is_degenerate());
        assert!(Interval::open(0, 1).is_empty());
        // Endpoints sharing a neighbour
        assert!(Interval::open(0, 2).is_degenerate());
        assert!(Interval::closed_open(0, 2).is_proper());
        assert!(Interval::open(0, 3).is_proper());
    }

    #[test]
    fn test_cardinality_reals() {
        let iv = Interval::bounded(0.0, Availability::Inclusive, 1.0, Availability::Exclusive);
        assert!(iv.is_lower_closed());
        assert!(!iv.is_upper_closed());
        assert!(!iv.is_empty());
        assert!(!iv.is_degenerate());
        assert!(iv.is_proper());

        assert!(Interval::open(0.0, 1.0).is_proper());
        assert!(Interval::open(0.0, 0.0).is_empty());
        assert!(Interval::closed(0.5, 0.5).is_degenerate());
        assert!(Interval::closed(1.0, 0.5).is_empty());
    }

    #[test]
    fn test_cardinality_at_integer_extremes() {
        assert!(Interval::open(i8::MIN, i8::MIN + 1).is_empty());
        assert!(Interval::open(u8::MAX - 2, u8::MAX).is_degenerate());
        assert!(Interval::closed(i64::MIN, i64::MAX).is_proper());
        assert!(Interval::open(u128::MIN, u128::MAX).is_proper());
        assert!(Interval::closed_open(u64::MAX, u64::MAX).is_empty());
    }

    #[test]
    fn test_cardinality_enum() {
        assert_eq!(Interval::open(0, 1).cardinality(), Cardinality::Empty);
        assert_eq!(Interval::open(0, 2).cardinality(), Cardinality::Degenerate);
        assert_eq!(Interval::open(0, 3).cardinality(), Cardinality::Proper);
    }

    #[test]
    fn test_equality_ignores_direction() {
        for iv in all_intervals() {
            assert_eq!(iv, iv.reversed());
            assert_eq!(iv, iv.with_direction(Direction::Ascending));
        }
    }

    #[test]
    fn test_empty_intervals_are_equal() {
        assert_eq!(Interval::closed_open(3, 2), Interval::open(0, 0));
        assert_eq!(Interval::open(0, 1), Interval::closed(9, -9));
        assert_ne!(Interval::open(0, 2), Interval::open(0, 1));

        let empties: Vec<_> = all_intervals().into_iter().filter(|iv| iv.is_empty()).collect();
        assert!(!empties.is_empty());
        for a in &empties {
            for b in &empties {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_non_empty_equality_is_structural() {
        assert_eq!(Interval::closed(1, 3), Interval::closed(1, 3));
        assert_ne!(Interval::closed(1, 3), Interval::closed_open(1, 3));
        // Same members, different description.
        assert_ne!(Interval::closed(1, 3), Interval::open(0, 4));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let set: HashSet<Interval<i32>> = [
            Interval::closed(1, 3),
            Interval::closed(1, 3).reversed(),
            Interval::closed_open(3, 2),
            Interval::open(0, 0),
            Interval::open(5, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_convenience_constructors() {
        let iv = Interval::between(1, 2, Availability::Exclusive);
        assert_eq!(iv, Interval::open(1, 2));

        let iv = Interval::at_least(3);
        assert!(iv.is_lower_closed());
        assert!(iv.is_upper_open());
        assert_eq!(iv.upper(), &Endpoint::Unbounded);

        let iv = Interval::greater_than(3);
        assert!(iv.is_lower_open());
        assert!(iv.is_upper_unbounded());

        let iv = Interval::at_most(3);
        assert!(iv.is_lower_open());
        assert!(iv.is_upper_closed());
        assert!(iv.is_lower_unbounded());

        let iv = Interval::less_than(3);
        assert!(iv.is_upper_open());
        assert!(iv.is_lower_unbounded());
    }

    #[test]
    fn test_universal() {
        let iv = Interval::<i32>::UNIVERSAL;
        assert!(iv.is_unbounded());
        assert!(iv.is_open());
        assert!(!iv.is_closed());
        assert!(iv.is_proper());
        assert!(iv.contains(&i32::MIN));
        assert!(iv.contains(&0));
        assert!(iv.contains(&i32::MAX));
        assert!(Interval::<f64>::UNIVERSAL.contains(&f64::NEG_INFINITY));
        assert!(Interval::<&str>::UNIVERSAL.contains(&""));
    }

    #[test]
    fn test_closed_universal_is_closed_and_proper() {
        let closure = Interval::<i32>::UNIVERSAL.closure();
        assert!(closure.is_closed());
        assert!(closure.is_unbounded());
        assert!(closure.is_proper());
        assert!(closure.contains(&42));
        assert_ne!(closure, Interval::UNIVERSAL);
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Interval::from(1..5), Interval::closed_open(1, 5));
        assert_eq!(Interval::from(1..=5), Interval::closed(1, 5));
        assert_eq!(Interval::from(1..), Interval::at_least(1));
        assert_eq!(Interval::from(..5), Interval::less_than(5));
        assert_eq!(Interval::from(..=5), Interval::at_most(5));
        assert_eq!(Interval::<i32>::from(..), Interval::UNIVERSAL);
    }

    #[test]
    fn test_range_bounds() {
        let iv = Interval::open_closed(2, 5);
        assert_eq!(iv.start_bound(), Bound::Excluded(&2));
        assert_eq!(iv.end_bound(), Bound::Included(&5));

        let iv = Interval::less_than(5);
        assert_eq!(iv.start_bound(), Bound::Unbounded);
        assert_eq!(iv.end_bound(), Bound::Excluded(&5));

        let map: BTreeMap<i32, char> = (0..10).zip('a'..).collect();
        let picked: String = map.range(Interval::open_closed(2, 5)).map(|(_, c)| *c).collect();
        assert_eq!(picked, "def");
    }

    #[test]
    fn test_interior_and_closure() {
        let iv = Interval::closed_open(1, 5).reversed();
        let interior = iv.interior();
        assert!(interior.is_open());
        assert_eq!(interior.lower(), iv.lower());
        assert_eq!(interior.upper(), iv.upper());
        assert!(interior.is_descending());

        let closure = iv.closure();
        assert!(closure.is_closed());
        assert!(closure.is_descending());
    }

    #[test]
    fn test_interior_of_empty_is_classified_mechanically() {
        // `[2, 1]` is empty and its interior is empty too.
        assert!(Interval::closed(2, 1).interior().is_empty());
        // `(1, 2]` is degenerate; its interior `(1, 2)` is empty.
        assert!(Interval::open_closed(1, 2).interior().is_empty());
        // `[1, 1)` is empty, yet its closure `[1, 1]` is degenerate.
        assert!(Interval::closed_open(1, 1).closure().is_degenerate());
    }

    #[test]
    fn test_reverse_in_place() {
        let mut iv = Interval::closed(0, 9);
        let before = iv;
        iv.reverse();
        assert!(iv.is_descending());
        assert_eq!(iv, before);
        assert_eq!(iv.cardinality(), before.cardinality());
        iv.reverse();
        assert!(iv.is_ascending());
    }

    #[test]
    fn test_fully_precedes() {
        let a = Interval::closed(0, 5);
        // Shared value included on both sides
        assert!(!a.fully_precedes(&Interval::closed(5, 9)));
        // Shared value excluded on at least one side
        assert!(a.fully_precedes(&Interval::open_closed(5, 9)));
        assert!(Interval::closed_open(0, 5).fully_precedes(&Interval::closed(5, 9)));
        // Gap
        assert!(a.fully_precedes(&Interval::closed(6, 9)));
        // Overlap
        assert!(!a.fully_precedes(&Interval::closed(4, 9)));
        // Unbounded sides
        assert!(!Interval::at_least(0).fully_precedes(&Interval::closed(6, 9)));
        assert!(!a.fully_precedes(&Interval::at_most(9)));
        assert!(a.fully_precedes(&Interval::greater_than(5)));
    }

    #[test]
    fn test_fully_succeeds_mirrors_fully_precedes() {
        let all = all_intervals();
        for a in &all {
            for b in all.iter().step_by(7) {
                assert_eq!(a.fully_succeeds(b), b.fully_precedes(a));
            }
        }
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::closed(0, 5);
        assert!(a.overlaps(&Interval::closed(5, 9)));
        assert!(a.overlaps(&Interval::closed(-3, 0)));
        assert!(a.overlaps(&Interval::closed(1, 2)));
        assert!(!a.overlaps(&Interval::open(5, 9)));
        assert!(!a.overlaps(&Interval::closed(-9, -1)));
        assert!(a.overlaps(&Interval::UNIVERSAL));
        assert!(Interval::at_most(0).overlaps(&Interval::at_least(0)));
        assert!(!Interval::less_than(0).overlaps(&Interval::at_least(0)));
    }

    #[test]
    fn test_subinterval() {
        let outer = Interval::closed(0, 10);
        assert!(Interval::closed(2, 8).is_subinterval_of(&outer));
        assert!(outer.is_subinterval_of(&outer));
        assert!(!Interval::closed(-1, 8).is_subinterval_of(&outer));
        assert!(!Interval::closed(2, 11).is_subinterval_of(&outer));

        // Closedness tie-breaks
        let open = Interval::open(0, 10);
        assert!(open.is_subinterval_of(&outer));
        assert!(!outer.is_subinterval_of(&open));
        assert!(Interval::open_closed(0, 10).is_subinterval_of(&outer));
        assert!(!Interval::closed_open(0, 10).is_subinterval_of(&Interval::open_closed(0, 10)));

        // Unbounded sides
        assert!(outer.is_subinterval_of(&Interval::at_least(0)));
        assert!(!Interval::at_least(0).is_subinterval_of(&outer));
        assert!(Interval::at_most(3).is_subinterval_of(&Interval::UNIVERSAL));
        assert!(!Interval::UNIVERSAL.is_subinterval_of(&Interval::at_most(3)));
    }

    #[test]
    fn test_subinterval_with_empty_intervals() {
        let empty = Interval::open(0, 1);
        assert!(empty.is_subinterval_of(&Interval::closed(100, 200)));
        assert!(empty.is_subinterval_of(&Interval::closed(5, 1)));
        assert!(!Interval::closed(0, 0).is_subinterval_of(&empty));
        assert!(!Interval::UNIVERSAL.is_subinterval_of(&empty));
        assert!(!empty.is_strict_subinterval_of(&Interval::closed(9, 2)));
        assert!(empty.is_strict_subinterval_of(&Interval::closed(0, 0)));
    }

    #[test]
    fn test_strict_and_super() {
        let inner = Interval::closed(2, 4);
        let outer = Interval::closed(0, 9);
        assert!(inner.is_strict_subinterval_of(&outer));
        assert!(!outer.is_strict_subinterval_of(&outer));
        assert!(outer.is_superinterval_of(&inner));
        assert!(outer.is_superinterval_of(&outer));
        assert!(outer.is_strict_superinterval_of(&inner));
        assert!(!outer.is_strict_superinterval_of(&outer.reversed()));
    }

    #[test]
    fn test_subinterval_is_reflexive_and_transitive() {
        let sample: Vec<_> = all_intervals().into_iter().step_by(3).collect();
        for a in &sample {
            assert!(a.is_subinterval_of(a), "{a:?}");
        }
        for a in &sample {
            for b in sample.iter().filter(|b| a.is_subinterval_of(b)) {
                for c in sample.iter().filter(|c| b.is_subinterval_of(c)) {
                    assert!(a.is_subinterval_of(c), "{a:?} ⊆ {b:?} ⊆ {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_contains() {
        let iv = Interval::closed_open(0, 10);
        assert!(iv.contains(&0));
        assert!(iv.contains(&9));
        assert!(!iv.contains(&10));
        assert!(!iv.contains(&-1));

        let iv = Interval::greater_than(0);
        assert!(!iv.contains(&0));
        assert!(iv.contains(&i32::MAX));

        let iv = Interval::at_most("m");
        assert!(iv.contains(&"apple"));
        assert!(iv.contains(&"m"));
        assert!(!iv.contains(&"zebra"));

        assert!(!Interval::open(0, 1).contains(&0));
    }

    #[test]
    fn test_relative_to() {
        // Bounded intervals pass through.
        let iv = Interval::open(1_usize, 3);
        assert_eq!(iv.relative_to(0..10), iv);

        let iv = Interval::greater_than(2_usize).reversed().relative_to(0..10);
        assert_eq!(iv, Interval::open(2, 10));
        assert!(iv.is_descending());

        let iv = Interval::at_most(4_usize).relative_to(0..10);
        assert_eq!(iv, Interval::closed(0, 4));

        let iv = Interval::<usize>::UNIVERSAL.relative_to(3..7);
        assert_eq!(iv, Interval::closed_open(3, 7));

        // Not validated against the bounds.
        let iv = Interval::at_least(20_usize).relative_to(0..10);
        assert_eq!(iv, Interval::closed_open(20, 10));
        assert!(iv.is_empty());
    }

    #[test]
    fn test_members() {
        let collect = |iv: Interval<i32>| iv.members().map(|m| m.collect::<Vec<_>>());
        assert_eq!(collect(Interval::closed(1, 4)), Some(vec![1, 2, 3, 4]));
        assert_eq!(collect(Interval::open(1, 4)), Some(vec![2, 3]));
        assert_eq!(collect(Interval::open(0, 2)), Some(vec![1]));
        assert_eq!(collect(Interval::open(0, 1)), Some(vec![]));
        assert_eq!(collect(Interval::closed(4, 1)), Some(vec![]));
        assert_eq!(collect(Interval::closed_open(1, 4).reversed()), Some(vec![3, 2, 1]));
        assert_eq!(collect(Interval::at_least(1)), None);
        assert_eq!(collect(Interval::UNIVERSAL), None);
    }

    #[test]
    fn test_members_at_domain_extremes() {
        let top: Vec<u8> = Interval::open(u8::MAX - 3, u8::MAX).members().unwrap().collect();
        assert_eq!(top, vec![253, 254]);

        let all: Vec<i8> = Interval::closed(i8::MIN, i8::MAX).members().unwrap().collect();
        assert_eq!(all.len(), 256);

        let none: Vec<u8> = Interval::open_closed(u8::MAX, u8::MAX).members().unwrap().collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_members_agree_with_contains() {
        for iv in all_intervals() {
            let (Endpoint::Bounded(lower), Endpoint::Bounded(upper)) = (*iv.lower(), *iv.upper()) else {
                continue;
            };
            // Keep the walk short.
            if lower < -2 || upper > 3 {
                continue;
            }
            let members: Vec<_> = iv.members().unwrap().collect();
            let mut expected: Vec<_> = (-2..=3).filter(|v| iv.contains(v)).collect();
            if iv.is_descending() {
                expected.reverse();
            }
            assert_eq!(members, expected, "{iv:?}");
        }
    }

    #[test]
    fn test_debug_omits_cache() {
        let iv = Interval::closed(1, 2);
        assert_eq!(
            format!("{iv:?}"),
            "Interval { lower_boundary: Closed, lower: Bounded(1), upper: Bounded(2), upper_boundary: Closed, direction: Ascending }"
        );
    }

    #[test]
    fn test_into_parts() {
        let (lb, lower, upper, ub) = Interval::open_closed(1, 2).into_parts();
        assert_eq!(lb, BoundarySide::Open);
        assert_eq!(lower, Endpoint::Bounded(1));
        assert_eq!(upper, Endpoint::Bounded(2));
        assert_eq!(ub, BoundarySide::Closed);
    }

    /// Steps like an integer but keeps the dense adjacency defaults.
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    struct Step(u8);

    impl Countable for Step {
        fn predecessor(&self) -> Self {
            Step(self.0.predecessor())
        }

        fn successor(&self) -> Self {
            Step(self.0.successor())
        }
    }

    impl IntervalMember for Step {}

    #[test]
    fn test_members_with_dense_adjacency_yield_only_contained_values() {
        let iv = Interval::open(Step(0), Step(1));
        assert!(iv.is_proper());
        assert_eq!(iv.members().unwrap().count(), 0);
        assert_eq!(iv.reversed().members().unwrap().next_back(), None);

        let iv = Interval::open(Step(0), Step(2));
        let members: Vec<_> = iv.members().unwrap().collect();
        assert_eq!(members, vec![Step(1)]);
        assert!(members.iter().all(|m| iv.contains(m)));
    }

    #[test]
    fn test_new_with_direction() {
        let iv = Interval::new_with_direction(
            BoundarySide::Open,
            Endpoint::Bounded(0),
            Endpoint::Bounded(2),
            BoundarySide::Open,
            Direction::Descending,
        );
        assert!(iv.is_descending());
        assert!(iv.is_degenerate());
        assert_eq!(iv, Interval::open(0, 2));
        assert_eq!(iv.members().unwrap().collect::<Vec<_>>(), vec![1]);
    }
}
