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

use crate::{math::boundary::Direction, num::countable::Countable};
use std::iter::FusedIterator;

/// An iterator over the members of a bounded interval over a countable domain.
///
/// Yields the members in the interval's direction. Reversing the iterator with
/// `rev()` visits them the other way round.
///
/// The iterator never steps past its final member, so intervals touching the
/// extremes of a domain (for example `[u8::MIN, u8::MAX]`) iterate without
/// overflow.
pub struct Members<T> {
    remaining: Option<(T, T)>,
    direction: Direction,
}

impl<T> Members<T>
where
    T: Countable,
{
    /// `first <= last` must hold.
    #[inline]
    pub(crate) fn new(first: T, last: T, direction: Direction) -> Self {
        debug_assert!(first <= last, "Invalid member range: first must not exceed last");
        Self {
            remaining: Some((first, last)),
            direction,
        }
    }

    #[inline]
    pub(crate) fn empty(direction: Direction) -> Self {
        Self {
            remaining: None,
            direction,
        }
    }

    /// Returns the direction members are yielded in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn pop_low(&mut self) -> Option<T> {
        let (low, high) = self.remaining.take()?;
        if low < high {
            self.remaining = Some((low.successor(), high));
        }
        Some(low)
    }

    fn pop_high(&mut self) -> Option<T> {
        let (low, high) = self.remaining.take()?;
        if low < high {
            self.remaining = Some((low, high.predecessor()));
        }
        Some(high)
    }
}

impl<T> Iterator for Members<T>
where
    T: Countable,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Ascending => self.pop_low(),
            Direction::Descending => self.pop_high(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((low, high)) = &self.remaining else {
            return (0, Some(0));
        };
        // Exact when the domain can count its steps, open-ended otherwise.
        match low.steps_to(high).and_then(|steps| steps.checked_add(1)) {
            Some(len) => (len, Some(len)),
            None => (1, None),
        }
    }
}

impl<T> DoubleEndedIterator for Members<T>
where
    T: Countable,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Ascending => self.pop_high(),
            Direction::Descending => self.pop_low(),
        }
    }
}

impl<T> FusedIterator for Members<T> where T: Countable {}

impl<T> std::fmt::Debug for Members<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Members")
            .field("remaining", &self.remaining)
            .field("direction", &self.direction)
            .finish()
    }
}
