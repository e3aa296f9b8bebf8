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

//! # Interval Text Form
//!
//! Intervals print in the usual mathematical notation and parse back from it:
//!
//! ```raw
//! [0, 10)      closed-open
//! (-∞, 3]      unbounded below
//! [1.5, ∞)     unbounded above
//! ```
//!
//! The opening character is `[` for a closed lower side and `(` for an open
//! one; the closing character is `]` or `)` likewise. Whitespace around the
//! endpoint texts is ignored when parsing, and `+∞` is accepted for `∞`.
//! The direction is not part of the text form; parsed intervals ascend.

use crate::{
    math::{boundary::BoundarySide, endpoint::Endpoint, interval::Interval},
    num::member::IntervalMember,
};
use std::{fmt::Display, str::FromStr};
use tracing::trace;

const NEGATIVE_INFINITY: &str = "-∞";
const POSITIVE_INFINITY: &str = "∞";
const EXPLICIT_POSITIVE_INFINITY: &str = "+∞";

/// The error returned when text does not describe an interval.
///
/// `E` is the error type of the endpoint parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntervalError<E> {
    /// The input was empty or whitespace only.
    Empty,
    /// The input did not start with `[` or `(`.
    LowerBracket(char),
    /// The input did not end with `]` or `)`.
    UpperBracket(char),
    /// The input ended right after its opening bracket.
    Truncated,
    /// The brackets did not enclose exactly two comma-separated endpoints.
    FieldCount(usize),
    /// An endpoint text could not be parsed as a member value.
    Endpoint(E),
}

impl<E> Display for ParseIntervalError<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Cannot parse an interval from empty text"),
            Self::LowerBracket(c) => write!(f, "Expected '[' or '(' to open the interval, found '{c}'"),
            Self::UpperBracket(c) => write!(f, "Expected ']' or ')' to close the interval, found '{c}'"),
            Self::Truncated => write!(f, "Interval text ended after its opening bracket"),
            Self::FieldCount(n) => write!(f, "Expected 2 comma-separated endpoints, found {n}"),
            Self::Endpoint(e) => write!(f, "Invalid endpoint: {e}"),
        }
    }
}

impl<E> std::error::Error for ParseIntervalError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Endpoint(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> Display for Interval<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = match self.lower_boundary() {
            BoundarySide::Closed => '[',
            BoundarySide::Open => '(',
        };
        let close = match self.upper_boundary() {
            BoundarySide::Closed => ']',
            BoundarySide::Open => ')',
        };

        write!(f, "{open}")?;
        match self.lower() {
            Endpoint::Bounded(value) => write!(f, "{value}")?,
            Endpoint::Unbounded => write!(f, "{NEGATIVE_INFINITY}")?,
        }
        write!(f, ", ")?;
        match self.upper() {
            Endpoint::Bounded(value) => write!(f, "{value}")?,
            Endpoint::Unbounded => write!(f, "{POSITIVE_INFINITY}")?,
        }
        write!(f, "{close}")
    }
}

impl<T> FromStr for Interval<T>
where
    T: IntervalMember + FromStr,
{
    type Err = ParseIntervalError<T::Err>;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let mut chars = text.chars();

        let lower_boundary = match chars.next() {
            None => return Err(ParseIntervalError::Empty),
            Some('[') => BoundarySide::Closed,
            Some('(') => BoundarySide::Open,
            Some(c) => return Err(ParseIntervalError::LowerBracket(c)),
        };
        let upper_boundary = match chars.next_back() {
            None => return Err(ParseIntervalError::Truncated),
            Some(']') => BoundarySide::Closed,
            Some(')') => BoundarySide::Open,
            Some(c) => return Err(ParseIntervalError::UpperBracket(c)),
        };

        let body = chars.as_str();
        let Some((lower, upper)) = body.split_once(',') else {
            return Err(ParseIntervalError::FieldCount(1));
        };
        if upper.contains(',') {
            return Err(ParseIntervalError::FieldCount(body.split(',').count()));
        }

        let lower = match lower.trim() {
            NEGATIVE_INFINITY => Endpoint::Unbounded,
            value => Endpoint::Bounded(value.parse::<T>().map_err(ParseIntervalError::Endpoint)?),
        };
        let upper = match upper.trim() {
            POSITIVE_INFINITY | EXPLICIT_POSITIVE_INFINITY => Endpoint::Unbounded,
            value => Endpoint::Bounded(value.parse::<T>().map_err(ParseIntervalError::Endpoint)?),
        };

        Ok(Interval::new(lower_boundary, lower, upper, upper_boundary))
    }
}

impl<T> Interval<T>
where
    T: IntervalMember + FromStr,
    T::Err: Display,
{
    /// Parses an interval from its text form, returning `None` if the text
    /// is malformed.
    ///
    /// Use `str::parse` instead to learn why the text was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervallum::math::interval::Interval;
    ///
    /// assert_eq!(Interval::<i32>::parse("[0, 10)"), Some(Interval::closed_open(0, 10)));
    /// assert_eq!(Interval::<f64>::parse("(-∞, 2.5]"), Some(Interval::at_most(2.5)));
    /// assert_eq!(Interval::<i32>::parse("[0; 10)"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match text.parse::<Self>() {
            Ok(interval) => Some(interval),
            Err(error) => {
                trace!(input = text, %error, "Rejected interval text");
                None
            }
        }
    }
}
