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

//! # Math Primitives
//!
//! The interval value type and the pieces it is built from.
//!
//! ## Submodules
//!
//! - `boundary`: `BoundarySide` (closed/open), its inclusive/exclusive
//!   spelling `Availability`, and the iteration `Direction`.
//! - `endpoint`: `Endpoint<T>`, a bounded value or an unbounded side.
//! - `interval`: `Interval<T>` with its constructors, cardinality
//!   classification (`Empty`, `Degenerate`, `Proper`), relations between
//!   intervals (precedence, overlap, containment), and conversions from the
//!   standard range types. Implements `RangeBounds`.
//! - `members`: iteration over the members of a bounded interval over a
//!   countable domain (`Iterator`, `DoubleEndedIterator`, `FusedIterator`).
//! - `text`: `Display` and `FromStr` in `[lower, upper)` notation.
//!
//! ## Motivation
//!
//! Half-open integer ranges are only one shape of interval. Sorting keys,
//! timestamps and measurements call for closed, open and unbounded sides as
//! well, and for an honest answer to whether `(0, 1)` has any members. That
//! answer depends on the domain: nothing lies strictly between the integers
//! 0 and 1, while uncountably many reals do.

pub mod boundary;
pub mod endpoint;
pub mod interval;
pub mod members;
pub mod text;
