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

//! # Intervallum
//!
//! A generic interval value type over any ordered domain.
//!
//! An `Interval<T>` has a lower and an upper side, each independently closed
//! or open and bounded or unbounded. Intervals know their cardinality:
//! whether they are empty, contain exactly one value, or contain more. For
//! countable domains such as the integers this takes adjacency into account,
//! so `(0, 2)` holds only `1` and `(0, 1)` holds nothing, while the same
//! intervals over `f64` are proper.
//!
//! ## Modules
//!
//! - `math`: Boundary sides, endpoints, the `Interval<T>` type itself,
//!   member iteration and the `[lower, upper)` text form.
//! - `num`: The capability traits member types provide: `IntervalMember`
//!   (order plus adjacency, implemented for the primitive numbers, `char`,
//!   strings and time types) and `Countable` (stepping one value at a time,
//!   with overflow-safe constant-time implementations for every primitive
//!   integer).
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for every public value type.
//!
//! ## Example
//!
//! ```rust
//! use intervallum::math::interval::Interval;
//!
//! let window = Interval::closed_open(10, 20);
//! assert!(window.contains(&10));
//! assert!(window.overlaps(&Interval::at_least(19)));
//! assert!(!window.overlaps(&Interval::at_least(20)));
//!
//! let mut values: Vec<i32> = (0..30).collect();
//! let drained: Vec<_> = values.drain(Interval::closed_open(10_usize, 20)).collect();
//! assert_eq!(drained, (10..20).collect::<Vec<_>>());
//! ```

pub mod math;
pub mod num;
