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

//! # Member Capabilities
//!
//! Traits describing what an interval needs from the type of its members.
//!
//! ## Submodules
//!
//! - `countable`: The `Countable` trait for domains that can be stepped one
//!   value at a time, with a generic linear-time separation test and
//!   overflow-safe constant-time overrides for every primitive integer.
//! - `member`: The `IntervalMember` trait consumed by `Interval`, answering
//!   whether two values border each other or share a common neighbour.
//!   Uncountable domains (floats, strings, time stamps) use its defaults;
//!   countable domains delegate to `Countable`.
//!
//! ## Motivation
//!
//! Whether `(0, 1)` is empty depends on the domain: over integers nothing lies
//! between 0 and 1, over reals infinitely many values do. Keeping that
//! knowledge in the member type lets a single `Interval` classify both
//! correctly.

pub mod countable;
pub mod member;
