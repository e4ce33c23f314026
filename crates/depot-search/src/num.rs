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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the selection engines. Objective arithmetic is
//! integer arithmetic throughout; engines stay generic over the concrete
//! signed integer type so callers can pick the width that fits their data.
//! This alias collects the required bounds into a single name, simplifying
//! generic signatures across the engine crates.

use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types that can be used by the selection
/// engines: signed primitive integers that can be formatted and moved across
/// threads. These are usually `i16`, `i32`, `i64` and `isize`.
pub trait SolverNumeric:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
