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

//! # Depot Search
//!
//! Shared infrastructure for the selection engines: the capability interface
//! every engine implements, the monitors that observe and bound a running
//! search, and the result vocabulary carried back to the caller.
//!
//! Module map
//! - `engine`: the `SelectionEngine` capability trait and its run context.
//! - `monitor`: search monitors (time limit, external interrupt, composite,
//!   no-op) and the command protocol engines poll during search.
//! - `result`: results with termination reasons, from raw engine output to
//!   the final projected outcome.
//! - `stats`: lightweight per-solve statistics.
//! - `num`: the unified numeric bounds used across engines.

pub mod engine;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
