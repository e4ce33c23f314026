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

//! Depot-BnB: branch-and-bound over binary selection decisions.
//!
//! Depth-first search over the binary decision tree: each level fixes one
//! more variable to taken or skipped, an incumbent holds the best feasible
//! selection found so far, and a fractional-relaxation bound prunes subtrees
//! that cannot beat it. The greedy engine already proves optimality for the
//! single cardinality bound; this engine is the generalized fallback whose
//! search does not depend on the uniform-matroid structure, at the price of
//! worst-case exponential work. It is therefore the one engine with a real
//! cancellation contract: monitors can stop it at any step cadence and it
//! returns the incumbent tagged as not proven optimal instead of blocking.
//!
//! Module map
//! - `bnb`: the engine and per-run search session.
//! - `bound`: the admissible relaxation bound.
//! - `incumbent`: the best-selection holder.
//! - `stats`: node/prune/depth counters.

pub mod bnb;
pub mod bound;
pub mod incumbent;
pub mod stats;
