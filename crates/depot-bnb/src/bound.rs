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

//! The relaxation bound used to prune subtrees.
//!
//! At a node, the variables before `from` are fixed and contribute `base`;
//! the bound relaxes the integrality of the remainder: fill the remaining
//! capacity greedily with the best still-open coefficients, allowing the
//! last variable to be taken fractionally. The result can never
//! underestimate the value of any integral completion, which is exactly the
//! admissibility the pruning rule relies on. Under a pure cardinality
//! constraint every variable consumes one whole slot, so the greedy fill
//! never actually splits a variable and the fractional term vanishes; with
//! weighted slot consumption it would appear as a final partial
//! contribution.

use num_traits::{PrimInt, Signed};

/// Returns an upper bound on the value of any completion of the current
/// node.
///
/// `coefficients` must be sorted in the search order (descending), `from`
/// is the depth of the node, `remaining_capacity` the number of still-open
/// slots, and `base` the value of the fixed prefix.
pub fn relaxation_bound<T>(
    coefficients: &[T],
    from: usize,
    remaining_capacity: usize,
    base: T,
) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(
        from <= coefficients.len(),
        "called `relaxation_bound` with a node depth out of bounds: the depth is {} but the len is {}",
        from,
        coefficients.len()
    );

    let mut bound = base;
    let mut open_slots = remaining_capacity;

    for coefficient in coefficients[from..].iter().copied() {
        if open_slots == 0 || coefficient <= T::zero() {
            break;
        }
        bound = bound + coefficient;
        open_slots -= 1;
    }

    bound
}
