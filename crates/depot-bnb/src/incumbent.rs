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

//! The best-selection holder of one search run.
//!
//! Each solve owns its search state outright, so the incumbent is a plain
//! value with no synchronization; the cancellation path runs through the
//! monitors instead. Candidates are installed only when strictly better,
//! which keeps the first-found solution for ties and thereby the
//! deterministic tie-break of the search order.

use depot_model::{index::VariableIndex, solution::Selection};
use num_traits::{PrimInt, Signed};

/// Holds the best feasible selection found so far during search.
#[derive(Clone, Debug, Default)]
pub struct Incumbent<T> {
    best: Option<(T, Vec<VariableIndex>)>,
}

impl<T> Incumbent<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new incumbent with no selection installed.
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns the value of the incumbent selection, if any.
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.best.as_ref().map(|(value, _)| *value)
    }

    /// Returns `true` if a selection has been installed.
    #[inline]
    pub fn has_selection(&self) -> bool {
        self.best.is_some()
    }

    /// Attempts to install the given candidate as the new incumbent.
    /// Returns `true` if the candidate was installed. A candidate is
    /// installed when no incumbent exists yet or when it is strictly better.
    #[inline]
    pub fn try_install(&mut self, value: T, variables: &[VariableIndex]) -> bool {
        match &self.best {
            Some((best_value, _)) if value <= *best_value => false,
            _ => {
                self.best = Some((value, variables.to_vec()));
                true
            }
        }
    }

    /// Consumes the incumbent and returns the best selection, if any.
    #[inline]
    pub fn into_selection(self) -> Option<Selection<T>> {
        self.best
            .map(|(value, variables)| Selection::new(variables, value))
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.best {
            Some((value, variables)) => {
                write!(f, "Incumbent(value: {}, len: {})", value, variables.len())
            }
            None => write!(f, "Incumbent(none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    #[test]
    fn test_initial_state() {
        let incumbent = Incumbent::<i64>::new();
        assert!(!incumbent.has_selection());
        assert_eq!(incumbent.value(), None);
        assert!(incumbent.into_selection().is_none());
    }

    #[test]
    fn test_first_candidate_is_always_installed() {
        let mut incumbent = Incumbent::<i64>::new();
        assert!(incumbent.try_install(0, &[]));
        assert_eq!(incumbent.value(), Some(0));
    }

    #[test]
    fn test_strictly_better_candidate_replaces() {
        let mut incumbent = Incumbent::<i64>::new();
        assert!(incumbent.try_install(10, &[vi(0)]));
        assert!(incumbent.try_install(20, &[vi(1)]));
        assert_eq!(incumbent.value(), Some(20));

        let selection = incumbent.into_selection().expect("must hold a selection");
        assert_eq!(selection.variables(), &[vi(1)]);
        assert_eq!(selection.linear_value(), 20);
    }

    #[test]
    fn test_equal_or_worse_candidates_are_rejected() {
        let mut incumbent = Incumbent::<i64>::new();
        assert!(incumbent.try_install(10, &[vi(0)]));
        assert!(!incumbent.try_install(10, &[vi(1)]));
        assert!(!incumbent.try_install(5, &[vi(2)]));

        // The original selection survives ties.
        let selection = incumbent.into_selection().expect("must hold a selection");
        assert_eq!(selection.variables(), &[vi(0)]);
    }
}
