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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use depot_model::{model::Model, solution::Selection};
use num_traits::{PrimInt, Signed};

/// A monitor that observes nothing and never terminates the search. Used
/// when a solve runs without limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOpMonitor<T> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model<T>) {}
    fn on_exit_search(&mut self) {}
    fn on_solution_found(&mut self, _selection: &Selection<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_always_continues() {
        let monitor = NoOpMonitor::<i64>::new();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert_eq!(
            <NoOpMonitor<i64> as SearchMonitor<i64>>::name(&monitor),
            "NoOpMonitor"
        );
    }
}
