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

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on the
//! search. Reading the clock at every node would dominate the inner loop, so
//! elapsed time is only checked when the step counter passes a bitmask
//! filter; once the configured `Duration` has been exceeded at a check
//! point, the monitor requests termination and the engine returns its best
//! incumbent as a not-proven-optimal result.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use depot_model::{model::Model, solution::Selection};
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    clock_check_mask: u64,
    steps: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// Default mask: check every 1,024 steps (2^10).
    /// 1024 - 1 = 1023 = 0x3FF
    const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_STEP_CLOCK_CHECK_MASK,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: std::time::Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model<T>) {
        self.start_time = std::time::Instant::now();
        self.steps = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _selection: &Selection<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.start_time.elapsed() >= self.time_limit
        {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    type IntegerType = i64;

    fn new_monitor_with_limit(ms: u64) -> TimeLimitMonitor<IntegerType> {
        TimeLimitMonitor::<IntegerType>::new(Duration::from_millis(ms))
    }

    #[test]
    fn test_terminates_after_time_limit_when_mask_condition_met() {
        let mut mon = new_monitor_with_limit(10);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // steps = 0 => (steps & mask) == 0, so the clock check runs.
        mon.steps = 0;
        match mon.search_command() {
            SearchCommand::Terminate(msg) => {
                assert!(msg.contains("time limit"), "unexpected message: {msg}");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_when_mask_condition_not_met_even_if_time_exceeded() {
        let mut mon = new_monitor_with_limit(1);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        // With the default mask, low bits set skip the clock check entirely.
        mon.steps = 1;
        match mon.search_command() {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_mask_always_checks_the_clock() {
        let mut mon =
            TimeLimitMonitor::<IntegerType>::with_clock_check_mask(Duration::from_millis(1), 0);
        mon.start_time = Instant::now() - Duration::from_millis(50);

        mon.steps = 12345;
        match mon.search_command() {
            SearchCommand::Terminate(_) => {}
            other => panic!("expected Terminate due to exceeded time, got {:?}", other),
        }
    }

    #[test]
    fn test_continues_before_time_limit() {
        let mut mon = new_monitor_with_limit(1000);
        mon.start_time = Instant::now();
        mon.steps = 0;

        match mon.search_command() {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_on_step_increments_steps_wrapping() {
        let mut mon = new_monitor_with_limit(1000);
        let before = mon.steps;
        mon.on_step();
        assert_eq!(mon.steps, before.wrapping_add(1));

        mon.steps = u64::MAX;
        mon.on_step();
        assert_eq!(mon.steps, 0);
    }

    #[test]
    fn test_enter_search_resets_clock_and_steps() {
        let mut mon = new_monitor_with_limit(1000);
        mon.steps = 99;
        mon.start_time = Instant::now() - Duration::from_secs(60);

        let model = depot_model::model::ModelBuilder::<IntegerType>::new(
            depot_model::unit::ProblemConfig::new(0, 0),
        )
        .build()
        .expect("empty model must build");
        mon.on_enter_search(&model);

        assert_eq!(mon.steps, 0);
        assert!(mon.start_time.elapsed() < Duration::from_secs(10));
    }
}
