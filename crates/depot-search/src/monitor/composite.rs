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

/// A composite monitor that aggregates multiple monitors and forwards events
/// to all of them. The first `Terminate` command wins.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<T> std::fmt::Debug for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<T> Default for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<'_, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, model: &Model<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(model);
        }
    }

    fn on_exit_search(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search();
        }
    }

    fn on_solution_found(&mut self, selection: &Selection<T>) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(selection);
        }
    }

    #[inline(always)]
    fn on_step(&mut self) {
        for monitor in &mut self.monitors {
            monitor.on_step();
        }
    }

    fn search_command(&self) -> SearchCommand {
        for monitor in &self.monitors {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOpMonitor;
    use depot_model::{model::ModelBuilder, unit::ProblemConfig};

    type IntegerType = i64;

    use std::cell::Cell;
    use std::rc::Rc;

    /// A monitor with a fixed command that counts the events it receives,
    /// for exercising the composite.
    struct FixedCommandMonitor {
        command: SearchCommand,
        steps_seen: Rc<Cell<u64>>,
    }

    impl FixedCommandMonitor {
        fn new(command: SearchCommand) -> Self {
            Self {
                command,
                steps_seen: Rc::new(Cell::new(0)),
            }
        }

        fn with_counter(command: SearchCommand, steps_seen: Rc<Cell<u64>>) -> Self {
            Self {
                command,
                steps_seen,
            }
        }
    }

    impl SearchMonitor<IntegerType> for FixedCommandMonitor {
        fn name(&self) -> &str {
            "FixedCommandMonitor"
        }

        fn on_enter_search(&mut self, _model: &Model<IntegerType>) {}
        fn on_exit_search(&mut self) {}
        fn on_solution_found(&mut self, _selection: &Selection<IntegerType>) {}

        fn on_step(&mut self) {
            self.steps_seen.set(self.steps_seen.get() + 1);
        }

        fn search_command(&self) -> SearchCommand {
            self.command.clone()
        }
    }

    fn empty_model() -> Model<IntegerType> {
        ModelBuilder::new(ProblemConfig::new(0, 0))
            .build()
            .expect("empty model must build")
    }

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::<IntegerType>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(FixedCommandMonitor::new(SearchCommand::Terminate(
            "first".to_string(),
        )));
        composite.add_monitor(FixedCommandMonitor::new(SearchCommand::Terminate(
            "second".to_string(),
        )));

        assert_eq!(composite.len(), 3);
        match composite.search_command() {
            SearchCommand::Terminate(reason) => assert_eq!(reason, "first"),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_all_continue_yields_continue() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor(FixedCommandMonitor::new(SearchCommand::Continue));

        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_lifecycle_events_are_forwarded_to_every_monitor() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(FixedCommandMonitor::with_counter(
            SearchCommand::Continue,
            Rc::clone(&first),
        ));
        composite.add_monitor(FixedCommandMonitor::with_counter(
            SearchCommand::Continue,
            Rc::clone(&second),
        ));

        let model = empty_model();
        composite.on_enter_search(&model);
        composite.on_step();
        composite.on_step();
        composite.on_solution_found(&Selection::empty());
        composite.on_exit_search();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }
}
