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

//! Branch-and-bound engine for binary selection under a cardinality bound.
//!
//! The search walks the binary decision tree depth-first in the shared
//! deterministic variable order. At each node the fixed prefix is itself a
//! feasible selection and is offered to the incumbent; the "take" child is
//! explored before the "skip" child because it carries the larger potential
//! gain, which finds strong incumbents early. A subtree is discarded when
//! its relaxation bound cannot exceed the incumbent. Exhausting the tree
//! proves the incumbent optimal; a monitor termination instead returns the
//! incumbent as feasible with the monitor's reason attached.
//!
//! Every run allocates its own session state, so independent solves can run
//! concurrently without coordination.

use crate::{bound::relaxation_bound, incumbent::Incumbent, stats::BnbStatistics};
use depot_model::{
    index::VariableIndex,
    model::Model,
    objective::LinearObjective,
    solution::Selection,
};
use depot_search::{
    engine::{EngineContext, EngineResult, SelectionEngine, decreasing_coefficient_order},
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
    result::{SolverResult, TerminationReason},
};

/// Result of the branch-and-bound engine after termination.
#[derive(Debug, Clone)]
pub struct BnbOutcome<T>
where
    T: SolverNumeric,
{
    result: SolverResult<Selection<T>>,
    termination_reason: TerminationReason,
    statistics: BnbStatistics,
}

impl<T> BnbOutcome<T>
where
    T: SolverNumeric,
{
    #[inline]
    fn optimal(selection: Selection<T>, statistics: BnbStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    fn aborted<R>(selection: Option<Selection<T>>, reason: R, statistics: BnbStatistics) -> Self
    where
        R: Into<String>,
    {
        let result = match selection {
            Some(selection) => SolverResult::Feasible(selection),
            None => SolverResult::Infeasible,
        };

        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the result.
    #[inline]
    pub fn result(&self) -> &SolverResult<Selection<T>> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the engine statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbStatistics {
        &self.statistics
    }
}

impl<T> From<BnbOutcome<T>> for EngineResult<T>
where
    T: SolverNumeric,
{
    fn from(outcome: BnbOutcome<T>) -> Self {
        match outcome.termination_reason {
            TerminationReason::OptimalityProven => {
                let SolverResult::Optimal(selection) = outcome.result else {
                    unreachable!(
                        "termination reason is OptimalityProven but the result is not Optimal"
                    );
                };
                EngineResult::optimal(selection)
            }
            TerminationReason::InfeasibilityProven => EngineResult::infeasible(),
            TerminationReason::Aborted(reason) => match outcome.result {
                SolverResult::Feasible(selection) => EngineResult::aborted(Some(selection), reason),
                _ => EngineResult::aborted(None, reason),
            },
        }
    }
}

/// The generalized exact engine.
///
/// Unlike the greedy engine its correctness does not rest on the
/// uniform-matroid structure of the cardinality bound, only on the
/// admissibility of the relaxation bound, so additional constraint kinds can
/// be folded into the tree without changing the search skeleton.
#[derive(Clone, Debug, Default)]
pub struct BnbEngine<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> BnbEngine<T>
where
    T: SolverNumeric,
{
    /// Creates a new branch-and-bound engine.
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }

    /// Runs the search to completion or until a monitor terminates it.
    pub fn solve(
        &mut self,
        model: &Model<T>,
        objective: &LinearObjective<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> BnbOutcome<T> {
        let session = BnbSearchSession::new(model, objective, monitor);
        session.run()
    }
}

impl<T> SelectionEngine<T> for BnbEngine<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "branch-and-bound"
    }

    fn run(&mut self, context: EngineContext<'_, T>) -> EngineResult<T> {
        self.solve(context.model, context.objective, context.monitor)
            .into()
    }
}

/// A search session for the branch-and-bound engine. This struct
/// encapsulates the state and logic of a single search run.
struct BnbSearchSession<'a, T>
where
    T: SolverNumeric,
{
    model: &'a Model<T>,
    monitor: &'a mut dyn SearchMonitor<T>,
    /// Variables in search order (coefficient descending, id ascending).
    order: Vec<VariableIndex>,
    /// Coefficients in search order, parallel to `order`.
    coefficients: Vec<T>,
    capacity: usize,
    incumbent: Incumbent<T>,
    /// The taken variables of the current prefix, in take order.
    current: Vec<VariableIndex>,
    stats: BnbStatistics,
    abort_reason: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, T> BnbSearchSession<'a, T>
where
    T: SolverNumeric,
{
    fn new(
        model: &'a Model<T>,
        objective: &'a LinearObjective<T>,
        monitor: &'a mut dyn SearchMonitor<T>,
    ) -> Self {
        let order = decreasing_coefficient_order(model, objective);
        let coefficients = order
            .iter()
            .map(|variable| objective.coefficient(*variable))
            .collect();

        Self {
            model,
            monitor,
            order,
            coefficients,
            capacity: model.capacity(),
            incumbent: Incumbent::new(),
            current: Vec::with_capacity(model.capacity().min(model.num_variables())),
            stats: BnbStatistics::default(),
            abort_reason: None,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> BnbOutcome<T> {
        self.monitor.on_enter_search(self.model);

        // The empty selection is always feasible; installing it up front
        // guarantees a monitor termination still has an incumbent to report.
        self.install_current(T::zero());

        self.expand(0, T::zero(), 0);

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search();
        self.finalize_result()
    }

    /// Finalize the engine result based on the incumbent and whether a
    /// monitor terminated the search.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize_result(self) -> BnbOutcome<T> {
        match self.abort_reason {
            Some(reason) => BnbOutcome::aborted(self.incumbent.into_selection(), reason, self.stats),
            None => {
                let selection = self
                    .incumbent
                    .into_selection()
                    .expect("expected an incumbent selection when the tree is exhausted");
                BnbOutcome::optimal(selection, self.stats)
            }
        }
    }

    /// Offers the current prefix with the given value to the incumbent.
    fn install_current(&mut self, value: T) {
        if self.incumbent.try_install(value, &self.current) {
            self.stats.on_solution_found();
            self.monitor
                .on_solution_found(&Selection::new(self.current.clone(), value));
        }
    }

    /// Expands the node fixing the first `depth` variables, where the taken
    /// ones contribute `value` and occupy `used` slots.
    fn expand(&mut self, depth: usize, value: T, used: usize) {
        if self.abort_reason.is_some() {
            return;
        }

        self.stats.on_node_explored();
        self.stats.on_depth_update(depth as u64);
        self.monitor.on_step();

        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.abort_reason = Some(reason);
            return;
        }

        // Every prefix is a feasible selection in its own right.
        self.install_current(value);

        if depth == self.order.len() || used == self.capacity {
            return;
        }

        let bound = relaxation_bound(&self.coefficients, depth, self.capacity - used, value);
        if let Some(best) = self.incumbent.value() {
            if bound <= best {
                self.stats.on_pruning_bound();
                return;
            }
        }

        let variable = self.order[depth];
        let coefficient = self.coefficients[depth];

        // Take branch first: it carries the larger potential gain. A
        // non-positive coefficient is dominated by its skip branch, since no
        // constraint forces a minimum assignment count.
        if used < self.capacity && coefficient > T::zero() {
            self.current.push(variable);
            self.expand(depth + 1, value + coefficient, used + 1);
            self.current.pop();

            if self.abort_reason.is_some() {
                return;
            }
        }

        self.expand(depth + 1, value, used);
    }
}
