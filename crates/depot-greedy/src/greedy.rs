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

//! The greedy selection engine.
//!
//! Variables are visited in decreasing coefficient order (ties broken by
//! unit id) and taken while two conditions hold: the coefficient is strictly
//! positive and the cardinality bound has room. The first failing condition
//! ends the pass. No constraint forces a minimum assignment count, so a
//! non-positive coefficient can never improve the total and is never taken.
//!
//! The pass is bounded and deterministic and never suspends, so this engine
//! ignores monitor termination commands; it still reports lifecycle events
//! so composed monitors observe a consistent run.

use depot_model::{
    index::VariableIndex, model::Model, objective::LinearObjective, solution::Selection,
};
use depot_search::{
    engine::{EngineContext, EngineResult, SelectionEngine, decreasing_coefficient_order_into},
    monitor::search_monitor::SearchMonitor,
    num::SolverNumeric,
};

/// Exact engine for the single-cardinality-constraint problem shape.
///
/// The engine is stateless between runs apart from reusable scratch storage
/// for the variable ordering; a fresh instance per solve behaves identically
/// to a reused one.
#[derive(Clone, Debug, Default)]
pub struct GreedyEngine<T> {
    order: Vec<VariableIndex>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> GreedyEngine<T>
where
    T: SolverNumeric,
{
    /// Creates a new greedy engine.
    #[inline]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a new greedy engine with preallocated scratch storage for the
    /// given number of decision variables.
    #[inline]
    pub fn preallocated(num_variables: usize) -> Self {
        Self {
            order: Vec::with_capacity(num_variables),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Runs the selection pass.
    pub fn solve(
        &mut self,
        model: &Model<T>,
        objective: &LinearObjective<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> EngineResult<T> {
        monitor.on_enter_search(model);

        decreasing_coefficient_order_into(model, objective, &mut self.order);

        let capacity = model.capacity();
        let mut variables = Vec::with_capacity(capacity.min(self.order.len()));
        let mut linear_value = T::zero();

        for variable in self.order.iter().copied() {
            monitor.on_step();

            if variables.len() >= capacity {
                break;
            }
            let coefficient = objective.coefficient(variable);
            if coefficient <= T::zero() {
                break;
            }

            variables.push(variable);
            linear_value = linear_value + coefficient;
        }

        let selection = Selection::new(variables, linear_value);
        monitor.on_solution_found(&selection);
        monitor.on_exit_search();

        EngineResult::optimal(selection)
    }
}

impl<T> SelectionEngine<T> for GreedyEngine<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "greedy"
    }

    fn run(&mut self, context: EngineContext<'_, T>) -> EngineResult<T> {
        self.solve(context.model, context.objective, context.monitor)
    }
}
