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

//! The capability interface every selection engine implements.
//!
//! The facade never names a concrete engine: it hands the linearized
//! objective, model, and monitor stack to a `SelectionEngine` and receives a
//! qualified selection back. The greedy engine and the branch-and-bound
//! engine both implement this trait, so exchanging them (or plugging in a
//! future engine with more constraint kinds) never touches the pipeline.

use crate::{
    monitor::search_monitor::SearchMonitor,
    result::{SolverResult, TerminationReason},
};
use depot_model::{
    index::VariableIndex, model::Model, objective::LinearObjective, solution::Selection,
};
use num_traits::{PrimInt, Signed};

/// Everything an engine needs for one run: the immutable problem view and
/// the monitor controlling termination.
pub struct EngineContext<'a, T>
where
    T: PrimInt + Signed,
{
    pub model: &'a Model<T>,
    pub objective: &'a LinearObjective<T>,
    pub monitor: &'a mut dyn SearchMonitor<T>,
}

impl<'a, T> EngineContext<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    pub fn new(
        model: &'a Model<T>,
        objective: &'a LinearObjective<T>,
        monitor: &'a mut dyn SearchMonitor<T>,
    ) -> Self {
        Self {
            model,
            objective,
            monitor,
        }
    }
}

impl<'a, T> std::fmt::Debug for EngineContext<'a, T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("model", &self.model)
            .field("objective", &self.objective)
            .field("monitor", &self.monitor.name())
            .finish()
    }
}

/// The qualified output of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResult<T>
where
    T: PrimInt + Signed,
{
    result: SolverResult<Selection<T>>,
    termination_reason: TerminationReason,
}

impl<T> EngineResult<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a result whose optimality is proven.
    #[inline]
    pub fn optimal(selection: Selection<T>) -> Self {
        Self {
            result: SolverResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
        }
    }

    /// Constructs a result for a proven-infeasible instance.
    #[inline]
    pub fn infeasible() -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
        }
    }

    /// Constructs a result for a search that was stopped by a monitor. The
    /// best selection found so far, if any, is reported as feasible but not
    /// proven optimal.
    #[inline]
    pub fn aborted<R>(selection: Option<Selection<T>>, reason: R) -> Self
    where
        R: Into<String>,
    {
        let termination_reason = TerminationReason::Aborted(reason.into());

        let result = match selection {
            Some(selection) => SolverResult::Feasible(selection),
            None => SolverResult::Infeasible,
        };

        Self {
            result,
            termination_reason,
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

    /// Decomposes the result into its parts.
    #[inline]
    pub fn into_parts(self) -> (SolverResult<Selection<T>>, TerminationReason) {
        (self.result, self.termination_reason)
    }
}

impl<T> std::fmt::Display for EngineResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EngineResult(result: {}, termination_reason: {})",
            self.result, self.termination_reason
        )
    }
}

/// A selection engine: maximizes a linear objective over binary decision
/// variables under the model's cardinality bound.
///
/// Implementations must be deterministic for a fixed input and must never
/// report `Optimal` unless optimality is actually proven for the instance.
pub trait SelectionEngine<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str;
    fn run(&mut self, context: EngineContext<'_, T>) -> EngineResult<T>;
}

/// Returns all decision variables ordered by coefficient descending,
/// breaking ties by owning unit id ascending.
///
/// Every engine traverses variables in this order. The id tie-break makes
/// results reproducible across runs and engines even when coefficients
/// collide; it costs one string comparison per tie during the sort and
/// nothing afterwards.
pub fn decreasing_coefficient_order<T>(
    model: &Model<T>,
    objective: &LinearObjective<T>,
) -> Vec<VariableIndex>
where
    T: PrimInt + Signed,
{
    let mut order = Vec::with_capacity(model.num_variables());
    decreasing_coefficient_order_into(model, objective, &mut order);
    order
}

/// In-place variant of [`decreasing_coefficient_order`] for engines that
/// keep a reusable scratch buffer across solves.
pub fn decreasing_coefficient_order_into<T>(
    model: &Model<T>,
    objective: &LinearObjective<T>,
    order: &mut Vec<VariableIndex>,
) where
    T: PrimInt + Signed,
{
    debug_assert_eq!(
        model.num_variables(),
        objective.num_variables(),
        "called `decreasing_coefficient_order_into` with a model/objective pair of different sizes: {} vs {}",
        model.num_variables(),
        objective.num_variables()
    );

    order.clear();
    order.extend(model.variable_indices());
    order.sort_by(|a, b| {
        objective
            .coefficient(*b)
            .cmp(&objective.coefficient(*a))
            .then_with(|| {
                model
                    .unit_id(model.variable_unit(*a))
                    .cmp(model.unit_id(model.variable_unit(*b)))
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_model::index::VariableIndex;

    #[test]
    fn test_optimal_result() {
        let selection = Selection::new(vec![VariableIndex::new(0)], 10i64);
        let result = EngineResult::optimal(selection.clone());

        assert_eq!(result.result(), &SolverResult::Optimal(selection));
        assert_eq!(
            result.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_aborted_with_selection_is_feasible() {
        let selection = Selection::new(Vec::new(), 0i64);
        let result = EngineResult::aborted(Some(selection.clone()), "time limit reached");

        assert_eq!(result.result(), &SolverResult::Feasible(selection));
        match result.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_aborted_without_selection_is_infeasible() {
        let result = EngineResult::<i64>::aborted(None, "interrupted");
        assert_eq!(result.result(), &SolverResult::Infeasible);
    }

    #[test]
    fn test_into_parts_round_trips() {
        let selection = Selection::new(vec![VariableIndex::new(1)], 7i64);
        let (result, reason) = EngineResult::optimal(selection.clone()).into_parts();
        assert_eq!(result, SolverResult::Optimal(selection));
        assert_eq!(reason, TerminationReason::OptimalityProven);
    }

    mod ordering {
        use super::super::decreasing_coefficient_order;
        use depot_model::{
            index::VariableIndex,
            model::{Model, ModelBuilder},
            objective::LinearObjective,
            unit::{ObjectiveWeights, ProblemConfig, ServiceUnit},
        };

        fn vi(i: usize) -> VariableIndex {
            VariableIndex::new(i)
        }

        fn model_with_priorities(priorities: &[(&str, i64)]) -> Model<i64> {
            let mut builder = ModelBuilder::new(ProblemConfig::new(2, 0));
            for (id, priority) in priorities {
                builder.push_unit(ServiceUnit::new(*id, true, 0, *priority, 0));
            }
            builder.build().expect("instance must be valid")
        }

        #[test]
        fn test_orders_by_coefficient_descending() {
            let model = model_with_priorities(&[("A", 1), ("B", 3), ("C", 2)]);
            let objective = LinearObjective::linearize(&model, &ObjectiveWeights::new(1, 0, 0));

            let order = decreasing_coefficient_order(&model, &objective);
            assert_eq!(order, vec![vi(1), vi(2), vi(0)]);
        }

        #[test]
        fn test_ties_break_by_unit_id_ascending() {
            // Same coefficient everywhere; ids decide.
            let model = model_with_priorities(&[("T09", 5), ("T02", 5), ("T05", 5)]);
            let objective = LinearObjective::linearize(&model, &ObjectiveWeights::new(1, 0, 0));

            let order = decreasing_coefficient_order(&model, &objective);
            // T02 < T05 < T09 lexicographically.
            assert_eq!(order, vec![vi(1), vi(2), vi(0)]);
        }
    }
}
