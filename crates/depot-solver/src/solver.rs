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

//! The solver facade.
//!
//! `Solver` wires the pipeline together: model construction and validation,
//! linearization, engine execution under the configured monitor stack,
//! projection, and the objective cross-check. It is configured once through
//! `SolverBuilder` and can then run any number of solves; each solve is a
//! pure, self-contained computation over borrowed inputs, so one solver
//! value may serve independent solves from multiple threads concurrently.

use crate::projection::project;
use depot_bnb::bnb::BnbEngine;
use depot_greedy::greedy::GreedyEngine;
use depot_model::{
    model::{Model, ModelBuilder, ModelError},
    objective::LinearObjective,
    unit::{ObjectiveWeights, ProblemConfig, ServiceUnit},
};
use depot_search::{
    engine::{EngineContext, EngineResult, SelectionEngine},
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, time_limit::TimeLimitMonitor,
    },
    num::SolverNumeric,
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::SolverStatisticsBuilder,
};
use std::sync::atomic::AtomicBool;
use thiserror::Error;

/// Failures of one solve.
///
/// Validation failures are caller errors and surface before any engine
/// runs. An internal inconsistency is a bug: the engine's objective value
/// and the independent recomputation disagree, and the solve aborts with
/// both numbers rather than returning either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError<T>
where
    T: std::fmt::Debug + std::fmt::Display,
{
    /// The input failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The recomputed objective disagrees with the engine's reported value.
    #[error(
        "internal consistency check failed: engine reported objective {reported} but recomputation yields {recomputed}"
    )]
    InternalInconsistency { reported: T, recomputed: T },
}

/// Which engine a solver runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    /// The single-pass exact engine for the cardinality-bound problem
    /// shape. The default.
    #[default]
    Greedy,
    /// The generalized branch-and-bound engine. Honors time limits and
    /// interrupts mid-search.
    BranchAndBound,
}

impl EngineKind {
    /// Returns the engine name used in statistics and logs.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Greedy => "greedy",
            EngineKind::BranchAndBound => "branch-and-bound",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The configured solve pipeline.
pub struct Solver<'a, T> {
    engine_kind: EngineKind,
    time_limit: Option<std::time::Duration>,
    interrupt: Option<&'a AtomicBool>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> std::fmt::Debug for Solver<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("engine_kind", &self.engine_kind)
            .field("time_limit", &self.time_limit)
            .field("has_interrupt", &self.interrupt.is_some())
            .finish()
    }
}

impl<T> Solver<'_, T>
where
    T: SolverNumeric,
{
    /// Returns the configured engine kind.
    #[inline]
    pub fn engine_kind(&self) -> EngineKind {
        self.engine_kind
    }

    /// Returns the configured time limit, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    /// Runs one solve over the given fleet snapshot.
    ///
    /// The inputs are borrowed read-only; the returned outcome owns all of
    /// its data. Every solve allocates its own model, objective, and search
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Model`] when validation rejects the input and
    /// [`SolveError::InternalInconsistency`] when the objective cross-check
    /// fails.
    pub fn solve(
        &self,
        units: &[ServiceUnit<T>],
        config: &ProblemConfig<T>,
        weights: &ObjectiveWeights<T>,
    ) -> Result<SolverOutcome<T>, SolveError<T>> {
        let start_time = std::time::Instant::now();
        let span = tracing::debug_span!(
            "solve",
            engine = self.engine_kind.name(),
            units = units.len(),
            capacity = config.capacity
        );
        let _enter = span.enter();

        let mut builder = ModelBuilder::with_capacity(*config, units.len());
        builder.push_units(units.iter().cloned());
        let model = builder.build()?;
        let objective = LinearObjective::linearize(&model, weights);

        let engine_result = self.run_engine(&model, &objective);
        let (result, reason) = engine_result.into_parts();

        let statistics = SolverStatisticsBuilder::new()
            .engine(self.engine_kind.name())
            .num_units(model.num_units())
            .num_variables(model.num_variables())
            .solve_duration(start_time.elapsed())
            .build();

        let outcome = match result {
            SolverResult::Optimal(selection) => {
                let solution = project(&model, weights, &objective, &selection)?;
                tracing::debug!(objective = %solution.objective_value(), "optimality proven");
                SolverOutcome::optimal(solution, statistics)
            }
            SolverResult::Feasible(selection) => {
                let solution = project(&model, weights, &objective, &selection)?;
                let reason_text = match reason {
                    TerminationReason::Aborted(message) => message,
                    other => other.to_string(),
                };
                tracing::debug!(
                    objective = %solution.objective_value(),
                    reason = %reason_text,
                    "search stopped early; returning best incumbent"
                );
                SolverOutcome::feasible(solution, reason_text, statistics)
            }
            SolverResult::Infeasible => {
                tracing::debug!("infeasibility proven");
                SolverOutcome::infeasible(statistics)
            }
        };

        Ok(outcome)
    }

    /// Assembles the monitor stack and runs the configured engine.
    fn run_engine(&self, model: &Model<T>, objective: &LinearObjective<T>) -> EngineResult<T> {
        let mut monitor = CompositeMonitor::new();
        if let Some(flag) = self.interrupt {
            monitor.add_monitor(InterruptMonitor::new(flag));
        }
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }

        match self.engine_kind {
            EngineKind::Greedy => {
                let mut engine = GreedyEngine::preallocated(model.num_variables());
                engine.run(EngineContext::new(model, objective, &mut monitor))
            }
            EngineKind::BranchAndBound => {
                let mut engine = BnbEngine::new();
                engine.run(EngineContext::new(model, objective, &mut monitor))
            }
        }
    }
}

/// Builder for a [`Solver`].
pub struct SolverBuilder<'a, T> {
    engine_kind: EngineKind,
    time_limit: Option<std::time::Duration>,
    interrupt: Option<&'a AtomicBool>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for SolverBuilder<'_, T>
where
    T: SolverNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            engine_kind: EngineKind::default(),
            time_limit: None,
            interrupt: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Selects the engine to run.
    #[inline]
    pub fn with_engine(mut self, engine_kind: EngineKind) -> Self {
        self.engine_kind = engine_kind;
        self
    }

    /// Caps the wall-clock time of each solve. Only the branch-and-bound
    /// engine can be stopped mid-search; the greedy engine finishes its
    /// single bounded pass regardless.
    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Attaches an external interrupt flag checked during the search.
    #[inline]
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    #[inline]
    pub fn build(self) -> Solver<'a, T> {
        Solver {
            engine_kind: self.engine_kind,
            time_limit: self.time_limit,
            interrupt: self.interrupt,
            _phantom: std::marker::PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    type IntegerType = i64;

    fn weights() -> ObjectiveWeights<IntegerType> {
        ObjectiveWeights::new(10, 5, 1)
    }

    fn sample_units() -> Vec<ServiceUnit<IntegerType>> {
        vec![
            ServiceUnit::new("T01", true, 6800, 90, 80),
            ServiceUnit::new("T03", true, 6400, 50, 60),
            ServiceUnit::new("T04", false, 6550, 70, 75),
            ServiceUnit::new("T05", true, 7500, 98, 92),
            ServiceUnit::new("T06", true, 5500, 30, 40),
        ]
    }

    fn solve_with(
        engine_kind: EngineKind,
        units: &[ServiceUnit<IntegerType>],
        capacity: usize,
    ) -> SolverOutcome<IntegerType> {
        let solver = SolverBuilder::new().with_engine(engine_kind).build();
        solver
            .solve(units, &ProblemConfig::new(capacity, 6500), &weights())
            .expect("solve must succeed")
    }

    #[test]
    fn test_sample_instance_both_engines() {
        for engine_kind in [EngineKind::Greedy, EngineKind::BranchAndBound] {
            let outcome = solve_with(engine_kind, &sample_units(), 2);

            assert!(outcome.is_optimal(), "engine {engine_kind} must prove optimality");
            let solution = outcome.solution().expect("optimal outcome has a solution");
            assert_eq!(solution.assigned(), &["T05", "T01"]);
            assert_eq!(solution.remaining(), &["T03", "T04", "T06"]);
            assert_eq!(solution.objective_value(), 1590);
            assert_eq!(outcome.statistics().engine, engine_kind.name());
        }
    }

    #[test]
    fn test_cardinality_cap_is_respected() {
        for capacity in 0..6 {
            let outcome = solve_with(EngineKind::Greedy, &sample_units(), capacity);
            let solution = outcome.solution().expect("must have a solution");
            assert!(solution.num_assigned() <= capacity);
        }
    }

    #[test]
    fn test_every_unit_appears_in_exactly_one_partition() {
        let units = sample_units();
        let outcome = solve_with(EngineKind::BranchAndBound, &units, 3);
        let solution = outcome.solution().expect("must have a solution");

        let mut seen: Vec<&str> = solution
            .assigned()
            .iter()
            .chain(solution.remaining())
            .map(|id| id.as_str())
            .collect();
        seen.sort_unstable();

        let mut expected: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
        expected.sort_unstable();

        assert_eq!(seen, expected);
    }

    #[test]
    fn test_capacity_zero_assigns_nothing() {
        let outcome = solve_with(EngineKind::Greedy, &sample_units(), 0);
        let solution = outcome.solution().expect("must have a solution");
        assert!(solution.assigned().is_empty());
        assert_eq!(solution.objective_value(), -2450);
    }

    #[test]
    fn test_ample_capacity_assigns_every_positive_coefficient() {
        let outcome = solve_with(EngineKind::Greedy, &sample_units(), 10);
        let solution = outcome.solution().expect("must have a solution");
        // All four eligible units have positive coefficients.
        assert_eq!(solution.num_assigned(), 4);
        assert_eq!(solution.remaining(), &["T04"]);
    }

    #[test]
    fn test_determinism_across_repeated_solves() {
        let units = sample_units();
        let first = solve_with(EngineKind::Greedy, &units, 2);
        let second = solve_with(EngineKind::Greedy, &units, 2);
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn test_raising_an_assigned_units_priority_keeps_it_assigned() {
        let mut units = sample_units();
        let baseline = solve_with(EngineKind::Greedy, &units, 2);
        let baseline_assigned: Vec<String> =
            baseline.solution().unwrap().assigned().to_vec();
        assert!(baseline_assigned.contains(&"T01".to_string()));

        // Raise T01's first priority; it must stay assigned.
        units[0].priority_a += 25;
        let raised = solve_with(EngineKind::Greedy, &units, 2);
        assert!(
            raised
                .solution()
                .unwrap()
                .assigned()
                .contains(&"T01".to_string())
        );
    }

    #[test]
    fn test_duplicate_id_surfaces_as_model_error() {
        let mut units = sample_units();
        units.push(ServiceUnit::new("T01", false, 6000, 1, 1));

        let solver = SolverBuilder::<IntegerType>::new().build();
        let error = solver
            .solve(&units, &ProblemConfig::new(2, 6500), &weights())
            .unwrap_err();

        assert_eq!(
            error,
            SolveError::Model(ModelError::DuplicateId {
                id: "T01".to_string()
            })
        );
    }

    #[test]
    fn test_preset_interrupt_returns_best_effort_feasible() {
        let flag = AtomicBool::new(false);
        flag.store(true, Ordering::Relaxed);

        let solver = SolverBuilder::new()
            .with_engine(EngineKind::BranchAndBound)
            .with_interrupt(&flag)
            .build();
        let outcome = solver
            .solve(&sample_units(), &ProblemConfig::new(2, 6500), &weights())
            .expect("solve must succeed");

        assert!(outcome.is_feasible());
        match outcome.reason() {
            TerminationReason::Aborted(reason) => {
                assert_eq!(reason, "interrupt signal received");
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
        // The interrupt fires at the root, so the best incumbent is the
        // empty selection.
        let solution = outcome.solution().expect("aborted outcome keeps incumbent");
        assert!(solution.assigned().is_empty());
        assert_eq!(solution.remaining().len(), 5);
    }

    #[test]
    fn test_empty_fleet_solves_to_empty_optimal_plan() {
        let outcome = solve_with(EngineKind::BranchAndBound, &[], 3);
        assert!(outcome.is_optimal());
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.num_units(), 0);
        assert_eq!(solution.objective_value(), 0);
    }

    #[test]
    fn test_solver_is_reusable_across_inputs() {
        let solver = SolverBuilder::<IntegerType>::new().build();
        let units = sample_units();

        let first = solver
            .solve(&units, &ProblemConfig::new(1, 6500), &weights())
            .expect("solve must succeed");
        let second = solver
            .solve(&units, &ProblemConfig::new(2, 6500), &weights())
            .expect("solve must succeed");

        assert_eq!(first.solution().unwrap().assigned(), &["T05"]);
        assert_eq!(second.solution().unwrap().assigned(), &["T05", "T01"]);
    }
}
