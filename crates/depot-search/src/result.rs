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

//! Result vocabulary shared by the engines and the solver facade.
//!
//! The same result shape appears at two levels of the pipeline: engines
//! produce it over raw [`Selection`](depot_model::solution::Selection)s,
//! the facade re-wraps it over projected
//! [`Solution`](depot_model::solution::Solution)s. `SolverResult` is
//! therefore generic over its payload. The contract in both cases: either a
//! payload with a definite status, or a proven-infeasible marker, never a
//! partially populated result.

use crate::stats::SolverStatistics;
use depot_model::solution::Solution;
use num_traits::{PrimInt, Signed};

/// The qualified payload of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<S> {
    /// We have proven that no feasible assignment exists.
    Infeasible,
    /// We have found an assignment and proven its optimality.
    Optimal(S),
    /// We have found a feasible assignment, but not proven its optimality.
    Feasible(S),
}

impl<S> SolverResult<S> {
    /// Returns the external status label of this result.
    #[inline]
    pub fn status_label(&self) -> &'static str {
        match self {
            SolverResult::Infeasible => "INFEASIBLE",
            SolverResult::Optimal(_) => "OPTIMAL",
            SolverResult::Feasible(_) => "FEASIBLE",
        }
    }

    /// Returns the payload, if this result carries one.
    #[inline]
    pub fn payload(&self) -> Option<&S> {
        match self {
            SolverResult::Optimal(payload) | SolverResult::Feasible(payload) => Some(payload),
            SolverResult::Infeasible => None,
        }
    }

    /// Maps the payload, preserving the status.
    pub fn map<U, F>(self, f: F) -> SolverResult<U>
    where
        F: FnOnce(S) -> U,
    {
        match self {
            SolverResult::Infeasible => SolverResult::Infeasible,
            SolverResult::Optimal(payload) => SolverResult::Optimal(f(payload)),
            SolverResult::Feasible(payload) => SolverResult::Feasible(f(payload)),
        }
    }
}

impl<S> std::fmt::Display for SolverResult<S>
where
    S: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(payload) => write!(f, "Optimal({})", payload),
            SolverResult::Feasible(payload) => write!(f, "Feasible({})", payload),
        }
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The engine found a solution and proved its optimality.
    OptimalityProven,
    /// The engine proved that the problem is infeasible.
    InfeasibilityProven,
    /// The engine was stopped by a monitor (time limit, external interrupt).
    /// The string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// The final outcome of one solve: the projected result, why the search
/// stopped, and per-solve statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    result: SolverResult<Solution<T>>,
    reason: TerminationReason,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    /// Constructs an outcome with a proven-optimal solution.
    #[inline]
    pub fn optimal(solution: Solution<T>, statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// Constructs an outcome with a best-effort solution whose optimality
    /// was not proven before the search was stopped.
    #[inline]
    pub fn feasible<R>(solution: Solution<T>, reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Feasible(solution),
            reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Constructs an outcome for a proven-infeasible instance.
    #[inline]
    pub fn infeasible(statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// Returns the result.
    #[inline]
    pub fn result(&self) -> &SolverResult<Solution<T>> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the per-solve statistics.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Returns the solution, if one was found.
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        self.result.payload()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.result.payload().is_some()
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.solution() {
            Some(solution) => write!(
                f,
                "SolverOutcome(status: {}, objective: {}, reason: {})",
                self.result.status_label(),
                solution.objective_value(),
                self.reason
            ),
            None => write!(
                f,
                "SolverOutcome(status: {}, reason: {})",
                self.result.status_label(),
                self.reason
            ),
        }
    }
}
