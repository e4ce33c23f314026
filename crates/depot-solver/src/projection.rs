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

//! Projection of an engine selection back onto the fleet.
//!
//! Every unit lands in exactly one partition: assigned (its variable was
//! selected) or remaining (everything else, ineligible units included).
//! Remaining units carry their mileage deviation as a reporting diagnostic.
//!
//! Projection also performs the objective cross-check: the engine's value
//! plus the constant offset must equal an independent recomputation of the
//! partition under the original conditional rule. A mismatch means a bug in
//! the linearization or the engine and is reported as a fatal
//! inconsistency, never as a silently wrong answer.

use crate::solver::SolveError;
use depot_model::{
    model::Model,
    objective::{LinearObjective, deviation_penalty, realized_objective},
    solution::{Selection, Solution},
    unit::ObjectiveWeights,
};
use depot_search::num::SolverNumeric;

/// Projects a selection onto the full unit list and cross-checks the
/// objective.
///
/// Assigned ids appear in selection order, remaining ids in fleet input
/// order.
///
/// # Errors
///
/// Returns [`SolveError::InternalInconsistency`] if the recomputed
/// objective disagrees with the engine's reported value.
pub fn project<T>(
    model: &Model<T>,
    weights: &ObjectiveWeights<T>,
    objective: &LinearObjective<T>,
    selection: &Selection<T>,
) -> Result<Solution<T>, SolveError<T>>
where
    T: SolverNumeric,
{
    let assigned_units: Vec<_> = selection
        .variables()
        .iter()
        .map(|variable| model.variable_unit(*variable))
        .collect();

    let reported = selection.linear_value() + objective.constant();
    let recomputed = realized_objective(model, weights, &assigned_units);
    if reported != recomputed {
        return Err(SolveError::InternalInconsistency {
            reported,
            recomputed,
        });
    }

    let mut is_assigned = vec![false; model.num_units()];
    for unit in &assigned_units {
        is_assigned[unit.get()] = true;
    }

    let assigned = assigned_units
        .iter()
        .map(|unit| model.unit_id(*unit).to_string())
        .collect();

    let mut remaining = Vec::with_capacity(model.num_units() - assigned_units.len());
    let mut remaining_deviations = Vec::with_capacity(model.num_units() - assigned_units.len());
    for unit in model.unit_indices() {
        if !is_assigned[unit.get()] {
            remaining.push(model.unit_id(unit).to_string());
            remaining_deviations.push(deviation_penalty(model, weights, unit));
        }
    }

    Ok(Solution::new(
        reported,
        model.capacity(),
        assigned,
        remaining,
        remaining_deviations,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_model::{
        index::VariableIndex,
        model::ModelBuilder,
        unit::{ProblemConfig, ServiceUnit},
    };

    type IntegerType = i64;

    fn vi(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    fn weights() -> ObjectiveWeights<IntegerType> {
        ObjectiveWeights::new(10, 5, 1)
    }

    fn sample_model() -> Model<IntegerType> {
        let mut builder = ModelBuilder::new(ProblemConfig::new(2, 6500));
        builder.push_units(vec![
            ServiceUnit::new("T01", true, 6800, 90, 80),
            ServiceUnit::new("T03", true, 6400, 50, 60),
            ServiceUnit::new("T04", false, 6550, 70, 75),
            ServiceUnit::new("T05", true, 7500, 98, 92),
            ServiceUnit::new("T06", true, 5500, 30, 40),
        ]);
        builder.build().expect("sample instance must be valid")
    }

    #[test]
    fn test_projection_partitions_every_unit_exactly_once() {
        let model = sample_model();
        let w = weights();
        let objective = LinearObjective::linearize(&model, &w);
        // T05 (variable 2) and T01 (variable 0), in selection order.
        let selection = Selection::new(vec![vi(2), vi(0)], 2440 + 1600);

        let solution =
            project(&model, &w, &objective, &selection).expect("projection must succeed");

        assert_eq!(solution.assigned(), &["T05", "T01"]);
        assert_eq!(solution.remaining(), &["T03", "T04", "T06"]);
        assert_eq!(solution.remaining_deviations(), &[100, 50, 1000]);
        assert_eq!(solution.num_units(), model.num_units());
        assert_eq!(solution.objective_value(), 1590);
    }

    #[test]
    fn test_projection_of_empty_selection() {
        let model = sample_model();
        let w = weights();
        let objective = LinearObjective::linearize(&model, &w);

        let solution = project(&model, &w, &objective, &Selection::empty())
            .expect("projection must succeed");

        assert!(solution.assigned().is_empty());
        assert_eq!(solution.remaining().len(), 5);
        assert_eq!(solution.objective_value(), -2450);
    }

    #[test]
    fn test_inconsistent_value_is_rejected() {
        let model = sample_model();
        let w = weights();
        let objective = LinearObjective::linearize(&model, &w);
        // Correct variable set, corrupted value.
        let selection = Selection::new(vec![vi(2), vi(0)], 9999);

        match project(&model, &w, &objective, &selection) {
            Err(SolveError::InternalInconsistency {
                reported,
                recomputed,
            }) => {
                assert_eq!(reported, 9999 - 2450);
                assert_eq!(recomputed, 1590);
            }
            other => panic!("expected InternalInconsistency, got {:?}", other),
        }
    }
}
