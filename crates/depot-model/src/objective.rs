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

//! # Linearization of the Conditional Objective
//!
//! The business rule values each unit conditionally: an eligible unit
//! contributes its weighted priority `reward` when assigned and its negated
//! mileage `deviation_penalty` when not assigned; an ineligible unit always
//! contributes its negated deviation penalty. Engines, however, only accept
//! a linear function of binary variables. The bridge is the identity
//!
//! ```text
//! reward · x + (−penalty) · (1 − x) = (reward + penalty) · x − penalty
//! ```
//!
//! which folds each eligible unit into exactly one coefficient
//! (`reward + penalty`) on its decision variable plus one constant offset
//! (`−penalty`). Ineligible units contribute only a constant offset and no
//! variable. The identity is reproduced exactly in integer arithmetic, with
//! no intermediate rounding, so a reported objective value always matches a
//! manual recomputation bit for bit.

use crate::{
    index::{UnitIndex, VariableIndex},
    model::Model,
    unit::ObjectiveWeights,
};
use num_traits::{PrimInt, Signed};

/// Returns the weighted mileage deviation penalty of the specified unit:
/// `mileage_penalty × |mileage − target_mileage|`.
#[inline]
pub fn deviation_penalty<T>(model: &Model<T>, weights: &ObjectiveWeights<T>, unit: UnitIndex) -> T
where
    T: PrimInt + Signed,
{
    weights.mileage_penalty * (model.mileage(unit) - model.target_mileage()).abs()
}

/// Returns the weighted assignment reward of the specified unit:
/// `priority_a_weight × priority_a + priority_b_weight × priority_b`.
#[inline]
pub fn assignment_reward<T>(model: &Model<T>, weights: &ObjectiveWeights<T>, unit: UnitIndex) -> T
where
    T: PrimInt + Signed,
{
    weights.priority_a * model.priority_a(unit) + weights.priority_b * model.priority_b(unit)
}

/// The linearized objective of one problem instance.
///
/// Holds one coefficient per decision variable, indexed by `VariableIndex`,
/// plus the scalar constant collecting the `−deviation_penalty` offsets of
/// every unit (eligible and ineligible alike). The total objective of a
/// selection is the sum of the selected coefficients plus the constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearObjective<T> {
    coefficients: Vec<T>,
    constant: T,
}

impl<T> LinearObjective<T>
where
    T: PrimInt + Signed,
{
    /// Builds the linear objective for the given model and weights.
    ///
    /// Per eligible unit this computes `coefficient = reward + penalty` and
    /// accumulates `−penalty` into the constant; per ineligible unit only the
    /// constant accumulation happens. All arithmetic is plain integer
    /// arithmetic on `T`.
    pub fn linearize(model: &Model<T>, weights: &ObjectiveWeights<T>) -> Self {
        let mut coefficients = vec![T::zero(); model.num_variables()];
        let mut constant = T::zero();

        for unit in model.unit_indices() {
            let penalty = deviation_penalty(model, weights, unit);
            constant = constant - penalty;

            if let Some(variable) = model.unit_variable(unit) {
                let reward = assignment_reward(model, weights, unit);
                coefficients[variable.get()] = reward + penalty;
            }
        }

        Self {
            coefficients,
            constant,
        }
    }

    /// Returns the number of decision variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns the coefficient of the specified variable.
    ///
    /// # Panics
    ///
    /// Panics if `variable_index` is not in `0..num_variables()`.
    #[inline]
    pub fn coefficient(&self, variable_index: VariableIndex) -> T {
        let index = variable_index.get();
        debug_assert!(
            index < self.num_variables(),
            "called `LinearObjective::coefficient` with variable index out of bounds: the index is {} but the len is {}",
            index,
            self.num_variables()
        );

        self.coefficients[index]
    }

    /// Returns a slice of all coefficients, indexed by variable.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the constant offset of the objective.
    #[inline]
    pub fn constant(&self) -> T {
        self.constant
    }

    /// Returns the total objective value of a selection: the sum of the
    /// selected coefficients plus the constant offset.
    pub fn value_of<I>(&self, selected: I) -> T
    where
        I: IntoIterator<Item = VariableIndex>,
    {
        selected
            .into_iter()
            .fold(self.constant, |acc, variable| acc + self.coefficient(variable))
    }
}

impl<T> std::fmt::Display for LinearObjective<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LinearObjective(num_variables: {}, constant: {})",
            self.num_variables(),
            self.constant
        )
    }
}

/// Recomputes the objective of a unit partition directly from the business
/// rule, bypassing the linearization.
///
/// Assigned eligible units contribute their reward; every other unit
/// contributes its negated deviation penalty. The result must always equal
/// [`LinearObjective::value_of`] applied to the corresponding variable set;
/// callers use this as the independent side of that consistency check.
pub fn realized_objective<T>(
    model: &Model<T>,
    weights: &ObjectiveWeights<T>,
    assigned: &[UnitIndex],
) -> T
where
    T: PrimInt + Signed,
{
    let mut is_assigned = vec![false; model.num_units()];
    for unit in assigned {
        debug_assert!(
            model.is_eligible(*unit),
            "called `realized_objective` with an assigned unit that is ineligible: {}",
            unit
        );
        is_assigned[unit.get()] = true;
    }

    let mut total = T::zero();
    for unit in model.unit_indices() {
        if is_assigned[unit.get()] {
            total = total + assignment_reward(model, weights, unit);
        } else {
            total = total - deviation_penalty(model, weights, unit);
        }
    }
    total
}
