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

//! Engine and caller-facing outputs.
//!
//! A [`Selection`] is the raw engine output: the chosen decision variables
//! and the linear value they achieve. A [`Solution`] is the projection of a
//! selection back onto the fleet: every unit lands in exactly one of the
//! assigned or remaining partitions, remaining units carry their mileage
//! deviation as a reporting diagnostic, and the objective value includes the
//! constant offset. Both are produced once per solve and never mutated
//! afterwards.

use crate::index::VariableIndex;
use num_traits::{PrimInt, Signed};

/// The subset of decision variables an engine set to one, together with the
/// achieved linear sum (constant offset not included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    variables: Vec<VariableIndex>,
    linear_value: T,
}

impl<T> Selection<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Selection`.
    #[inline]
    pub fn new(variables: Vec<VariableIndex>, linear_value: T) -> Self {
        Self {
            variables,
            linear_value,
        }
    }

    /// Constructs the empty selection with a linear value of zero.
    #[inline]
    pub fn empty() -> Self {
        Self {
            variables: Vec::new(),
            linear_value: T::zero(),
        }
    }

    /// Returns the selected variables, in selection order.
    #[inline]
    pub fn variables(&self) -> &[VariableIndex] {
        &self.variables
    }

    /// Returns the number of selected variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the achieved linear sum, without the constant offset.
    #[inline]
    pub fn linear_value(&self) -> T {
        self.linear_value
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Selection(len: {}, linear_value: {})",
            self.len(),
            self.linear_value
        )
    }
}

/// The final assignment plan reported to the caller.
///
/// Assigned ids appear in selection order (best coefficient first);
/// remaining ids appear in fleet input order, each paired with its mileage
/// deviation diagnostic. The solution owns its id strings, so it stays valid
/// after the model it was projected from is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    objective_value: T,
    capacity: usize,
    assigned: Vec<String>,
    remaining: Vec<String>,
    remaining_deviations: Vec<T>,
}

impl<T> Solution<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if `remaining` and `remaining_deviations` have different
    /// lengths.
    pub fn new(
        objective_value: T,
        capacity: usize,
        assigned: Vec<String>,
        remaining: Vec<String>,
        remaining_deviations: Vec<T>,
    ) -> Self {
        assert_eq!(
            remaining.len(),
            remaining_deviations.len(),
            "called Solution::new with inconsistent vector lengths: remaining.len() = {}, remaining_deviations.len() = {}",
            remaining.len(),
            remaining_deviations.len()
        );

        Self {
            objective_value,
            capacity,
            assigned,
            remaining,
            remaining_deviations,
        }
    }

    /// Returns the total objective value, constant offset included.
    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    /// Returns the slot capacity this solution was computed under.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the ids of the assigned units, best coefficient first.
    #[inline]
    pub fn assigned(&self) -> &[String] {
        &self.assigned
    }

    /// Returns the ids of the remaining units, in fleet input order.
    #[inline]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Returns the mileage deviations of the remaining units, parallel to
    /// [`Solution::remaining`].
    #[inline]
    pub fn remaining_deviations(&self) -> &[T] {
        &self.remaining_deviations
    }

    /// Returns the number of assigned units.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.assigned.len()
    }

    /// Returns the total number of units in the plan.
    #[inline]
    pub fn num_units(&self) -> usize {
        self.assigned.len() + self.remaining.len()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Plan")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        writeln!(
            f,
            "   Assigned ({}/{} slots used):",
            self.num_assigned(),
            self.capacity
        )?;
        if self.assigned.is_empty() {
            writeln!(f, "      None.")?;
        } else {
            for id in &self.assigned {
                writeln!(f, "      - {}", id)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "   Remaining in service:")?;
        if self.remaining.is_empty() {
            writeln!(f, "      None.")?;
        } else {
            for (id, deviation) in self.remaining.iter().zip(&self.remaining_deviations) {
                writeln!(f, "      - {} (mileage deviation: {})", id, deviation)?;
            }
        }

        Ok(())
    }
}
