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

//! Caller-facing input types.
//!
//! A [`ServiceUnit`] describes one unit of the fleet as reported by the
//! surrounding system; a [`ProblemConfig`] carries the planning-window
//! parameters; [`ObjectiveWeights`] carries the relative importance of the
//! competing goals. All three are owned by the caller and borrowed read-only
//! for the duration of one solve.

use num_traits::{PrimInt, Signed};

/// A single service unit of the fleet.
///
/// Units that are not eligible for the maintenance action still participate
/// in the objective: their mileage deviation penalty is charged
/// unconditionally, since they remain in service either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceUnit<T>
where
    T: PrimInt + Signed,
{
    /// Unique identifier of the unit within one problem instance.
    pub id: String,
    /// Whether this unit is a candidate for the maintenance action.
    pub eligible: bool,
    /// Current mileage of the unit.
    pub mileage: T,
    /// First priority score (e.g. commercial priority).
    pub priority_a: T,
    /// Second priority score (e.g. operational priority).
    pub priority_b: T,
}

impl<T> ServiceUnit<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new service unit.
    #[inline]
    pub fn new<S>(id: S, eligible: bool, mileage: T, priority_a: T, priority_b: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            eligible,
            mileage,
            priority_a,
            priority_b,
        }
    }
}

impl<T> std::fmt::Display for ServiceUnit<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ServiceUnit(id: {}, eligible: {}, mileage: {}, priority_a: {}, priority_b: {})",
            self.id, self.eligible, self.mileage, self.priority_a, self.priority_b
        )
    }
}

/// Planning-window parameters for one solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemConfig<T>
where
    T: PrimInt + Signed,
{
    /// Maximum number of units that may receive the maintenance action
    /// simultaneously.
    pub capacity: usize,
    /// Reference mileage used by the fleet-balancing penalty.
    pub target_mileage: T,
}

impl<T> ProblemConfig<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new problem configuration.
    #[inline]
    pub fn new(capacity: usize, target_mileage: T) -> Self {
        Self {
            capacity,
            target_mileage,
        }
    }
}

/// Relative weights of the competing objective terms.
///
/// These are explicit caller-supplied configuration, never solver-internal
/// constants: the same fleet can be re-planned under a different trade-off
/// without touching the engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectiveWeights<T>
where
    T: PrimInt + Signed,
{
    /// Weight applied to the first priority score of assigned units.
    pub priority_a: T,
    /// Weight applied to the second priority score of assigned units.
    pub priority_b: T,
    /// Weight applied to the mileage deviation penalty of unassigned units.
    pub mileage_penalty: T,
}

impl<T> ObjectiveWeights<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new weight configuration.
    #[inline]
    pub fn new(priority_a: T, priority_b: T, mileage_penalty: T) -> Self {
        Self {
            priority_a,
            priority_b,
            mileage_penalty,
        }
    }
}

impl<T> std::fmt::Display for ObjectiveWeights<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ObjectiveWeights(priority_a: {}, priority_b: {}, mileage_penalty: {})",
            self.priority_a, self.priority_b, self.mileage_penalty
        )
    }
}
