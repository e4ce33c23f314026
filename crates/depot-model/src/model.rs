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

//! The validated, immutable problem model.
//!
//! `ModelBuilder` is the only mutable stage of a problem's life cycle: units
//! are accumulated, then `build` validates the collection and freezes it into
//! a `Model`. Once built, a `Model` accepts no structural changes; engines
//! borrow it read-only, so independent solves can share one instance across
//! threads without coordination.
//!
//! Internally the model uses a Structure of Arrays layout: per-unit data
//! lives in dense vectors indexed by `UnitIndex`, and the eligible subset is
//! mirrored into a variable table indexed by `VariableIndex`. Unit ids are
//! hashed exactly once, at construction time, into an id→index table; all
//! selection loops afterwards run on indices only.

use crate::{
    index::{UnitIndex, VariableIndex},
    unit::{ProblemConfig, ServiceUnit},
};
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Validation failures detected before a model is constructed.
///
/// These are caller errors, surfaced eagerly so no engine ever runs on a
/// malformed instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The raw capacity value was negative.
    #[error("capacity must be non-negative, got {value}")]
    InvalidCapacity { value: i64 },
    /// Two units share the same id.
    #[error("duplicate unit id '{id}'")]
    DuplicateId { id: String },
}

/// Converts a raw, possibly negative capacity value from an external record
/// into a validated count.
///
/// # Examples
///
/// ```rust
/// # use depot_model::model::{validate_capacity, ModelError};
/// assert_eq!(validate_capacity(2), Ok(2));
/// assert_eq!(
///     validate_capacity(-1),
///     Err(ModelError::InvalidCapacity { value: -1 })
/// );
/// ```
#[inline]
pub fn validate_capacity(raw: i64) -> Result<usize, ModelError> {
    usize::try_from(raw).map_err(|_| ModelError::InvalidCapacity { value: raw })
}

/// The immutable data model describing one maintenance-slot assignment
/// instance.
///
/// This struct holds all pre-validated, queryable data:
/// - `ids[unit]` / `id_lookup`: unit identities and the one-time reverse map.
/// - `eligible[unit]`, `mileages[unit]`, `priorities_a[unit]`,
///   `priorities_b[unit]`: per-unit attributes in dense vectors.
/// - `variable_units[variable]`: the owning unit of each decision variable.
/// - `unit_variables[unit]`: the decision variable of each unit, `None` for
///   ineligible units.
///
/// Construction:
/// - Use `ModelBuilder` and call `ModelBuilder::build` to obtain a validated
///   `Model`.
#[derive(Clone, Debug)]
pub struct Model<T>
where
    T: PrimInt + Signed,
{
    capacity: usize,
    target_mileage: T,
    ids: Vec<String>,                          // len = num_units
    eligible: Vec<bool>,                       // len = num_units
    mileages: Vec<T>,                          // len = num_units
    priorities_a: Vec<T>,                      // len = num_units
    priorities_b: Vec<T>,                      // len = num_units
    unit_variables: Vec<Option<VariableIndex>>, // len = num_units
    variable_units: Vec<UnitIndex>,            // len = num_variables
    id_lookup: FxHashMap<String, UnitIndex>,
}

impl<T> Model<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of service units in the model.
    #[inline]
    pub fn num_units(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of decision variables, i.e. the number of eligible
    /// units.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.variable_units.len()
    }

    /// Returns the maximum number of units that may be assigned.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the mileage balancing reference point.
    #[inline]
    pub fn target_mileage(&self) -> T {
        self.target_mileage
    }

    /// Returns the id of the specified unit.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn unit_id(&self, unit_index: UnitIndex) -> &str {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::unit_id` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        &self.ids[index]
    }

    /// Returns the index of the unit with the specified id, if present.
    #[inline]
    pub fn unit_index(&self, id: &str) -> Option<UnitIndex> {
        self.id_lookup.get(id).copied()
    }

    /// Returns `true` if the specified unit is eligible for the maintenance
    /// action.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn is_eligible(&self, unit_index: UnitIndex) -> bool {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::is_eligible` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        self.eligible[index]
    }

    /// Returns the mileage of the specified unit.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn mileage(&self, unit_index: UnitIndex) -> T {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::mileage` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        self.mileages[index]
    }

    /// Returns the first priority score of the specified unit.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn priority_a(&self, unit_index: UnitIndex) -> T {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::priority_a` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        self.priorities_a[index]
    }

    /// Returns the second priority score of the specified unit.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn priority_b(&self, unit_index: UnitIndex) -> T {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::priority_b` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        self.priorities_b[index]
    }

    /// Returns the unit that owns the specified decision variable.
    ///
    /// # Panics
    ///
    /// Panics if `variable_index` is not in `0..num_variables()`.
    #[inline]
    pub fn variable_unit(&self, variable_index: VariableIndex) -> UnitIndex {
        let index = variable_index.get();
        debug_assert!(
            index < self.num_variables(),
            "called `Model::variable_unit` with variable index out of bounds: the index is {} but the len is {}",
            index,
            self.num_variables()
        );

        self.variable_units[index]
    }

    /// Returns the decision variable of the specified unit, or `None` if the
    /// unit is ineligible.
    ///
    /// # Panics
    ///
    /// Panics if `unit_index` is not in `0..num_units()`.
    #[inline]
    pub fn unit_variable(&self, unit_index: UnitIndex) -> Option<VariableIndex> {
        let index = unit_index.get();
        debug_assert!(
            index < self.num_units(),
            "called `Model::unit_variable` with unit index out of bounds: the index is {} but the len is {}",
            index,
            self.num_units()
        );

        self.unit_variables[index]
    }

    /// Returns an iterator over all unit indices, in input order.
    #[inline]
    pub fn unit_indices(&self) -> impl Iterator<Item = UnitIndex> + '_ {
        (0..self.num_units()).map(UnitIndex::new)
    }

    /// Returns an iterator over all variable indices, in input order of the
    /// owning units.
    #[inline]
    pub fn variable_indices(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        (0..self.num_variables()).map(VariableIndex::new)
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(num_units: {}, num_variables: {}, capacity: {})",
            self.num_units(),
            self.num_variables(),
            self.capacity()
        )
    }
}

/// Mutable accumulation stage for a [`Model`].
///
/// The builder accepts units in any order and defers all validation to
/// [`ModelBuilder::build`], which either produces an immutable `Model` or a
/// [`ModelError`] describing the first violation found. After `build`, no
/// further structural changes are possible.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    config: ProblemConfig<T>,
    units: Vec<ServiceUnit<T>>,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new builder for the given planning-window configuration.
    #[inline]
    pub fn new(config: ProblemConfig<T>) -> Self {
        Self {
            config,
            units: Vec::new(),
        }
    }

    /// Creates a new builder with preallocated storage for `num_units` units.
    #[inline]
    pub fn with_capacity(config: ProblemConfig<T>, num_units: usize) -> Self {
        Self {
            config,
            units: Vec::with_capacity(num_units),
        }
    }

    /// Adds a unit to the instance.
    #[inline]
    pub fn push_unit(&mut self, unit: ServiceUnit<T>) -> &mut Self {
        self.units.push(unit);
        self
    }

    /// Adds multiple units to the instance.
    pub fn push_units<I>(&mut self, units: I) -> &mut Self
    where
        I: IntoIterator<Item = ServiceUnit<T>>,
    {
        self.units.extend(units);
        self
    }

    /// Returns the number of units accumulated so far.
    #[inline]
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    /// Validates the accumulated units and freezes them into a [`Model`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateId`] if two units share an id. The
    /// first duplicate encountered in input order is reported.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        let num_units = self.units.len();

        let mut ids = Vec::with_capacity(num_units);
        let mut eligible = Vec::with_capacity(num_units);
        let mut mileages = Vec::with_capacity(num_units);
        let mut priorities_a = Vec::with_capacity(num_units);
        let mut priorities_b = Vec::with_capacity(num_units);
        let mut unit_variables = Vec::with_capacity(num_units);
        let mut variable_units = Vec::new();
        let mut id_lookup: FxHashMap<String, UnitIndex> =
            FxHashMap::with_capacity_and_hasher(num_units, Default::default());

        for (index, unit) in self.units.into_iter().enumerate() {
            let unit_index = UnitIndex::new(index);

            if id_lookup.insert(unit.id.clone(), unit_index).is_some() {
                return Err(ModelError::DuplicateId { id: unit.id });
            }

            let variable = if unit.eligible {
                let variable_index = VariableIndex::new(variable_units.len());
                variable_units.push(unit_index);
                Some(variable_index)
            } else {
                None
            };

            ids.push(unit.id);
            eligible.push(unit.eligible);
            mileages.push(unit.mileage);
            priorities_a.push(unit.priority_a);
            priorities_b.push(unit.priority_b);
            unit_variables.push(variable);
        }

        Ok(Model {
            capacity: self.config.capacity,
            target_mileage: self.config.target_mileage,
            ids,
            eligible,
            mileages,
            priorities_a,
            priorities_b,
            unit_variables,
            variable_units,
            id_lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui(i: usize) -> UnitIndex {
        UnitIndex::new(i)
    }

    fn vi(i: usize) -> VariableIndex {
        VariableIndex::new(i)
    }

    fn sample_units() -> Vec<ServiceUnit<i64>> {
        vec![
            ServiceUnit::new("T01", true, 6800, 90, 80),
            ServiceUnit::new("T03", true, 6400, 50, 60),
            ServiceUnit::new("T04", false, 6550, 70, 75),
            ServiceUnit::new("T05", true, 7500, 98, 92),
            ServiceUnit::new("T06", true, 5500, 30, 40),
        ]
    }

    fn build_sample() -> Model<i64> {
        let mut builder = ModelBuilder::new(ProblemConfig::new(2, 6500));
        builder.push_units(sample_units());
        builder.build().expect("sample instance must be valid")
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(0), Ok(0));
        assert_eq!(validate_capacity(17), Ok(17));
        assert_eq!(
            validate_capacity(-3),
            Err(ModelError::InvalidCapacity { value: -3 })
        );
    }

    #[test]
    fn test_build_dimensions_and_config() {
        let model = build_sample();
        assert_eq!(model.num_units(), 5);
        assert_eq!(model.num_variables(), 4); // T04 is ineligible
        assert_eq!(model.capacity(), 2);
        assert_eq!(model.target_mileage(), 6500);
    }

    #[test]
    fn test_variable_exists_iff_eligible() {
        let model = build_sample();
        for unit in model.unit_indices() {
            assert_eq!(model.unit_variable(unit).is_some(), model.is_eligible(unit));
        }
        // And the reverse mapping round-trips.
        for variable in model.variable_indices() {
            let unit = model.variable_unit(variable);
            assert_eq!(model.unit_variable(unit), Some(variable));
        }
    }

    #[test]
    fn test_unit_attribute_accessors() {
        let model = build_sample();
        assert_eq!(model.unit_id(ui(0)), "T01");
        assert_eq!(model.mileage(ui(3)), 7500);
        assert_eq!(model.priority_a(ui(1)), 50);
        assert_eq!(model.priority_b(ui(4)), 40);
        assert!(!model.is_eligible(ui(2)));
    }

    #[test]
    fn test_id_lookup_round_trip() {
        let model = build_sample();
        for unit in model.unit_indices() {
            assert_eq!(model.unit_index(model.unit_id(unit)), Some(unit));
        }
        assert_eq!(model.unit_index("T99"), None);
    }

    #[test]
    fn test_variable_order_follows_input_order_of_eligible_units() {
        let model = build_sample();
        assert_eq!(model.variable_unit(vi(0)), ui(0)); // T01
        assert_eq!(model.variable_unit(vi(1)), ui(1)); // T03
        assert_eq!(model.variable_unit(vi(2)), ui(3)); // T05
        assert_eq!(model.variable_unit(vi(3)), ui(4)); // T06
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut builder = ModelBuilder::new(ProblemConfig::<i64>::new(1, 0));
        builder.push_unit(ServiceUnit::new("T01", true, 100, 1, 1));
        builder.push_unit(ServiceUnit::new("T01", false, 200, 2, 2));

        assert_eq!(
            builder.build().unwrap_err(),
            ModelError::DuplicateId {
                id: "T01".to_string()
            }
        );
    }

    #[test]
    fn test_empty_fleet_is_valid() {
        let model = ModelBuilder::new(ProblemConfig::<i64>::new(3, 6500))
            .build()
            .expect("empty fleet must build");
        assert_eq!(model.num_units(), 0);
        assert_eq!(model.num_variables(), 0);
    }

    #[test]
    fn test_display() {
        let model = build_sample();
        assert_eq!(
            format!("{}", model),
            "Model(num_units: 5, num_variables: 4, capacity: 2)"
        );
    }
}
