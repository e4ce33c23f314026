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

//! # Depot Model
//!
//! **The Core Domain Model for the Depot Maintenance-Slot Solver.**
//!
//! This crate defines the data structures used to represent the maintenance
//! slot assignment problem: which service units of a fleet receive a scarce
//! maintenance action in the next planning window. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! solving engines (`depot_greedy`, `depot_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`UnitIndex`, `VariableIndex`) to prevent logical indexing errors.
//! * **`unit`**: Caller-facing input types (`ServiceUnit`, `ProblemConfig`, `ObjectiveWeights`).
//! * **`model`**: Contains the `Model` (immutable, validated, optimized for solving) and `ModelBuilder` (mutable, optimized for configuration).
//! * **`objective`**: Translates the conditional reward/penalty business rule into a linear objective over binary decision variables.
//! * **`solution`**: Defines the output format: the selected variable set produced by an engine, and the final unit partition reported to the caller.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally use a `UnitIndex` where a `VariableIndex` is expected.
//! 2.  **Memory Layout**: Data is stored in **Structure of Arrays (SoA)** format so the selection loops touch dense, cache-friendly vectors. Unit ids are resolved to indices exactly once, at construction time.
//! 3.  **Fail-Fast**: `ModelBuilder::build` validates inputs eagerly (duplicate ids) so the engines never encounter an invalid state.

pub mod index;
pub mod model;
pub mod objective;
pub mod solution;
pub mod unit;
