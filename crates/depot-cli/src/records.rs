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

//! The external JSON records.
//!
//! This is the process boundary: everything here exists to move data
//! between the wire shape (camelCase JSON) and the solver's domain types.
//! The `weights` object is optional; absent weights fall back to the
//! long-standing operational defaults (priority A 10, priority B 5,
//! mileage penalty 1). A negative capacity is rejected here, before any
//! model is built.

use depot_model::{
    model::{ModelError, validate_capacity},
    unit::{ObjectiveWeights, ProblemConfig, ServiceUnit},
};
use depot_search::result::SolverOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while obtaining or decoding the input record.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading the input stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The record is not valid JSON or is missing required fields.
    #[error("malformed input record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// The root input record.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    pub config: ConfigRecord,
    #[serde(default)]
    pub weights: WeightsRecord,
    pub candidates: Vec<CandidateRecord>,
}

/// The `config` object of the input record.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    /// Raw capacity; may be negative in a malformed record and is
    /// validated during conversion.
    pub capacity: i64,
    pub target_mileage: i64,
}

/// The optional `weights` object of the input record.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsRecord {
    pub priority_a: i64,
    pub priority_b: i64,
    pub mileage_penalty: i64,
}

impl Default for WeightsRecord {
    fn default() -> Self {
        Self {
            priority_a: 10,
            priority_b: 5,
            mileage_penalty: 1,
        }
    }
}

/// One entry of the `candidates` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: String,
    pub eligible: bool,
    pub mileage: i64,
    pub priority_a: i64,
    pub priority_b: i64,
}

impl InputRecord {
    /// Parses an input record from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Converts the record into the solver's domain types.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidCapacity`] if the raw capacity is
    /// negative.
    pub fn into_problem(
        self,
    ) -> Result<(Vec<ServiceUnit<i64>>, ProblemConfig<i64>, ObjectiveWeights<i64>), ModelError>
    {
        let capacity = validate_capacity(self.config.capacity)?;
        let config = ProblemConfig::new(capacity, self.config.target_mileage);
        let weights = ObjectiveWeights::new(
            self.weights.priority_a,
            self.weights.priority_b,
            self.weights.mileage_penalty,
        );
        let units = self
            .candidates
            .into_iter()
            .map(|candidate| {
                ServiceUnit::new(
                    candidate.id,
                    candidate.eligible,
                    candidate.mileage,
                    candidate.priority_a,
                    candidate.priority_b,
                )
            })
            .collect();

        Ok((units, config, weights))
    }
}

/// The output record written to stdout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub status: String,
    pub objective_value: i64,
    pub assigned: Vec<String>,
    pub remaining: Vec<String>,
}

impl OutputRecord {
    /// Builds the output record of a finished solve.
    pub fn from_outcome(outcome: &SolverOutcome<i64>) -> Self {
        match outcome.solution() {
            Some(solution) => Self {
                status: outcome.result().status_label().to_string(),
                objective_value: solution.objective_value(),
                assigned: solution.assigned().to_vec(),
                remaining: solution.remaining().to_vec(),
            },
            None => Self {
                status: outcome.result().status_label().to_string(),
                objective_value: 0,
                assigned: Vec::new(),
                remaining: Vec::new(),
            },
        }
    }

    /// Builds the record reported when the solve failed with an error.
    pub fn error() -> Self {
        Self {
            status: "ERROR".to_string(),
            objective_value: 0,
            assigned: Vec::new(),
            remaining: Vec::new(),
        }
    }

    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("output record always serializes")
    }
}
