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

/// Statistics collected during one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Name of the engine that produced the result.
    pub engine: String,
    /// Number of units in the instance.
    pub num_units: usize,
    /// Number of decision variables in the instance.
    pub num_variables: usize,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Engine: {}", self.engine)?;
        writeln!(f, "  Units: {}", self.num_units)?;
        writeln!(f, "  Decision Variables: {}", self.num_variables)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    engine: String,
    num_units: usize,
    num_variables: usize,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new `SolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            engine: String::new(),
            num_units: 0,
            num_variables: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the engine name.
    #[inline]
    pub fn engine<S>(mut self, engine: S) -> Self
    where
        S: Into<String>,
    {
        self.engine = engine.into();
        self
    }

    /// Sets the number of units.
    #[inline]
    pub fn num_units(mut self, num_units: usize) -> Self {
        self.num_units = num_units;
        self
    }

    /// Sets the number of decision variables.
    #[inline]
    pub fn num_variables(mut self, num_variables: usize) -> Self {
        self.num_variables = num_variables;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            engine: self.engine,
            num_units: self.num_units,
            num_variables: self.num_variables,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolverStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .engine("greedy")
            .num_units(5)
            .num_variables(4)
            .solve_duration(Duration::from_millis(12))
            .build();

        assert_eq!(stats.engine, "greedy");
        assert_eq!(stats.num_units, 5);
        assert_eq!(stats.num_variables, 4);
        assert_eq!(stats.solve_duration, Duration::from_millis(12));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatisticsBuilder::new()
            .engine("branch-and-bound")
            .num_units(3)
            .num_variables(2)
            .solve_duration(Duration::from_millis(1234))
            .build();

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Engine: branch-and-bound"));
        assert!(rendered.contains("Units: 3"));
        assert!(rendered.contains("Decision Variables: 2"));
        assert!(rendered.contains("Solve Duration (secs): 1.234"));
    }
}
