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

//! Thin process layer around the solver.
//!
//! Reads one input record (JSON, from a file argument or stdin), runs one
//! solve, prints the human-readable assignment plan to stderr and the
//! machine-readable output record to stdout. All solver errors map to an
//! `ERROR` output record plus a nonzero exit code, so downstream consumers
//! always receive a well-formed record on stdout.

mod records;

use depot_solver::solver::{EngineKind, SolveError, SolverBuilder};
use records::{InputError, InputRecord, OutputRecord};
use std::io::Read;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Solve(#[from] SolveError<i64>),
}

#[derive(Debug)]
struct CliArgs {
    input: Option<std::path::PathBuf>,
    engine: EngineKind,
    time_limit: Option<std::time::Duration>,
}

const USAGE: &str = "usage: depot [INPUT.json] [--engine greedy|branch-and-bound] [--time-limit-ms N]
reads the input record from INPUT.json, or from stdin when no file is given";

fn parse_args<I>(mut args: I) -> Result<CliArgs, String>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        input: None,
        engine: EngineKind::default(),
        time_limit: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--engine" => {
                let value = args.next().ok_or_else(|| USAGE.to_string())?;
                parsed.engine = match value.as_str() {
                    "greedy" => EngineKind::Greedy,
                    "branch-and-bound" => EngineKind::BranchAndBound,
                    other => return Err(format!("unknown engine '{other}'\n{USAGE}")),
                };
            }
            "--time-limit-ms" => {
                let value = args.next().ok_or_else(|| USAGE.to_string())?;
                let millis: u64 = value
                    .parse()
                    .map_err(|_| format!("invalid time limit '{value}'\n{USAGE}"))?;
                parsed.time_limit = Some(std::time::Duration::from_millis(millis));
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if parsed.input.is_none() && !arg.starts_with('-') => {
                parsed.input = Some(std::path::PathBuf::from(arg));
            }
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }

    Ok(parsed)
}

fn read_input(args: &CliArgs) -> Result<String, InputError> {
    match &args.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: &CliArgs) -> Result<OutputRecord, CliError> {
    let text = read_input(args)?;
    let record = InputRecord::from_json(&text)?;
    let (units, config, weights) = record.into_problem().map_err(SolveError::from)?;

    let mut builder = SolverBuilder::new().with_engine(args.engine);
    if let Some(limit) = args.time_limit {
        builder = builder.with_time_limit(limit);
    }
    let solver = builder.build();

    let outcome = solver.solve(&units, &config, &weights)?;
    tracing::info!(
        status = outcome.result().status_label(),
        reason = %outcome.reason(),
        "solve finished"
    );

    if let Some(solution) = outcome.solution() {
        eprintln!("{}", solution);
    }
    eprint!("{}", outcome.statistics());

    Ok(OutputRecord::from_outcome(&outcome))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(record) => {
            println!("{}", record.to_json());
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(error = %error, "solve failed");
            println!("{}", OutputRecord::error().to_json());
            ExitCode::FAILURE
        }
    }
}
