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

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use depot_model::unit::{ObjectiveWeights, ProblemConfig, ServiceUnit};
use depot_solver::solver::{EngineKind, SolverBuilder};

/// Deterministic synthetic fleet; mileage and priorities spread via
/// modular arithmetic so coefficients collide occasionally.
fn synthetic_fleet(num_units: usize) -> Vec<ServiceUnit<i64>> {
    (0..num_units)
        .map(|i| {
            let n = i as i64;
            ServiceUnit::new(
                format!("U{:04}", i),
                i % 5 != 0,
                4000 + (n * 977) % 4400,
                (n * 37) % 100,
                (n * 17) % 100,
            )
        })
        .collect()
}

fn bench_engines(c: &mut Criterion) {
    let fleet = synthetic_fleet(512);
    let config = ProblemConfig::new(64, 6200);
    let weights = ObjectiveWeights::new(10, 5, 1);

    let mut group = c.benchmark_group("solve_512_units_64_slots");

    group.bench_function("greedy", |b| {
        let solver = SolverBuilder::new().with_engine(EngineKind::Greedy).build();
        b.iter(|| {
            let outcome = solver
                .solve(black_box(&fleet), &config, &weights)
                .expect("solve must succeed");
            black_box(outcome)
        })
    });

    group.bench_function("branch_and_bound", |b| {
        let solver = SolverBuilder::new()
            .with_engine(EngineKind::BranchAndBound)
            .build();
        b.iter(|| {
            let outcome = solver
                .solve(black_box(&fleet), &config, &weights)
                .expect("solve must succeed");
            black_box(outcome)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
