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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sextant_bnb::bnb::BnbSolver;
use sextant_bnb::bound::MinOutgoingEdgeBound;
use sextant_bnb::monitor::no_op::NoOperationMonitor;
use sextant_model::generation::CityGenerator;
use sextant_model::matrix::CostMatrix;
use std::hint::black_box;

const SEED: u64 = 0x5E7A_17;

fn euclidean_instance(num_cities: usize) -> CostMatrix<f64> {
    let points = CityGenerator::seeded(SEED + num_cities as u64).generate(num_cities);
    CostMatrix::from_points(&points).expect("generated coordinates are finite")
}

fn bench_euclidean_instances(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_euclidean");
    group.sample_size(10);

    for num_cities in [6usize, 8, 10, 12] {
        let matrix = euclidean_instance(num_cities);
        let mut solver = BnbSolver::preallocated(num_cities);
        let estimator = MinOutgoingEdgeBound::new();

        group.throughput(Throughput::Elements(num_cities as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_cities),
            &matrix,
            |b, matrix| {
                b.iter(|| {
                    let outcome = solver.solve(
                        black_box(matrix),
                        &estimator,
                        NoOperationMonitor::new(),
                    );
                    if !outcome.is_optimal() {
                        panic!("Benchmark configuration error: search ended without proving optimality.");
                    }
                    black_box(outcome.cost())
                })
            },
        );
    }
    group.finish();
}

fn bench_pruning_disabled(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_without_pruning");
    group.sample_size(10);

    for num_cities in [6usize, 8] {
        let matrix = euclidean_instance(num_cities);
        let mut solver = BnbSolver::preallocated(num_cities).with_pruning(false);
        let estimator = MinOutgoingEdgeBound::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_cities),
            &matrix,
            |b, matrix| {
                b.iter(|| {
                    black_box(
                        solver
                            .solve(black_box(matrix), &estimator, NoOperationMonitor::new())
                            .cost(),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_euclidean_instances, bench_pruning_disabled);
criterion_main!(benches);
