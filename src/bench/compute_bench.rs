//! Criterion benchmarks: threaded compute across worker counts, against
//! the single-threaded reference kernels.

use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matops::matrix::random::{fill_random, rng_from_seed};
use matops::matrix::reference::{reference_diff, reference_product, reference_sum};
use matops::{Matrix, MatrixStore, compute};

fn random_inputs(size: usize) -> (Matrix<i32>, Matrix<i32>) {
    let dim = NonZeroUsize::new(size).unwrap();
    let mut rng = rng_from_seed(Some(0));
    let mut a = Matrix::zeroed(dim).unwrap();
    let mut b = Matrix::zeroed(dim).unwrap();
    fill_random(&mut a, &mut rng);
    fill_random(&mut b, &mut rng);
    (a, b)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [64, 128, 256] {
        let (a, b) = random_inputs(size);

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, _| {
            bench.iter(|| {
                (
                    reference_sum(black_box(&a), black_box(&b)).unwrap(),
                    reference_diff(black_box(&a), black_box(&b)).unwrap(),
                    reference_product(black_box(&a), black_box(&b)).unwrap(),
                )
            })
        });

        for workers in [1, 2, 4, 10] {
            let mut store = MatrixStore::with_inputs(a.clone(), b.clone()).unwrap();
            let workers = NonZeroUsize::new(workers).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{}_workers", workers), size),
                &size,
                |bench, _| bench.iter(|| compute(black_box(&mut store), workers).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
