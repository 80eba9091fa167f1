//! KNN imputation benchmarks: sequential vs row-parallel.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use imputers::testing::data::{punch_missing, random_matrix_f64};
use imputers::{KnnImputer, Parallelism};

fn bench_knn_imputation(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_imputation");

    for &rows in &[100usize, 400] {
        let template = {
            let mut m = random_matrix_f64(rows, 20, 42, 0.0, 1.0);
            punch_missing(&mut m, 0.1, 43);
            m
        };
        let imputer = KnnImputer::new(5).unwrap();

        for parallelism in [Parallelism::Sequential, Parallelism::Parallel] {
            let label = if parallelism.is_parallel() { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(label, rows),
                &template,
                |b, template| {
                    b.iter(|| {
                        let mut data = template.clone();
                        imputer
                            .impute_with(black_box(data.view_mut()), parallelism)
                            .unwrap();
                        data
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_knn_imputation);
criterion_main!(benches);
