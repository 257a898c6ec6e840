//! Dataset construction and indexed access.
//!
//! Run with: `cargo bench --bench dataset`

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::Array2;

use tabset::testing::{synthetic_diabetes, synthetic_digits};
use tabset::{Dataset, TabularDataset, TaskKind, Tensor};

fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(20)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset/construction");

    for n_rows in [1_797usize, 17_970, 179_700] {
        let (data, labels) = synthetic_digits(n_rows, 42);
        group.throughput(Throughput::Elements(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("ndarray_f64", n_rows), &n_rows, |b, _| {
            b.iter(|| {
                black_box(
                    TabularDataset::new(data.view(), labels.view(), TaskKind::Classification)
                        .unwrap(),
                )
            })
        });

        let flat: Vec<f32> = data.iter().map(|&v| v as f32).collect();
        let shape = [n_rows, data.ncols()];
        group.bench_with_input(BenchmarkId::new("tensor_f32", n_rows), &n_rows, |b, _| {
            b.iter(|| {
                let x = Tensor::from_vec(flat.clone(), &shape).unwrap();
                black_box(TabularDataset::new(x, labels.view(), TaskKind::Classification).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset/access");

    let (data, target) = synthetic_diabetes(442, 42);
    let ds = TabularDataset::new(data, target, TaskKind::Regression).unwrap();
    group.throughput(Throughput::Elements(ds.len() as u64));
    group.bench_function("get_all", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for i in 0..ds.len() {
                let (row, _) = ds.get(black_box(i)).unwrap();
                sum += row.sum();
            }
            black_box(sum)
        })
    });

    let wide = Array2::<f32>::zeros((10_000, 256));
    let labels = ndarray::Array1::<i64>::zeros(10_000);
    let ds = TabularDataset::classification(wide, labels).unwrap();
    group.bench_function("iter_wide", |b| {
        b.iter(|| black_box(ds.iter().map(|(row, _)| row.len()).sum::<usize>()))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_construction, bench_access
}
criterion_main!(benches);
