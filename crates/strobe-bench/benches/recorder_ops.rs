//! Criterion micro-benchmarks for the buffered recorder.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strobe_diag::CsvRecorder;

/// Benchmark: append 10K single-value records into a preallocated recorder.
fn bench_append_scalar_10k(c: &mut Criterion) {
    c.bench_function("append_scalar_10k", |b| {
        b.iter(|| {
            let mut recorder = CsvRecorder::new("bench.csv", 10_000, 1);
            for i in 0..10_000 {
                recorder.append(&[i as f64]).unwrap();
            }
            black_box(recorder.rows_written());
        });
    });
}

/// Benchmark: append 1K full-field records of 256 points each.
fn bench_append_field_1k(c: &mut Criterion) {
    let row: Vec<f64> = (0..256).map(|i| i as f64 * 0.5).collect();

    c.bench_function("append_field_1k", |b| {
        b.iter(|| {
            let mut recorder = CsvRecorder::new("bench.csv", 1_000, 256);
            for _ in 0..1_000 {
                recorder.append(&row).unwrap();
            }
            black_box(recorder.rows_written());
        });
    });
}

/// Benchmark: serialize a filled 1K x 64 recorder to an in-memory writer.
fn bench_serialize_1k_x_64(c: &mut Criterion) {
    let row: Vec<f64> = (0..64).map(|i| i as f64 + 0.25).collect();
    let mut recorder = CsvRecorder::new("bench.csv", 1_000, 64);
    for _ in 0..1_000 {
        recorder.append(&row).unwrap();
    }

    c.bench_function("serialize_1k_x_64", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            recorder.write_to(&mut out).unwrap();
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_append_scalar_10k,
    bench_append_field_1k,
    bench_serialize_1k_x_64
);
criterion_main!(benches);
