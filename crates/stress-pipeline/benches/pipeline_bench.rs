use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stress_core::EdaSeries;
use stress_pipeline::ForecastPipeline;

/// Deterministic random-walk trace of the given length
fn generate_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut value = 0.5;
    (0..size)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let noise = ((state >> 33) as f64 / (1u64 << 31) as f64) - 1.0;
            value += noise * 0.08;
            value
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("ForecastPipeline");
    let sizes = [30usize, 300, 3000, 30000];
    let pipeline = ForecastPipeline::default();

    for &size in &sizes {
        let series = EdaSeries::new(generate_walk(size, 42)).unwrap();

        group.bench_with_input(BenchmarkId::new("run_h15", size), &series, |b, series| {
            b.iter(|| pipeline.run(black_box(series), 15).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
