use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stv_noise::{value_noise_1d, NoiseField, NoiseSource};

fn bench_perlin(c: &mut Criterion) {
    let field = NoiseField::with_seed(42);
    let mut group = c.benchmark_group("perlin_line");
    for &n in &[1_000usize, 4_000, 16_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..n {
                    let x = -20.0 + 40.0 * i as f64 / n as f64;
                    acc += field.sample(0.3 * x, 0.1, 0.0);
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_value_noise(c: &mut Criterion) {
    c.bench_function("value_noise_1d_1e3", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1_000 {
                acc += value_noise_1d(i as f64 * 0.02 + 123.0);
            }
            black_box(acc);
        })
    });
}

criterion_group!(benches, bench_perlin, bench_value_noise);
criterion_main!(benches);
