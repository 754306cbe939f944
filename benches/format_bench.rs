use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use secretpull::core::{serialize, transform, Format, SecretMap, TransformOptions};
use std::time::Duration;

/// Build a secret with `entries` keys and values needing quotes.
fn generate_secret(entries: usize) -> SecretMap {
    (0..entries)
        .map(|i| (format!("key_{}", i), format!("value {} with 'quotes' and = signs", i)))
        .collect()
}

/// Benchmark each output format with varying secret sizes.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for entries in [8, 64, 512] {
        let secret = generate_secret(entries);
        group.throughput(Throughput::Elements(entries as u64));

        for format in Format::ALL {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), entries),
                &secret,
                |b, secret| {
                    b.iter(|| {
                        let out = serialize(black_box(secret), black_box(format)).unwrap();
                        black_box(out);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark prefix + upper-case key transformation.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let options = TransformOptions::new("aws_sm_", true);

    for entries in [8, 64, 512] {
        let secret = generate_secret(entries);
        group.throughput(Throughput::Elements(entries as u64));

        group.bench_with_input(BenchmarkId::new("prefix_upper", entries), &secret, |b, secret| {
            b.iter(|| black_box(transform(black_box(secret), &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_transform);
criterion_main!(benches);
