use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rano_types::BlockHash;
use rano_work::{generate_work, validate_work};

fn bench_pow_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_generation");
    let root = BlockHash::new([0x42; 32]);

    // Thresholds low enough to complete quickly: one in 2 / 16 / 256
    // nonces passes, respectively.
    for threshold in [
        0x8000_0000_0000_0000u64,
        0xF000_0000_0000_0000,
        0xFF00_0000_0000_0000,
    ] {
        group.bench_with_input(
            BenchmarkId::new("generate", threshold),
            &threshold,
            |b, &threshold| {
                b.iter(|| {
                    black_box(
                        generate_work(black_box(&root), black_box(threshold)).unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_pow_validation(c: &mut Criterion) {
    let root = BlockHash::new([0x42; 32]);
    let threshold = 0xF000_0000_0000_0000u64;
    let nonce = generate_work(&root, threshold).unwrap();

    c.bench_function("pow_validate_valid", |b| {
        b.iter(|| {
            black_box(validate_work(
                black_box(&root),
                black_box(nonce),
                black_box(threshold),
            ))
        });
    });

    c.bench_function("pow_validate_invalid", |b| {
        let other_root = BlockHash::new([0xFF; 32]);
        b.iter(|| {
            black_box(validate_work(
                black_box(&other_root),
                black_box(nonce),
                black_box(u64::MAX),
            ))
        });
    });
}

fn bench_pow_validation_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_validation_throughput");
    let threshold = 0xF000_0000_0000_0000u64;

    let roots_and_nonces: Vec<_> = (0u8..10)
        .map(|i| {
            let root = BlockHash::new([i; 32]);
            let nonce = generate_work(&root, threshold).unwrap();
            (root, nonce)
        })
        .collect();

    group.bench_function("validate_10_blocks", |b| {
        b.iter(|| {
            for (root, nonce) in &roots_and_nonces {
                black_box(validate_work(root, *nonce, threshold));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pow_generation,
    bench_pow_validation,
    bench_pow_validation_throughput,
);
criterion_main!(benches);
