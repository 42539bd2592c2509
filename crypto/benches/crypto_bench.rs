use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ed25519_sign_bench(c: &mut Criterion) {
    let kp = rano_crypto::generate_keypair();
    let msg = [42u8; 32];

    c.bench_function("ed25519_sign_32B", |b| {
        b.iter(|| rano_crypto::sign_message(black_box(&msg), &kp.private))
    });
}

fn ed25519_verify_bench(c: &mut Criterion) {
    let kp = rano_crypto::generate_keypair();
    let msg = [42u8; 32];
    let sig = rano_crypto::sign_message(&msg, &kp.private);

    c.bench_function("ed25519_verify_32B", |b| {
        b.iter(|| rano_crypto::verify_signature(black_box(&msg), &sig, &kp.public))
    });
}

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| rano_crypto::blake2b_256(black_box(&data)))
    });
}

fn blake2b_multi_bench(c: &mut Criterion) {
    // The shape of a send-block hashing call: two 32-byte fields and a
    // 16-byte balance.
    let parts: Vec<&[u8]> = vec![&[1u8; 32], &[2u8; 32], &[3u8; 16]];

    c.bench_function("blake2b_256_multi_3parts", |b| {
        b.iter(|| rano_crypto::blake2b_256_multi(black_box(&parts)))
    });
}

fn keypair_generation_bench(c: &mut Criterion) {
    c.bench_function("keypair_generate", |b| b.iter(rano_crypto::generate_keypair));
}

criterion_group!(
    benches,
    ed25519_sign_bench,
    ed25519_verify_bench,
    blake2b_256_bench,
    blake2b_multi_bench,
    keypair_generation_bench,
);
criterion_main!(benches);
